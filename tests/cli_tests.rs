mod common;
use common::{bike, bike_in, setup_data_dir, setup_default_data};
use predicates::str::contains;
use std::fs;

#[test]
fn test_version_and_help() {
    bike()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));

    bike()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("stats"))
        .stdout(contains("cities"));
}

#[test]
fn test_cities_lists_files() {
    let dir = setup_default_data("cities_list");

    bike_in(&dir)
        .arg("cities")
        .assert()
        .success()
        .stdout(contains("chicago.csv"))
        .stdout(contains("new_york_city.csv"))
        .stdout(contains("missing"))
        .stdout(contains("found"));
}

#[test]
fn test_config_init_and_print() {
    let dir = setup_data_dir("config_init");
    let conf = dir.join("bikeshare.conf");

    bike_in(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(contains("Configuration file written"));

    let content = fs::read_to_string(&conf).expect("read conf");
    assert!(content.contains("rows_per_page: 5"));

    // second init without --force refuses
    bike_in(&dir)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    bike_in(&dir)
        .args(["config", "--init", "--force"])
        .assert()
        .success();

    bike_in(&dir)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("separator_char:"))
        .stdout(contains("data_dir:"));
}

#[test]
fn test_broken_config_fails() {
    let dir = setup_data_dir("config_broken");
    fs::write(dir.join("bikeshare.conf"), "rows_per_page: 0\n").expect("write conf");

    bike_in(&dir)
        .args(["stats", "--city", "chicago"])
        .assert()
        .failure()
        .stderr(contains("rows_per_page"));
}
