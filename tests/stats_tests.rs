mod common;
use common::{bike_in, setup_data_dir, setup_default_data};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_stats_all_chicago() {
    let dir = setup_default_data("stats_all_chicago");

    bike_in(&dir)
        .args(["stats", "--city", "chicago"])
        .assert()
        .success()
        .stdout(contains("Chicago (month: all, day: all): 4 of 4 trips selected."))
        .stdout(contains("Most common month: january"))
        .stdout(contains("Most common day of week: monday"))
        .stdout(contains("Most common start hour: 8"))
        .stdout(contains("Most common start station: A"))
        .stdout(contains("Most common end station: B"))
        .stdout(contains("Most common combination of start station and end station: A, B"))
        .stdout(contains("Total travel time: 3.50 hours"))
        .stdout(contains("Mean travel time: 3150.00 seconds"))
        .stdout(contains("Subscriber  3"))
        .stdout(contains("Customer    1"))
        .stdout(contains("Count of gender:"))
        .stdout(contains("Male    2"))
        .stdout(contains("Earliest year of birth: 1980"))
        .stdout(contains("Most recent year of birth: 1990"))
        .stdout(contains("Most common year of birth: 1990"));
}

#[test]
fn test_stats_filter_month() {
    let dir = setup_default_data("stats_filter_month");

    bike_in(&dir)
        .args(["stats", "--city", "chicago", "--month", "January"])
        .assert()
        .success()
        .stdout(contains("2 of 4 trips selected."))
        .stdout(contains("Total travel time: 3.00 hours"))
        .stdout(contains("Mean travel time: 5400.00 seconds"));
}

#[test]
fn test_stats_filter_day() {
    let dir = setup_default_data("stats_filter_day");

    bike_in(&dir)
        .args(["stats", "--city", "chicago", "--day", "tuesday"])
        .assert()
        .success()
        .stdout(contains("1 of 4 trips selected."))
        .stdout(contains("Most common month: february"))
        .stdout(contains("Most common combination of start station and end station: C, D"))
        .stdout(contains("Count of gender: no data"))
        .stdout(contains("Earliest year of birth: no data"));
}

#[test]
fn test_stats_empty_selection_reports_no_data() {
    let dir = setup_default_data("stats_empty");

    bike_in(&dir)
        .args(["stats", "--city", "chicago", "--month", "june", "--day", "sunday"])
        .assert()
        .success()
        .stdout(contains("0 of 4 trips selected."))
        .stdout(contains("Most common month: no data"))
        .stdout(contains("Most common start station: no data"))
        .stdout(contains("Mean travel time: no data"))
        .stdout(contains("Count of user types: no data"));
}

#[test]
fn test_stats_without_gender_columns() {
    let dir = setup_default_data("stats_no_gender");

    bike_in(&dir)
        .args(["stats", "--city", "washington"])
        .assert()
        .success()
        .stdout(contains("12 of 12 trips selected."))
        .stdout(contains("Most common month: june"))
        .stdout(contains("gender").not())
        .stdout(contains("year of birth").not());
}

#[test]
fn test_stats_json() {
    let dir = setup_default_data("stats_json");

    let output = bike_in(&dir)
        .args(["stats", "--city", "chicago", "--month", "january", "--format", "json"])
        .output()
        .expect("run bikeshare");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["city"], "chicago");
    assert_eq!(json["month"], "january");
    assert_eq!(json["trips_selected"], 2);
    assert_eq!(json["durations"]["total_hours"], 3.0);
    assert_eq!(json["durations"]["mean_seconds"], 5400.0);
    assert_eq!(json["time"]["day_of_week"], "monday");
    assert_eq!(json["users"]["birth_year"]["earliest"], 1980);
}

#[test]
fn test_stats_raw_rows() {
    let dir = setup_default_data("stats_raw");

    bike_in(&dir)
        .args(["stats", "--city", "washington", "--raw"])
        .assert()
        .success()
        .stdout(contains("W0 St"))
        .stdout(contains("W11 St"))
        .stdout(contains("day_of_week"));
}

#[test]
fn test_stats_missing_file_fails() {
    let dir = setup_data_dir("stats_missing_file");

    bike_in(&dir)
        .args(["stats", "--city", "new york city"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("new_york_city.csv"))
        .stderr(contains("file not found"));
}

#[test]
fn test_stats_malformed_file_fails() {
    let dir = setup_data_dir("stats_malformed");
    std::fs::write(dir.join("chicago.csv"), "Start Time,Trip Duration\nnot a date,10\n")
        .expect("write csv");

    bike_in(&dir)
        .args(["stats", "--city", "chicago"])
        .assert()
        .failure()
        .stderr(contains("missing column"));
}

#[test]
fn test_stats_invalid_selector_rejected() {
    let dir = setup_default_data("stats_invalid_selector");

    bike_in(&dir)
        .args(["stats", "--city", "boston"])
        .assert()
        .failure()
        .stderr(contains("Invalid city"));

    bike_in(&dir)
        .args(["stats", "--city", "chicago", "--month", "smarch"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}
