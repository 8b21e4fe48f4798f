#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 2017-01-02 and 2017-01-09 are mondays, 2017-02-07 a tuesday,
/// 2017-03-15 a wednesday.
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:07:57,2017-01-02 09:07:57,3600,A,B,Subscriber,Male,1980.0
1,2017-01-09 08:30:00,2017-01-09 10:30:00,7200,A,B,Subscriber,Female,1990.0
2,2017-02-07 17:00:00,2017-02-07 17:10:00,600,C,D,Customer,,
3,2017-03-15 12:00:00,2017-03-15 12:20:00,1200,C,B,Subscriber,Male,1990.0
";

pub fn bike() -> Command {
    cargo_bin_cmd!("bikeshare")
}

/// Washington-style file (no Gender / Birth Year) with `rows` trips in june.
pub fn washington_csv(rows: usize) -> String {
    let mut csv =
        String::from(",Start Time,End Time,Trip Duration,Start Station,End Station,User Type\n");
    for i in 0..rows {
        let day = i % 28 + 1;
        csv.push_str(&format!(
            "{i},2017-06-{day:02} 07:00:00,2017-06-{day:02} 07:05:00,300.0,W{i} St,Union Station,Subscriber\n"
        ));
    }
    csv
}

/// Create an empty per-test data directory inside the system temp dir
pub fn setup_data_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("bikeshare_it_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create data dir");
    path
}

/// Data directory with chicago.csv and a 12-row washington.csv
pub fn setup_default_data(name: &str) -> PathBuf {
    let dir = setup_data_dir(name);
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).expect("write chicago.csv");
    fs::write(dir.join("washington.csv"), washington_csv(12)).expect("write washington.csv");
    dir
}

/// Command pointed at `dir`, with a config path that never touches $HOME
pub fn bike_in(dir: &Path) -> Command {
    let mut cmd = bike();
    cmd.arg("--config")
        .arg(dir.join("bikeshare.conf"))
        .arg("--data-dir")
        .arg(dir);
    cmd
}
