use std::fs;

use crate::common::{make_temp_dir, read_log_contents, run_with_input, write_city_files};

#[test]
fn session_runs_reports_and_exits_cleanly() {
    let dir = make_temp_dir("bikeshare-session");
    write_city_files(&dir);

    let output = run_with_input(&dir, "chicago\n\n\nno\nno\n");
    assert!(output.status.success(), "session should exit with 0");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Hello! Let's explore some US bikeshare data!"));
    assert!(stdout.contains("The most common month is: January"));
    assert!(stdout.contains("The most common start station is: Clark St"));
    assert!(stdout.contains("The total travel time is: 3600.0 seconds"));
    assert!(stdout.contains("Earliest year of birth: 1980"));
    assert!(stdout.contains("Would you like to restart? Enter yes or no."));
}

#[test]
fn session_pages_raw_rows_until_exhausted() {
    let dir = make_temp_dir("bikeshare-session");
    write_city_files(&dir);

    let output = run_with_input(&dir, "chicago\n\n\nyes\nno\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2017-03-07 08:30:00"));
    // four rows fit one page of five, so the pager never asks for more
    assert!(!stdout.contains("more rows of raw data"));
}

#[test]
fn session_reports_missing_columns_for_washington() {
    let dir = make_temp_dir("bikeshare-session");
    write_city_files(&dir);

    let output = run_with_input(&dir, "washington\n\ntuesday\nno\nno\n");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("The most common day of week is: Tuesday"));
    assert!(stdout.contains("No gender data available for the selected city."));
    assert!(stdout.contains("No birth data provided for the selected city."));
}

#[test]
fn session_reprompts_on_invalid_city() {
    let dir = make_temp_dir("bikeshare-session");
    write_city_files(&dir);

    let output = run_with_input(&dir, "boston\nchicago\n\n\nno\nno\n");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Invalid input.").count(), 1);
}

#[test]
fn session_fails_when_city_file_is_missing() {
    let dir = make_temp_dir("bikeshare-session");
    write_city_files(&dir);

    let output = run_with_input(&dir, "new york city\n\n\n");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("new_york_city.csv"), "stderr: {stderr}");
    let log = read_log_contents(&dir.join("logs")).expect("log file should be written");
    assert!(log.contains("ERROR"));
}

#[test]
fn session_ends_cleanly_on_closed_input() {
    let dir = make_temp_dir("bikeshare-session");
    write_city_files(&dir);

    let output = run_with_input(&dir, "");
    assert!(output.status.success());
    assert!(!dir.join("logs").exists() || fs::read_dir(dir.join("logs")).unwrap().count() == 0);
}
