use std::fs;

use crate::common::{make_temp_dir, read_log_contents, run_with_args, write_city_files, write_config};

#[test]
fn config_file_sets_data_dir_and_page_size() {
    let dir = make_temp_dir("bikeshare-config");
    let data_dir = dir.join("data");
    fs::create_dir_all(&data_dir).unwrap();
    write_city_files(&data_dir);
    let config_path = write_config(&dir, &data_dir, 2);
    let logs_dir = dir.join("session-logs");

    let output = run_with_args(
        &dir,
        &[
            "--config",
            config_path.to_str().unwrap(),
            "--logs",
            logs_dir.to_str().unwrap(),
        ],
        "chicago\n\n\nyes\nyes\nno\n",
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RAW_PAGE_SIZE"));
    assert!(stdout.contains("Would you like to see 2 rows of raw data?"));
    assert!(stdout.contains("Would you like to see 2 more rows of raw data?"));

    let log = read_log_contents(&logs_dir).expect("log file should be written");
    assert!(log.contains("Filters selected: city=chicago, month=all, day=all"));
}

#[test]
fn invalid_config_fails_at_startup() {
    let dir = make_temp_dir("bikeshare-config");
    fs::write(dir.join("bikeshare.json"), "{ not json").unwrap();

    let output = run_with_args(&dir, &[], "chicago\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON"), "stderr: {stderr}");
}

#[test]
fn zero_page_size_is_rejected() {
    let dir = make_temp_dir("bikeshare-config");
    let config_path = write_config(&dir, &dir, 0);

    let output = run_with_args(&dir, &["--config", config_path.to_str().unwrap()], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Page size must be at least 1"), "stderr: {stderr}");
}

#[test]
fn unknown_argument_fails() {
    let dir = make_temp_dir("bikeshare-config");

    let output = run_with_args(&dir, &["--verbose"], "");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown argument: --verbose"));
}
