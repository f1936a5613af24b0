use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
0,2017-01-02 08:00:00,2017-01-02 08:20:00,1200,Clark St,State St,Subscriber,Male,1980.0
1,2017-01-03 08:00:00,2017-01-03 08:20:00,1200,Clark St,State St,Subscriber,Female,1985.0
2,2017-02-06 17:00:00,2017-02-06 17:10:00,600,Wells St,Lake St,Customer,,
3,2017-03-07 08:30:00,2017-03-07 08:40:00,600,Clark St,Lake St,Subscriber,Male,1990.0";

pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
0,2017-02-06 09:00:00,2017-02-06 09:05:00,300,Union Station,Capitol,Subscriber
1,2017-02-07 09:00:00,2017-02-07 09:05:00,300,Union Station,Capitol,Customer";

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_bikeshare"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Chicago and Washington trip files in `dir`; New York City is left out.
pub fn write_city_files(dir: &Path) {
    fs::write(dir.join("chicago.csv"), CHICAGO_CSV).unwrap();
    fs::write(dir.join("washington.csv"), WASHINGTON_CSV).unwrap();
}

pub fn write_config(dir: &Path, data_dir: &Path, page_size: usize) -> PathBuf {
    let cfg = serde_json::json!({
        "data_dir": { "value": data_dir, "description": "Directory holding the city trip files." },
        "raw_page_size": { "value": page_size, "description": "Raw rows shown per page." },
        "file_logging_enabled": { "value": "True", "description": "Write a session log file." }
    });
    let path = dir.join("bikeshare.json");
    fs::write(&path, cfg.to_string()).unwrap();
    path
}

pub fn run_with_args(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // The binary may exit before reading everything.
    let _ = child.stdin.as_mut().unwrap().write_all(input.as_bytes());

    child.wait_with_output().unwrap()
}

pub fn run_with_input(dir: &Path, input: &str) -> Output {
    run_with_args(dir, &[], input)
}

pub fn read_log_contents(logs_dir: &Path) -> Option<String> {
    let mut entries = fs::read_dir(logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
