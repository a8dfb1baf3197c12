use std::fs;
use std::path::{Path, PathBuf};

use showcase::paths::{log_file_in, rotate_logs, FALLBACK_LOG};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("showcase-paths-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_log_file_fallback() {
    assert_eq!(log_file_in(None), PathBuf::from(FALLBACK_LOG));
}

#[test]
fn test_log_file_in_dir() {
    assert_eq!(
        log_file_in(Some(Path::new("/tmp/cache"))),
        PathBuf::from("/tmp/cache/latest.log")
    );
}

#[test]
fn test_rotate_keeps_previous_run() {
    let dir = scratch_dir("rotate");
    fs::write(dir.join("latest.log"), "run 1").unwrap();

    rotate_logs(&dir);

    assert!(!dir.join("latest.log").exists());
    assert_eq!(fs::read_to_string(dir.join("previous.log")).unwrap(), "run 1");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_rotate_without_log_is_noop() {
    let dir = scratch_dir("noop");
    rotate_logs(&dir);
    assert!(!dir.join("previous.log").exists());
    fs::remove_dir_all(&dir).unwrap();
}
