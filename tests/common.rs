#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn att() -> Command {
    cargo_bin_cmd!("attlog")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attlog.csv", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a unique, empty backup root directory inside the system temp dir
pub fn setup_remote_root(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attlog_remote", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path.to_string_lossy().to_string()
}

/// Unique credential cache path inside the system temp dir
pub fn setup_credentials_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_attlog_credentials.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a store and mark a small dataset useful for many tests.
/// March 2026 Tuesdays: 3rd, 10th, 17th present; 24th absent.
pub fn init_store_with_data(store_path: &str) {
    att()
        .args(["--store", store_path, "--test", "init"])
        .assert()
        .success();

    for date in ["2026-03-03", "2026-03-10", "2026-03-17"] {
        att()
            .args([
                "--store", store_path, "--test", "mark", "present", "--no-sync", "--date", date,
            ])
            .assert()
            .success();
    }

    att()
        .args([
            "--store",
            store_path,
            "--test",
            "mark",
            "absent",
            "--no-sync",
            "--date",
            "2026-03-24",
        ])
        .assert()
        .success();
}
