// tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

const DAY: u64 = 86_400;

/// Write a file and set its mtime `age_days` days (plus a minute) in the past.
pub fn aged_file(root: &Path, rel: &str, age_days: u64) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, rel).unwrap();
    backdate(&path, age_days);
    path
}

/// Create (or reuse) a directory and back-date it. Call after populating it.
pub fn aged_dir(root: &Path, rel: &str, age_days: u64) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(&path).unwrap();
    backdate(&path, age_days);
    path
}

pub fn backdate(path: &Path, age_days: u64) {
    let when = SystemTime::now() - Duration::from_secs(age_days * DAY + 60);
    let file = if path.is_dir() {
        File::open(path)
    } else {
        OpenOptions::new().write(true).open(path)
    };
    file.unwrap().set_modified(when).unwrap();
}
