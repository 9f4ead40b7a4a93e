// crates/engine/tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use age_prune_engine::params::{DAYS, DELETE_SUBDIRECTORIES, DIRECTORY};
use age_prune_engine::{PruneConfig, TaskParams, resolve};
use tempfile::TempDir;

pub const DAY: u64 = 86_400;

/// Scratch tree whose entries can be back-dated.
pub struct Tree {
    dir: TempDir,
}

impl Tree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, age_days: u64) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, rel).unwrap();
        backdate(&path, age_days);
        path
    }

    /// Directory mtimes change whenever children are added, so back-date
    /// directories after populating them.
    pub fn dir(&self, rel: &str, age_days: u64) -> PathBuf {
        let path = self.path().join(rel);
        fs::create_dir_all(&path).unwrap();
        backdate(&path, age_days);
        path
    }

    pub fn params(&self, days: &str) -> TaskParams {
        TaskParams::new()
            .with(DIRECTORY, self.path().to_string_lossy())
            .with(DAYS, days)
    }

    pub fn config(&self, days: u64, include_directories: bool) -> PruneConfig {
        let mut params = self.params(&days.to_string());
        if include_directories {
            params.insert(DELETE_SUBDIRECTORIES, "--delete-directories");
        }
        resolve(&params).unwrap()
    }

    /// Sorted relative paths of everything below the root.
    pub fn listing(&self) -> Vec<String> {
        let mut out = Vec::new();
        collect(self.path(), self.path(), &mut out);
        out.sort();
        out
    }
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/");
        out.push(rel);
        if entry.file_type().unwrap().is_dir() {
            collect(root, &path, out);
        }
    }
}

/// Set mtime to `age_days` days (plus a minute of slack) before now.
pub fn backdate(path: &Path, age_days: u64) {
    let when = SystemTime::now() - Duration::from_secs(age_days * DAY + 60);
    let file = if path.is_dir() {
        File::open(path)
    } else {
        OpenOptions::new().write(true).open(path)
    };
    file.unwrap().set_modified(when).unwrap();
}
