// crates/engine/src/prune.rs
use std::fs::{self, DirEntry};
use std::io;
use std::path::PathBuf;

use age_prune_shared_kernel::AgeInDays;

use crate::config::PruneConfig;
use crate::error::{EngineError, Result};
use crate::outcome::{ItemOutcome, PruneReport, Reason};
use crate::remove::{remove_leaf, remove_subtree};

/// Run one scan-and-delete pass over the direct children of `config.root`.
///
/// Age filtering applies to the direct children only; a qualifying directory
/// is removed with all of its contents. Per-entry failures are recorded in the
/// report and never abort the pass.
///
/// # Errors
///
/// Returns [`EngineError::ScanFailed`] if the root cannot be listed. No entry
/// is evaluated in that case.
pub fn prune(config: &PruneConfig) -> Result<PruneReport> {
    let entries = list_children(config)?;

    log::info!(
        "scanning {} entries in {} (max age {} days, directories {})",
        entries.len(),
        config.root.display(),
        config.max_age_days,
        if config.include_directories { "included" } else { "excluded" }
    );

    let outcomes: Vec<ItemOutcome> = entries
        .iter()
        .map(|entry| evaluate(entry, config))
        .collect();
    let report = PruneReport { outcomes };

    log::info!(
        "pass finished: {} deleted, {} failed, {} skipped",
        report.deleted(),
        report.failed(),
        report.skipped()
    );
    Ok(report)
}

/// Snapshot the listing before anything is removed, sorted by name.
/// `read_dir` never yields `.` or `..`.
fn list_children(config: &PruneConfig) -> Result<Vec<DirEntry>> {
    let scan_failed = |source: io::Error| EngineError::ScanFailed {
        path: config.root.clone(),
        source,
    };

    let mut entries = fs::read_dir(&config.root)
        .map_err(scan_failed)?
        .collect::<io::Result<Vec<_>>>()
        .map_err(scan_failed)?;
    entries.sort_by_key(DirEntry::file_name);
    Ok(entries)
}

fn evaluate(entry: &DirEntry, config: &PruneConfig) -> ItemOutcome {
    let path = config.child_path(&entry.file_name());

    let stat_failed = |path: PathBuf, is_directory: bool, err: io::Error| {
        log::warn!("could not stat {}: {err}", path.display());
        ItemOutcome::failed(
            path,
            is_directory,
            None,
            Reason::StatFailed {
                message: err.to_string(),
            },
        )
    };

    let file_type = match entry.file_type() {
        Ok(ft) => ft,
        Err(err) => return stat_failed(path, false, err),
    };
    let is_directory = file_type.is_dir();

    if is_directory && !config.include_directories {
        log::debug!("skip directory {}", path.display());
        return ItemOutcome::skipped(path, true, None, Reason::DirectoriesExcluded);
    }

    // DirEntry::metadata は symlink 自身の mtime を返す
    let modified = match entry.metadata().and_then(|meta| meta.modified()) {
        Ok(modified) => modified,
        Err(err) => return stat_failed(path, is_directory, err),
    };
    let Some(age) = AgeInDays::from_system_time(config.reference_time, modified) else {
        let err = io::Error::new(
            io::ErrorKind::InvalidData,
            "modification time out of range",
        );
        return stat_failed(path, is_directory, err);
    };

    if !age.reaches(config.max_age_days) {
        log::debug!("keep {} ({age} old)", path.display());
        return ItemOutcome::skipped(path, is_directory, Some(age), Reason::BelowThreshold);
    }

    let removed = if is_directory {
        remove_subtree(&path)
    } else {
        remove_leaf(&path, file_type)
    };

    match removed {
        Ok(()) => {
            log::debug!("deleted {} ({age} old)", path.display());
            ItemOutcome::deleted(path, is_directory, age)
        }
        Err(err) => {
            log::warn!("{err}");
            ItemOutcome::failed(
                path,
                is_directory,
                Some(age),
                Reason::RemoveFailed {
                    path: err.path,
                    message: err.source.to_string(),
                },
            )
        }
    }
}
