// crates/engine/src/resolver.rs
//! Turns the host's parameter bag into a [`PruneConfig`].
//!
//! Validation order: required keys, directory, day count, then the
//! boolean-like flags. The first failure wins.

use std::fs;
use std::path::PathBuf;

use age_prune_shared_kernel::ensure_trailing_separator;
use chrono::{DateTime, Utc};

use crate::config::{PruneConfig, PruneConfigBuilder};
use crate::error::ResolveError;
use crate::params::{DAYS, DEBUG, DELETE_SUBDIRECTORIES, DIRECTORY, TaskParams};

/// The only value that enables directory deletion.
pub const DELETE_DIRECTORIES_FLAG: &str = "--delete-directories";

/// Resolve with the current instant as reference time.
///
/// # Errors
/// See [`resolve_at`].
pub fn resolve(params: &TaskParams) -> Result<PruneConfig, ResolveError> {
    resolve_at(params, Utc::now())
}

/// Resolve against an explicit reference time.
///
/// # Errors
/// - [`ResolveError::MissingParameters`] when `directory` or `days` is absent
/// - [`ResolveError::InvalidDirectory`] when `directory` is not a readable directory
/// - [`ResolveError::InvalidAge`] when `days` is not a canonical non-negative integer
/// - [`ResolveError::InvalidFlag`] for unrecognised flag literals
pub fn resolve_at(
    params: &TaskParams,
    reference_time: DateTime<Utc>,
) -> Result<PruneConfig, ResolveError> {
    let directory = params.get(DIRECTORY);
    let days = params.get(DAYS);
    let (Some(directory), Some(days)) = (directory, days) else {
        let missing = [(DIRECTORY, directory), (DAYS, days)]
            .into_iter()
            .filter_map(|(key, value)| value.is_none().then_some(key))
            .collect();
        return Err(ResolveError::MissingParameters { missing });
    };

    let root = validate_directory(directory)?;
    let max_age_days = parse_days(days)?;
    let include_directories = parse_delete_flag(params.get(DELETE_SUBDIRECTORIES))?;
    let debug = parse_debug_flag(params.get(DEBUG))?;

    log::debug!(
        "resolved root={} days={max_age_days} directories={include_directories} debug={debug}",
        root.display()
    );

    PruneConfigBuilder::default()
        .root(root)
        .max_age_days(max_age_days)
        .include_directories(include_directories)
        .reference_time(reference_time)
        .debug(debug)
        .build()
        .map_err(|e| ResolveError::InvalidParams(e.to_string()))
}

fn validate_directory(raw: &str) -> Result<PathBuf, ResolveError> {
    let normalized = ensure_trailing_separator(raw);
    let invalid = |reason: String| ResolveError::InvalidDirectory {
        path: normalized.clone(),
        reason,
    };

    let meta = fs::metadata(&normalized).map_err(|e| invalid(e.to_string()))?;
    if !meta.is_dir() {
        return Err(invalid("not a directory".to_string()));
    }
    // 読み取り可能かどうかも確認
    fs::read_dir(&normalized).map_err(|e| invalid(format!("not readable: {e}")))?;

    Ok(PathBuf::from(normalized))
}

/// Accept only values that survive a parse/format round trip, so `"3.5"`,
/// `"007"`, `"+5"` and `" 5"` are all rejected.
fn parse_days(raw: &str) -> Result<u64, ResolveError> {
    raw.parse::<u64>()
        .ok()
        .filter(|days| days.to_string() == raw)
        .ok_or_else(|| ResolveError::InvalidAge {
            value: raw.to_string(),
        })
}

fn parse_delete_flag(raw: Option<&str>) -> Result<bool, ResolveError> {
    match raw {
        None => Ok(false),
        Some(DELETE_DIRECTORIES_FLAG) => Ok(true),
        Some(other) => Err(ResolveError::InvalidFlag {
            key: DELETE_SUBDIRECTORIES,
            value: other.to_string(),
        }),
    }
}

fn parse_debug_flag(raw: Option<&str>) -> Result<bool, ResolveError> {
    match raw {
        None | Some("0" | "false") => Ok(false),
        Some("1" | "true") => Ok(true),
        Some(other) => Err(ResolveError::InvalidFlag {
            key: DEBUG,
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn params_for(dir: &std::path::Path, days: &str) -> TaskParams {
        TaskParams::new()
            .with(DIRECTORY, dir.to_string_lossy())
            .with(DAYS, days)
    }

    #[test]
    fn resolves_with_defaults() {
        let dir = tempdir().unwrap();
        let reference = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let config = resolve_at(&params_for(dir.path(), "5"), reference).unwrap();

        assert_eq!(config.max_age_days, 5);
        assert!(!config.include_directories);
        assert!(!config.debug);
        assert_eq!(config.reference_time, reference);
        assert!(age_prune_shared_kernel::ends_with_separator(
            &config.root.to_string_lossy()
        ));
    }

    #[test]
    fn reports_every_missing_key() {
        let err = resolve(&TaskParams::new()).unwrap_err();
        match err {
            ResolveError::MissingParameters { missing } => {
                assert_eq!(missing, vec![DIRECTORY, DAYS]);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = resolve(&TaskParams::new().with(DAYS, "3")).unwrap_err();
        assert!(matches!(
            err,
            ResolveError::MissingParameters { ref missing } if missing == &vec![DIRECTORY]
        ));
    }

    #[test]
    fn rejects_file_as_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();

        let err = resolve(&params_for(&file, "1")).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidDirectory { .. }));
    }

    #[test]
    fn rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let err = resolve(&params_for(&dir.path().join("nope"), "1")).unwrap_err();
        assert!(matches!(err, ResolveError::InvalidDirectory { .. }));
    }

    #[test]
    fn day_count_must_round_trip() {
        for ok in ["0", "5", "365"] {
            assert!(parse_days(ok).is_ok(), "{ok} should be accepted");
        }
        for bad in ["5.0", "3.5", "five", "abc", "-1", "+5", "007", " 5", "5 "] {
            assert!(
                matches!(parse_days(bad), Err(ResolveError::InvalidAge { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn delete_flag_accepts_only_the_literal() {
        assert!(!parse_delete_flag(None).unwrap());
        assert!(parse_delete_flag(Some("--delete-directories")).unwrap());
        for bad in ["1", "true", "yes", "--delete-directory"] {
            assert!(matches!(
                parse_delete_flag(Some(bad)),
                Err(ResolveError::InvalidFlag { key: DELETE_SUBDIRECTORIES, .. })
            ));
        }
    }

    #[test]
    fn debug_flag_literals() {
        assert!(!parse_debug_flag(None).unwrap());
        assert!(!parse_debug_flag(Some("0")).unwrap());
        assert!(!parse_debug_flag(Some("false")).unwrap());
        assert!(parse_debug_flag(Some("1")).unwrap());
        assert!(parse_debug_flag(Some("true")).unwrap());
        assert!(parse_debug_flag(Some("on")).is_err());
    }

    #[test]
    fn invalid_flag_fails_whole_resolution() {
        let dir = tempdir().unwrap();
        let params = params_for(dir.path(), "2").with(DELETE_SUBDIRECTORIES, "yes");
        assert!(matches!(
            resolve(&params),
            Err(ResolveError::InvalidFlag { .. })
        ));
    }
}
