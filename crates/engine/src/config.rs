// crates/engine/src/config.rs
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Typed configuration for one pruning pass.
///
/// Produced by [`crate::resolver`]; immutable once built.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct PruneConfig {
    /// Target directory, always ending with a path separator.
    pub root: PathBuf,
    #[builder(default)]
    pub max_age_days: u64,
    #[builder(default)]
    pub include_directories: bool,
    /// Instant ages are measured against; fixed for the whole pass.
    #[builder(default = "Utc::now()")]
    pub reference_time: DateTime<Utc>,
    #[builder(default)]
    pub debug: bool,
}

impl PruneConfig {
    /// Path of a direct child, built as `root + name`.
    pub fn child_path(&self, name: &OsStr) -> PathBuf {
        self.root.join(name)
    }
}
