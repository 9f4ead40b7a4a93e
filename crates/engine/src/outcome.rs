// crates/engine/src/outcome.rs
use std::fmt;
use std::path::PathBuf;

use age_prune_shared_kernel::AgeInDays;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Skipped,
    Deleted,
    DeleteFailed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// Directory left alone because directory deletion is disabled.
    DirectoriesExcluded,
    /// Younger than the configured threshold.
    BelowThreshold,
    /// Type or modification time could not be read.
    StatFailed { message: String },
    /// Removal failed; `path` is the first entry that could not be removed,
    /// which may be deep inside a subtree.
    RemoveFailed { path: PathBuf, message: String },
}

/// Result for one top-level entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub path: PathBuf,
    pub is_directory: bool,
    /// `None` when the age was never computed (excluded directory, stat failure).
    pub age_in_days: Option<AgeInDays>,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

impl ItemOutcome {
    pub fn skipped(
        path: PathBuf,
        is_directory: bool,
        age_in_days: Option<AgeInDays>,
        reason: Reason,
    ) -> Self {
        Self {
            path,
            is_directory,
            age_in_days,
            action: Action::Skipped,
            reason: Some(reason),
        }
    }

    pub fn deleted(path: PathBuf, is_directory: bool, age: AgeInDays) -> Self {
        Self {
            path,
            is_directory,
            age_in_days: Some(age),
            action: Action::Deleted,
            reason: None,
        }
    }

    pub fn failed(
        path: PathBuf,
        is_directory: bool,
        age_in_days: Option<AgeInDays>,
        reason: Reason,
    ) -> Self {
        Self {
            path,
            is_directory,
            age_in_days,
            action: Action::DeleteFailed,
            reason: Some(reason),
        }
    }

    pub const fn kind(&self) -> &'static str {
        if self.is_directory { "directory" } else { "file" }
    }

    /// Task-log line for this outcome. Skips are only reported in debug mode.
    pub fn task_log_line(&self, debug: bool) -> Option<String> {
        match self.action {
            Action::Skipped if !debug => None,
            _ => Some(self.to_string()),
        }
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path.display();
        let kind = self.kind();
        let age = self
            .age_in_days
            .map_or_else(|| "unknown age".to_string(), |age| age.to_string());

        match (&self.action, &self.reason) {
            (Action::Deleted, _) => write!(f, "Deleted {kind} {age} old: {path}"),
            (Action::DeleteFailed, Some(Reason::StatFailed { message })) => {
                write!(f, "Could not stat {path}: {message}")
            }
            (Action::DeleteFailed, _) => write!(f, "Could not delete {kind} {age} old: {path}"),
            (Action::Skipped, Some(Reason::DirectoriesExcluded)) => {
                write!(f, "Skipped directory {path}")
            }
            (Action::Skipped, _) => write!(f, "Skipped {kind} {age} old: {path}"),
        }
    }
}

/// Outcomes of one pass, in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    pub outcomes: Vec<ItemOutcome>,
}

impl PruneReport {
    fn count(&self, action: Action) -> usize {
        self.outcomes.iter().filter(|o| o.action == action).count()
    }

    pub fn deleted(&self) -> usize {
        self.count(Action::Deleted)
    }

    pub fn failed(&self) -> usize {
        self.count(Action::DeleteFailed)
    }

    pub fn skipped(&self) -> usize {
        self.count(Action::Skipped)
    }

    pub fn find(&self, path: &std::path::Path) -> Option<&ItemOutcome> {
        self.outcomes.iter().find(|o| o.path == path)
    }
}
