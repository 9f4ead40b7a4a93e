// crates/engine/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Configuration-time failures. None of these touch the filesystem beyond
/// inspecting the target directory.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Missing required parameter(s): {}", .missing.join(", "))]
    MissingParameters { missing: Vec<&'static str> },

    #[error("No directory found at {path}: {reason}")]
    InvalidDirectory { path: String, reason: String },

    #[error("Invalid day count '{value}': expected a non-negative integer")]
    InvalidAge { value: String },

    #[error("Invalid value '{value}' for parameter '{key}'")]
    InvalidFlag { key: &'static str, value: String },

    #[error("Invalid parameter bag: {0}")]
    InvalidParams(String),
}

/// First removal failure inside a subtree deletion.
#[derive(Debug, Error)]
#[error("Failed to remove '{path}': {source}")]
pub struct RemoveError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Failed to scan directory '{path}': {source}")]
    ScanFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
