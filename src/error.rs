// src/error.rs
use std::io;
use std::path::PathBuf;

use age_prune_engine::{ResolveError, TaskStatus};
use thiserror::Error;

/// Exit code when the task ran but its output could not be written.
pub const OUTPUT_FAILURE: u8 = 3;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read parameter file {}: {source}", .path.display())]
    ParamsRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid parameter file {}: {source}", .path.display())]
    ParamsInvalid {
        path: PathBuf,
        #[source]
        source: ResolveError,
    },

    #[error("routine '{0}' was not handled")]
    Unhandled(&'static str),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl AppError {
    /// Process exit code; parameter problems share the task's own code.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ParamsRead { .. } | Self::ParamsInvalid { .. } => {
                TaskStatus::InvalidParameters.code()
            }
            Self::Unhandled(_) => 1,
            Self::Output(_) => OUTPUT_FAILURE,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
