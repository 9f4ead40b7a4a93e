// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

use std::io::Write;

use age_prune_engine::{ROUTINE_ID, TaskStatus, execute};

pub mod args;
pub mod error;
pub mod host;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::error::{AppError, Result};
use crate::host::ConsoleHost;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run one invocation of the pruning routine for parsed CLI arguments.
///
/// Per-item deletion failures do not make this fail; they are reported in
/// the task log and the returned status stays [`TaskStatus::Ok`].
///
/// # Errors
/// Fails if the parameter file cannot be loaded or output cannot be written.
pub fn run<W: Write>(args: &Args, out: W) -> Result<TaskStatus> {
    let params = args.task_params()?;

    let mut host = ConsoleHost::new(args.format, out);
    let run = execute(ROUTINE_ID, &params, &mut host).ok_or(AppError::Unhandled(ROUTINE_ID))?;
    host.finish(&run)?;

    Ok(run.status)
}
