// crates/engine/src/task.rs
//! Scheduler-facing entry point.
//!
//! A host (scheduler, CLI, ...) hands over a routine id and a parameter bag
//! and receives start/log/end callbacks through [`TaskHost`].

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::PruneConfig;
use crate::error::{EngineError, Result};
use crate::outcome::PruneReport;
use crate::params::TaskParams;
use crate::prune::prune;
use crate::resolver::resolve_at;

/// Routine id this engine answers to.
pub const ROUTINE_ID: &str = "deletefiles";

/// Return code reported to the host at the end of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Ok,
    ScanFailed,
    InvalidParameters,
}

impl TaskStatus {
    pub const fn code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::ScanFailed => 1,
            Self::InvalidParameters => 2,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl From<&EngineError> for TaskStatus {
    fn from(err: &EngineError) -> Self {
        match err {
            EngineError::Resolve(_) => Self::InvalidParameters,
            EngineError::ScanFailed { .. } => Self::ScanFailed,
        }
    }
}

/// Callbacks provided by the host around one invocation.
pub trait TaskHost {
    fn task_start(&mut self, routine_id: &str);
    fn add_task_log(&mut self, line: &str);
    fn task_end(&mut self, status: TaskStatus);
}

/// Everything an invocation produced.
#[derive(Debug, Clone)]
pub struct TaskRun {
    pub status: TaskStatus,
    /// `None` when resolution or the directory scan failed.
    pub report: Option<PruneReport>,
}

/// Handle `routine_id` if it is [`ROUTINE_ID`], using the current time as reference.
///
/// Returns `None`, without calling the host, for any other routine.
pub fn execute<H>(routine_id: &str, params: &TaskParams, host: &mut H) -> Option<TaskRun>
where
    H: TaskHost + ?Sized,
{
    execute_at(routine_id, params, Utc::now(), host)
}

pub fn execute_at<H>(
    routine_id: &str,
    params: &TaskParams,
    reference_time: DateTime<Utc>,
    host: &mut H,
) -> Option<TaskRun>
where
    H: TaskHost + ?Sized,
{
    if routine_id != ROUTINE_ID {
        return None;
    }

    host.task_start(routine_id);

    let run = match run_pass(params, reference_time) {
        Ok((config, report)) => {
            for line in report
                .outcomes
                .iter()
                .filter_map(|outcome| outcome.task_log_line(config.debug))
            {
                host.add_task_log(&line);
            }
            TaskRun {
                status: TaskStatus::Ok,
                report: Some(report),
            }
        }
        Err(err) => {
            log::error!("{err}");
            host.add_task_log(&format!("Could not run task: {err}"));
            TaskRun {
                status: TaskStatus::from(&err),
                report: None,
            }
        }
    };

    host.task_end(run.status);
    Some(run)
}

fn run_pass(
    params: &TaskParams,
    reference_time: DateTime<Utc>,
) -> Result<(PruneConfig, PruneReport)> {
    let config = resolve_at(params, reference_time)?;
    let report = prune(&config)?;
    Ok((config, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DAYS, DEBUG, DIRECTORY};
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingHost {
        events: Vec<String>,
    }

    impl TaskHost for RecordingHost {
        fn task_start(&mut self, routine_id: &str) {
            self.events.push(format!("start {routine_id}"));
        }

        fn add_task_log(&mut self, line: &str) {
            self.events.push(line.to_string());
        }

        fn task_end(&mut self, status: TaskStatus) {
            self.events.push(format!("end {}", status.code()));
        }
    }

    #[test]
    fn foreign_routine_is_ignored() {
        let mut host = RecordingHost::default();
        assert!(execute("sleep", &TaskParams::new(), &mut host).is_none());
        assert!(host.events.is_empty());
    }

    #[test]
    fn invalid_parameters_are_bracketed() {
        let mut host = RecordingHost::default();
        let run = execute(ROUTINE_ID, &TaskParams::new(), &mut host).unwrap();

        assert_eq!(run.status, TaskStatus::InvalidParameters);
        assert!(run.report.is_none());
        assert_eq!(host.events.first().map(String::as_str), Some("start deletefiles"));
        assert!(host.events[1].starts_with("Could not run task: Missing required parameter(s)"));
        assert_eq!(host.events.last().map(String::as_str), Some("end 2"));
    }

    #[test]
    fn logs_deletions_and_debug_skips() {
        let tmp = tempdir().unwrap();
        std::fs::write(tmp.path().join("a.log"), "a").unwrap();
        std::fs::create_dir(tmp.path().join("sub")).unwrap();

        let params = TaskParams::new()
            .with(DIRECTORY, tmp.path().to_string_lossy())
            .with(DAYS, "3")
            .with(DEBUG, "1");
        let reference = Utc::now() + chrono::Duration::days(4);

        let mut host = RecordingHost::default();
        let run = execute_at(ROUTINE_ID, &params, reference, &mut host).unwrap();

        assert!(run.status.is_success());
        assert_eq!(host.events.len(), 4);
        assert!(host.events[1].starts_with("Deleted file 4 days old: "));
        assert!(host.events[1].ends_with("a.log"));
        assert!(host.events[2].starts_with("Skipped directory "));
        assert_eq!(host.events[3], "end 0");
        assert!(tmp.path().join("sub").exists());
    }
}
