// src/host.rs
use std::io::{self, Write};
use std::time::Instant;

use age_prune_engine::{TaskHost, TaskRun, TaskStatus};

use crate::options::OutputFormat;
use crate::presentation;

/// Task host backed by a terminal (or any writer).
///
/// In text mode every task-log line is written immediately. In JSON mode the
/// lines are buffered and emitted with the outcomes by [`ConsoleHost::finish`].
pub struct ConsoleHost<W: Write> {
    format: OutputFormat,
    out: W,
    lines: Vec<String>,
    write_error: Option<io::Error>,
    started: Option<Instant>,
}

impl<W: Write> ConsoleHost<W> {
    pub fn new(format: OutputFormat, out: W) -> Self {
        Self {
            format,
            out,
            lines: Vec::new(),
            write_error: None,
            started: None,
        }
    }

    /// Task-log lines seen so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Flush pending output and surface the first write error, if any.
    ///
    /// # Errors
    /// Returns the first I/O error hit while writing task-log lines or the
    /// JSON document.
    pub fn finish(mut self, run: &TaskRun) -> io::Result<W> {
        if let Some(err) = self.write_error.take() {
            return Err(err);
        }
        if self.format == OutputFormat::Json {
            presentation::write_json(&mut self.out, run, &self.lines)?;
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> TaskHost for ConsoleHost<W> {
    fn task_start(&mut self, routine_id: &str) {
        self.started = Some(Instant::now());
        log::info!("task '{routine_id}' started");
    }

    fn add_task_log(&mut self, line: &str) {
        self.lines.push(line.to_owned());
        if self.format == OutputFormat::Text
            && self.write_error.is_none()
            && let Err(err) = writeln!(self.out, "{line}")
        {
            self.write_error = Some(err);
        }
    }

    fn task_end(&mut self, status: TaskStatus) {
        let elapsed = self.started.map(|t| t.elapsed()).unwrap_or_default();
        log::info!(
            "task finished with code {} in {:.3}s",
            status.code(),
            elapsed.as_secs_f64()
        );
    }
}
