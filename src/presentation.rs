// src/presentation.rs
use std::io::{self, Write};

use age_prune_engine::{ItemOutcome, TaskRun, TaskStatus};
use serde::Serialize;

#[derive(Serialize)]
struct JsonDocument<'a> {
    status: TaskStatus,
    code: u8,
    log: &'a [String],
    outcomes: &'a [ItemOutcome],
}

/// Write the whole invocation as one pretty-printed JSON document.
pub fn write_json<W: Write>(out: &mut W, run: &TaskRun, log: &[String]) -> io::Result<()> {
    let doc = JsonDocument {
        status: run.status,
        code: run.status.code(),
        log,
        outcomes: run
            .report
            .as_ref()
            .map(|r| r.outcomes.as_slice())
            .unwrap_or_default(),
    };
    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}
