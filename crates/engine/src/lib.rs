// crates/engine/src/lib.rs
//! Age-based pruning of a directory's direct children.
//!
//! [`resolver::resolve`] validates a [`TaskParams`] bag into a
//! [`PruneConfig`]; [`prune::prune`] performs one scan-and-delete pass.
//! [`task::execute`] wires both to a scheduler-style [`task::TaskHost`].

pub mod config;
pub mod error;
pub mod outcome;
pub mod params;
pub mod prune;
pub mod remove;
pub mod resolver;
pub mod task;

pub use config::{PruneConfig, PruneConfigBuilder};
pub use error::{EngineError, RemoveError, ResolveError, Result};
pub use outcome::{Action, ItemOutcome, PruneReport, Reason};
pub use params::TaskParams;
pub use prune::prune;
pub use resolver::{resolve, resolve_at};
pub use task::{ROUTINE_ID, TaskHost, TaskRun, TaskStatus, execute, execute_at};
