// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod path;
pub mod value_objects;

pub use path::{ends_with_separator, ensure_trailing_separator};
pub use value_objects::{AgeInDays, SECONDS_PER_DAY};
