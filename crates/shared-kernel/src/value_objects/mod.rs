// crates/shared-kernel/src/value_objects/mod.rs
pub mod age;

pub use age::{AgeInDays, SECONDS_PER_DAY};
