// crates/shared-kernel/src/value_objects/age.rs
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Whole-day age of a filesystem entry relative to a reference instant.
///
/// Computed as `floor(elapsed_seconds / 86400)`. A modification time later
/// than the reference instant yields a negative age.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AgeInDays(i64);

impl AgeInDays {
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    /// Age of `modified` as seen from `reference`.
    pub fn between(reference: DateTime<Utc>, modified: DateTime<Utc>) -> Self {
        let elapsed = reference.signed_duration_since(modified).num_seconds();
        Self(elapsed.div_euclid(SECONDS_PER_DAY))
    }

    /// Age of a filesystem timestamp.
    ///
    /// Returns `None` when `modified` lies outside the range `chrono` can
    /// represent (some filesystems store arbitrary 64-bit timestamps).
    pub fn from_system_time(reference: DateTime<Utc>, modified: SystemTime) -> Option<Self> {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;
        let modified = match modified.duration_since(UNIX_EPOCH) {
            Ok(after) => epoch.checked_add_signed(TimeDelta::from_std(after).ok()?),
            Err(before) => epoch.checked_sub_signed(TimeDelta::from_std(before.duration()).ok()?),
        }?;
        Some(Self::between(reference, modified))
    }

    pub const fn days(self) -> i64 {
        self.0
    }

    /// `true` when this age is at or beyond `threshold_days`.
    pub fn reaches(self, threshold_days: u64) -> bool {
        u64::try_from(self.0).is_ok_and(|days| days >= threshold_days)
    }
}

// "1 day" / "N days"
impl fmt::Display for AgeInDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 1 {
            write!(f, "1 day")
        } else {
            write!(f, "{} days", self.0)
        }
    }
}
