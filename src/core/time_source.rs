//! Where "now" comes from.
//!
//! Every timestamp the tracker writes or compares against lives in one fixed
//! reporting offset (UTC+1 by default, no DST adjustment). Logic that needs
//! the current time receives a `&dyn TimeSource` so tests can pin it.

use chrono::{FixedOffset, NaiveDateTime, Utc};

pub trait TimeSource {
    /// Current wall-clock time in the tracker's reporting offset.
    fn now(&self) -> NaiveDateTime;
}

/// The real clock, shifted by a fixed number of hours from UTC.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    /// Returns `None` when `hours` is outside the valid UTC offset range (±23).
    pub fn with_offset_hours(hours: i32) -> Option<Self> {
        hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
    }
}

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.offset).naive_local()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
