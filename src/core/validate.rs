//! Shift validation rules.
//!
//! A candidate `(start, end)` pair is checked against three rules, in order;
//! the first one that fails decides the rejection reason:
//!
//! 1. clock-in may not be after clock-out (equal is fine: a zero-length shift)
//! 2. the floored duration may not exceed `max_shift` hours
//! 3. neither bound may lie in the future

use crate::core::time_source::TimeSource;
use chrono::NaiveDateTime;
use thiserror::Error;

/// Default upper bound on a shift, in hours.
pub const DEFAULT_MAX_SHIFT: i64 = 10;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftRejection {
    #[error("Clock-in can't be after clock-out")]
    EndsBeforeStart,

    #[error("Shift exceeds the maximum length of {max_shift} hours ({duration} hours)")]
    TooLong { duration: i64, max_shift: i64 },

    #[error("Shifts can't start or end in the future")]
    InFuture,
}

/// Whole hours between two instants, truncated toward negative infinity.
///
/// 1h59m is 1, 10h00m01s is 10.
pub fn shift_duration(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds().div_euclid(3600)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRules {
    pub max_shift: i64,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            max_shift: DEFAULT_MAX_SHIFT,
        }
    }
}

impl ShiftRules {
    pub fn new(max_shift: i64) -> Self {
        Self { max_shift }
    }

    /// Check a candidate shift. On success returns its duration in hours.
    pub fn validate(
        &self,
        clock: &dyn TimeSource,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<i64, ShiftRejection> {
        if start > end {
            return Err(ShiftRejection::EndsBeforeStart);
        }

        let duration = shift_duration(start, end);
        if duration > self.max_shift {
            return Err(ShiftRejection::TooLong {
                duration,
                max_shift: self.max_shift,
            });
        }

        let now = clock.now();
        if start > now || end > now {
            return Err(ShiftRejection::InFuture);
        }

        Ok(duration)
    }

    pub fn is_valid(&self, clock: &dyn TimeSource, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        self.validate(clock, start, end).is_ok()
    }
}
