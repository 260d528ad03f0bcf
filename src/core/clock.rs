use crate::core::manual::ManualInput;
use crate::core::time_source::TimeSource;
use crate::core::validate::{ShiftRejection, ShiftRules};
use crate::db::pool::DbPool;
use crate::db::queries::{insert_open_shift, most_recent_shift, update_shift};
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use rusqlite::TransactionBehavior;

/// Clock-in / clock-out state machine.
///
/// A shift is opened by [`ClockLogic::clock_in`] and closed by
/// [`ClockLogic::clock_out`], which always targets the most recently created
/// shift regardless of its job.
pub struct ClockLogic;

/// Result of a successful clock-out.
#[derive(Debug, Clone)]
pub struct ClockOut {
    /// The shift as persisted, now closed.
    pub shift: Shift,
    /// Why closing at "now" was refused, when the manual fallback was used.
    pub fallback: Option<ShiftRejection>,
}

impl ClockOut {
    pub fn was_manual(&self) -> bool {
        self.fallback.is_some()
    }
}

impl ClockLogic {
    /// Open a new shift for `job` starting now. The job name is not checked.
    pub fn clock_in(pool: &mut DbPool, clock: &dyn TimeSource, job: &str) -> AppResult<Shift> {
        let start = clock.now();
        let id = insert_open_shift(&pool.conn, job, start)?;

        Ok(Shift {
            id,
            job: job.to_string(),
            start,
            end: None,
            duration: None,
            note: None,
        })
    }

    /// Close the latest shift.
    ///
    /// The end time is "now" when that makes a valid shift; otherwise `input`
    /// is asked for one. Lookup, validation and update share one immediate
    /// transaction, so any error leaves the table untouched.
    pub fn clock_out(
        pool: &mut DbPool,
        clock: &dyn TimeSource,
        rules: &ShiftRules,
        input: &mut dyn ManualInput,
        note: Option<&str>,
    ) -> AppResult<ClockOut> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let shift = most_recent_shift(&tx)?.ok_or(AppError::EmptyTimesheet)?;
        if !shift.is_open() {
            return Err(AppError::NotClockedIn);
        }

        let auto_end = clock.now();
        let (end, duration, fallback) = match rules.validate(clock, shift.start, auto_end) {
            Ok(duration) => (auto_end, duration, None),
            Err(reason) => {
                let manual_end = input.request_date_time(&shift).ok_or_else(|| {
                    AppError::InvalidManualClockOut("couldn't parse date or time input".into())
                })?;

                let duration = rules
                    .validate(clock, shift.start, manual_end)
                    .map_err(|r| AppError::InvalidManualClockOut(r.to_string()))?;

                (manual_end, duration, Some(reason))
            }
        };

        update_shift(&tx, shift.id, end, duration, note)?;
        tx.commit()?;

        Ok(ClockOut {
            shift: Shift {
                end: Some(end),
                duration: Some(duration),
                note: note.map(str::to_string),
                ..shift
            },
            fallback,
        })
    }
}
