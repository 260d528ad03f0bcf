use crate::core::time_source::TimeSource;
use crate::core::validate::ShiftRules;
use crate::db::pool::DbPool;
use crate::db::queries::insert_closed_shift;
use crate::db::registry::resolve_job;
use crate::errors::{AppError, AppResult};
use crate::models::shift::{DEFAULT_NOTE, NewShift, Shift};
use chrono::NaiveDateTime;

/// Manual entry of a complete, already closed shift.
///
/// Independent from the clock-in/out machine: an open shift (if any) is
/// neither required nor touched.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut DbPool,
        clock: &dyn TimeSource,
        rules: &ShiftRules,
        job: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        note: Option<&str>,
    ) -> AppResult<Shift> {
        // 1. rules
        let duration = rules.validate(clock, start, end)?;

        // 2. note placeholder
        let note = match note {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => DEFAULT_NOTE.to_string(),
        };

        // 3. job must exist
        if resolve_job(&pool.conn, job)?.is_none() {
            return Err(AppError::DuplicateOrMissingJob(format!(
                "Could not find a job entry with name: {}",
                job
            )));
        }

        let new_shift = NewShift {
            job: job.to_string(),
            start,
            end,
            duration,
            note,
        };

        let id = insert_closed_shift(&pool.conn, &new_shift)?;

        Ok(Shift {
            id,
            job: new_shift.job,
            start,
            end: Some(end),
            duration: Some(duration),
            note: Some(new_shift.note),
        })
    }
}
