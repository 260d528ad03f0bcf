use crate::db::pool::DbPool;
use crate::db::queries::{delete_shift, last_shift_for_job};
use crate::errors::{AppError, AppResult};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one shift by id.
    pub fn by_id(pool: &mut DbPool, id: i64) -> AppResult<i64> {
        if delete_shift(&pool.conn, id)? == 0 {
            return Err(AppError::NotFound(format!("no shift entry with id {}", id)));
        }
        Ok(id)
    }

    /// Delete the highest-id shift of `job`. Returns the id removed.
    pub fn last_for_job(pool: &mut DbPool, job: &str) -> AppResult<i64> {
        let shift = last_shift_for_job(&pool.conn, job)?.ok_or_else(|| {
            AppError::NotFound(format!("no shift entries for job named {}", job))
        })?;

        Self::by_id(pool, shift.id)
    }
}
