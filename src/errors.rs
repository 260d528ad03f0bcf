//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validate::ShiftRejection;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    // ---------------------------
    // Shift logic
    // ---------------------------
    #[error("Shift details are invalid: {0}")]
    InvalidShift(#[from] ShiftRejection),

    #[error("Timesheet is empty!")]
    EmptyTimesheet,

    #[error("You did not clock in!")]
    NotClockedIn,

    #[error("Manual clock-out is still invalid: {0}")]
    InvalidManualClockOut(String),

    // ---------------------------
    // Registry (clients / jobs)
    // ---------------------------
    #[error("{0}")]
    DuplicateOrMissingJob(String),

    #[error("Can't create new client: {0}")]
    DuplicateClient(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;

/// True when the SQLite error is a UNIQUE / FOREIGN KEY / NOT NULL violation.
pub fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}
