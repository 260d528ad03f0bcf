use crate::errors::{AppError, AppResult};
use crate::models::shift::{DT_FORMAT, NewShift, Shift};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SHIFT_COLUMNS: &str = "time_id, task_name, time_in, time_out, duration, msg";

fn parse_dt(raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, DT_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.to_string())),
        )
    })
}

pub fn map_shift(row: &Row) -> Result<Shift> {
    let start_str: String = row.get("time_in")?;
    let end_str: Option<String> = row.get("time_out")?;

    let end = match end_str {
        Some(s) => Some(parse_dt(&s)?),
        None => None,
    };

    Ok(Shift {
        id: row.get("time_id")?,
        job: row.get("task_name")?,
        start: parse_dt(&start_str)?,
        end,
        duration: row.get("duration")?,
        note: row.get("msg")?,
    })
}

/// Open a shift: only job and start are written, end stays NULL.
pub fn insert_open_shift(conn: &Connection, job: &str, start: NaiveDateTime) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timesheet (task_name, time_in) VALUES (?1, ?2)",
        params![job, start.format(DT_FORMAT).to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn insert_closed_shift(conn: &Connection, shift: &NewShift) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO timesheet (task_name, time_in, time_out, duration, msg)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            shift.job,
            shift.start.format(DT_FORMAT).to_string(),
            shift.end.format(DT_FORMAT).to_string(),
            shift.duration,
            shift.note,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Latest shift by creation order, whatever job it belongs to.
pub fn most_recent_shift(conn: &Connection) -> AppResult<Option<Shift>> {
    let sql = format!("SELECT {SHIFT_COLUMNS} FROM timesheet ORDER BY time_id DESC LIMIT 1");
    let shift = conn.query_row(&sql, [], map_shift).optional()?;
    Ok(shift)
}

pub fn last_shift_for_job(conn: &Connection, job: &str) -> AppResult<Option<Shift>> {
    let sql = format!(
        "SELECT {SHIFT_COLUMNS} FROM timesheet WHERE task_name = ?1 ORDER BY time_id DESC LIMIT 1"
    );
    let shift = conn.query_row(&sql, [job], map_shift).optional()?;
    Ok(shift)
}

pub fn load_shift(conn: &Connection, id: i64) -> AppResult<Option<Shift>> {
    let sql = format!("SELECT {SHIFT_COLUMNS} FROM timesheet WHERE time_id = ?1");
    let shift = conn.query_row(&sql, [id], map_shift).optional()?;
    Ok(shift)
}

pub fn shifts_for_job(conn: &Connection, job: &str) -> AppResult<Vec<Shift>> {
    let sql =
        format!("SELECT {SHIFT_COLUMNS} FROM timesheet WHERE task_name = ?1 ORDER BY time_id ASC");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([job], map_shift)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Close a shift. Returns the number of rows touched (0 or 1).
pub fn update_shift(
    conn: &Connection,
    id: i64,
    end: NaiveDateTime,
    duration: i64,
    note: Option<&str>,
) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE timesheet SET time_out = ?1, duration = ?2, msg = ?3 WHERE time_id = ?4",
        params![end.format(DT_FORMAT).to_string(), duration, note, id],
    )?;
    Ok(n)
}

pub fn delete_shift(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM timesheet WHERE time_id = ?1", [id])?;
    Ok(n)
}

pub fn count_shifts(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM timesheet", [], |row| row.get(0))?;
    Ok(n)
}
