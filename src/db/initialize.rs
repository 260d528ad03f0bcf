use crate::errors::AppResult;
use rusqlite::Connection;

/// Create every table the tracker needs. Safe to run on an existing database.
///
/// `timesheet` keeps the historical column names
/// (`time_id, task_name, time_in, time_out, duration, msg`) so that
/// databases written by earlier versions remain readable.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            client_id       INTEGER PRIMARY KEY AUTOINCREMENT,
            client_name     TEXT NOT NULL,
            client_business TEXT NOT NULL DEFAULT '',
            client_address  TEXT NOT NULL DEFAULT '',
            client_email    TEXT NOT NULL UNIQUE,
            client_phone    TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS tasksheet (
            task_id    INTEGER PRIMARY KEY AUTOINCREMENT,
            task_name  TEXT NOT NULL UNIQUE,
            created_on TEXT NOT NULL DEFAULT (datetime('now')),
            client_id  INTEGER NOT NULL REFERENCES clients(client_id),
            rate       REAL NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS timesheet (
            time_id   INTEGER PRIMARY KEY AUTOINCREMENT,
            task_name TEXT NOT NULL,
            time_in   TEXT NOT NULL DEFAULT (datetime('now', '+1 hour')),
            time_out  TEXT,
            duration  INTEGER,
            msg       TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_timesheet_task ON timesheet(task_name, time_id);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
