use chrono::NaiveDateTime;
use serde::Serialize;

/// Text layout used for every timestamp stored in the `timesheet` table.
pub const DT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Note stored on manually entered shifts when none is given.
pub const DEFAULT_NOTE: &str = "no description";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shift {
    pub id: i64,                    // ⇔ timesheet.time_id
    pub job: String,                // ⇔ timesheet.task_name
    pub start: NaiveDateTime,       // ⇔ timesheet.time_in  (TEXT "YYYY-MM-DD HH:MM:SS")
    pub end: Option<NaiveDateTime>, // ⇔ timesheet.time_out (NULL while open)
    pub duration: Option<i64>,      // ⇔ timesheet.duration (whole hours)
    pub note: Option<String>,       // ⇔ timesheet.msg
}

impl Shift {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    pub fn start_str(&self) -> String {
        self.start.format(DT_FORMAT).to_string()
    }

    pub fn end_str(&self) -> Option<String> {
        self.end.map(|e| e.format(DT_FORMAT).to_string())
    }
}

/// A fully specified shift, ready to be inserted already closed.
#[derive(Debug, Clone)]
pub struct NewShift {
    pub job: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration: i64,
    pub note: String,
}
