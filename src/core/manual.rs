//! Manual end-time fallback used by clock-out.
//!
//! When a shift can't be closed at "now" (usually because it would exceed the
//! maximum length, i.e. somebody forgot to clock out) the logic asks a
//! `ManualInput` for the real end time. Implementations decide where that
//! comes from: a console prompt, a CLI flag, or a fixed value in tests.

use crate::models::shift::Shift;
use chrono::NaiveDateTime;

pub trait ManualInput {
    /// Ask for the end time of `shift`. `None` means no usable answer
    /// (malformed input, timeout, cancelled or non-interactive).
    fn request_date_time(&mut self, shift: &Shift) -> Option<NaiveDateTime>;
}

/// Answers with a value decided up front. Also records whether it was asked.
#[derive(Debug, Clone, Default)]
pub struct PresetInput {
    value: Option<NaiveDateTime>,
    asked: usize,
}

impl PresetInput {
    pub fn new(value: Option<NaiveDateTime>) -> Self {
        Self { value, asked: 0 }
    }

    /// Never provides a value.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn times_asked(&self) -> usize {
        self.asked
    }
}

impl ManualInput for PresetInput {
    fn request_date_time(&mut self, _shift: &Shift) -> Option<NaiveDateTime> {
        self.asked += 1;
        self.value
    }
}
