//! Console implementation of the manual clock-out request.

use crate::core::manual::ManualInput;
use crate::models::shift::Shift;
use crate::ui::messages::{error, warning};
use crate::utils::time::{parse_clock_time, parse_date};
use chrono::NaiveDateTime;
use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Asks for a date and a time on stdin.
///
/// Each answer must arrive within `timeout`; a timeout, EOF or unparsable
/// input yields `None` so the caller never hangs on a closed terminal.
pub struct ConsolePrompt {
    timeout: Duration,
}

impl ConsolePrompt {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn ask(&self, question: &str) -> Option<String> {
        print!("{} ", question);
        let _ = io::stdout().flush();

        let (tx, rx) = mpsc::channel();
        // The reader thread may outlive a timeout; the process exits soon after.
        thread::spawn(move || {
            let mut line = String::new();
            let answer = match io::stdin().read_line(&mut line) {
                Ok(n) if n > 0 => Some(line),
                _ => None,
            };
            let _ = tx.send(answer);
        });

        match rx.recv_timeout(self.timeout) {
            Ok(answer) => answer,
            Err(_) => {
                println!();
                warning(format!(
                    "No answer within {} seconds",
                    self.timeout.as_secs()
                ));
                None
            }
        }
    }
}

impl ManualInput for ConsolePrompt {
    fn request_date_time(&mut self, shift: &Shift) -> Option<NaiveDateTime> {
        warning(format!(
            "Can't automatically clock out of {}: {}",
            shift.job,
            shift.start_str()
        ));
        println!("Enter your clock-out time manually");

        let date = self
            .ask("Enter Date: (yyyy-mm-dd) >")
            .and_then(|s| parse_date(&s));
        let Some(date) = date else {
            error("Couldn't parse date input");
            return None;
        };

        let time = self
            .ask("Enter Time: (hh:mm:ss) >")
            .and_then(|s| parse_clock_time(&s));
        let Some(time) = time else {
            error("Couldn't parse time input");
            return None;
        };

        Some(date.and_time(time))
    }
}
