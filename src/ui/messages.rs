//! Terminal feedback: one coloured line per message, errors go to stderr.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_CLOCK: &str = "⏱️";

fn tag(colour: Colour, icon: &str) -> String {
    Style::new().bold().fg(colour).paint(icon).to_string()
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Blue, ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Green, ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Yellow, ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", tag(Colour::Red, ICON_ERR), msg);
}

/// Clock-in / clock-out confirmations.
pub fn clock<T: fmt::Display>(msg: T) {
    println!("{} {}", tag(Colour::Cyan, ICON_CLOCK), msg);
}

/// Bold section title followed by a blank line.
pub fn heading<T: fmt::Display>(msg: T) {
    println!("{}\n", Style::new().bold().paint(msg.to_string()));
}
