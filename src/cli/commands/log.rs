use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::messages::{heading, info};
use ansi_term::Colour;

/// Colour of an operation name in the log listing
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "clock_in" => Colour::Green,
        "clock_out" => Colour::Cyan,
        "del" | "del_missing" => Colour::Red,
        "client" | "job" => Colour::Yellow,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = open_pool(cfg)?;
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        // widths computed on plain text, before colouring
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_label(&e.operation, &e.target).chars().count())
            .max()
            .unwrap_or(10)
            .min(60);

        heading("📜 Internal log:");

        for e in &entries {
            let label: String = op_label(&e.operation, &e.target).chars().take(op_w).collect();
            let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));
            let (op, rest) = label.split_at(label.find(' ').unwrap_or(label.len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                e.id,
                e.date,
                color_for_operation(&e.operation).paint(op),
                rest,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }
    }

    Ok(())
}

fn op_label(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}
