use super::{open_pool, time_source};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::core::manual::{ManualInput, PresetInput};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{clock, warning};
use crate::ui::prompt::ConsolePrompt;
use crate::utils::time::{format_dt, parse_date_time};
use std::time::Duration;

/// Handle `in <job>`
pub fn handle_in(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::In { job } = &cli.command {
        let now = time_source(cli, cfg)?;
        let mut pool = open_pool(cfg)?;

        let shift = ClockLogic::clock_in(&mut pool, now.as_ref(), job)?;

        ttlog_quiet(
            &pool.conn,
            "clock_in",
            job,
            &format!("Shift #{} opened at {}", shift.id, shift.start_str()),
        );
        clock(format!(
            "Clocked in to {} at: {} (shift #{})",
            job,
            shift.start_str(),
            shift.id
        ));
    }

    Ok(())
}

/// Handle `out [--note] [--end] [--no-prompt]`
pub fn handle_out(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Out {
        note,
        end,
        no_prompt,
    } = &cli.command
    {
        let now = time_source(cli, cfg)?;
        let rules = cfg.shift_rules();
        let mut pool = open_pool(cfg)?;

        // An unparsable --end behaves like a malformed prompt answer.
        let mut input: Box<dyn ManualInput> = match (end, no_prompt) {
            (Some(raw), _) => Box::new(PresetInput::new(parse_date_time(raw))),
            (None, true) => Box::new(PresetInput::none()),
            (None, false) => Box::new(ConsolePrompt::new(Duration::from_secs(
                cfg.prompt_timeout_secs,
            ))),
        };

        let out = ClockLogic::clock_out(
            &mut pool,
            now.as_ref(),
            &rules,
            input.as_mut(),
            note.as_deref(),
        )?;

        let end_str = out.shift.end.as_ref().map(format_dt).unwrap_or_default();
        let duration = out.shift.duration.unwrap_or(0);

        if let Some(reason) = &out.fallback {
            warning(format!("Automatic clock-out refused ({}), used manual time", reason));
        }

        ttlog_quiet(
            &pool.conn,
            "clock_out",
            &out.shift.job,
            &format!(
                "Shift #{} closed at {} ({} h{})",
                out.shift.id,
                end_str,
                duration,
                if out.was_manual() { ", manual" } else { "" }
            ),
        );

        clock(format!(
            "Clocked out of {} at: {}\n   Shift Duration: {} Hours",
            out.shift.job, end_str, duration
        ));
    }

    Ok(())
}
