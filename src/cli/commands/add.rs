use super::{open_pool, time_source};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::require_date_time;

/// Add a complete shift.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        job,
        start,
        end,
        note,
    } = &cli.command
    {
        //
        // 1. Parse timestamps (mandatory)
        //
        let start = require_date_time(start)?;
        let end = require_date_time(end)?;

        //
        // 2. Open DB and clock
        //
        let now = time_source(cli, cfg)?;
        let rules = cfg.shift_rules();
        let mut pool = open_pool(cfg)?;

        //
        // 3. Execute logic
        //
        let shift = AddLogic::apply(
            &mut pool,
            now.as_ref(),
            &rules,
            job,
            start,
            end,
            note.as_deref(),
        )?;

        let duration = shift.duration.unwrap_or(0);
        ttlog_quiet(
            &pool.conn,
            "add",
            job,
            &format!(
                "Shift #{} added: {} → {} ({} h)",
                shift.id,
                shift.start_str(),
                shift.end_str().unwrap_or_default(),
                duration
            ),
        );

        success(format!(
            "New shift added for {}.\n   Shift Duration: {} Hours",
            job, duration
        ));
    }

    Ok(())
}
