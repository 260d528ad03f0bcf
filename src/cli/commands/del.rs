use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

/// Delete a shift. A missing target is reported, not treated as a failure.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, last } = cmd {
        let mut pool = open_pool(cfg)?;

        let result = match (id, last) {
            (Some(id), _) => DeleteLogic::by_id(&mut pool, *id),
            (None, Some(job)) => DeleteLogic::last_for_job(&mut pool, job),
            (None, None) => return Ok(()), // clap requires one of the two
        };

        let target = last.clone().unwrap_or_default();
        match result {
            Ok(removed) => {
                ttlog_quiet(
                    &pool.conn,
                    "del",
                    &target,
                    &format!("Deleted shift entry with ID: {}", removed),
                );
                match last {
                    Some(job) => success(format!(
                        "Deleted shift entry with ID: {} for job: {}",
                        removed, job
                    )),
                    None => success(format!("Deleted shift entry with ID: {}", removed)),
                }
            }
            Err(AppError::NotFound(what)) => {
                ttlog_quiet(&pool.conn, "del_missing", &target, &what);
                warning(format!("Nothing deleted: {}", what));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
