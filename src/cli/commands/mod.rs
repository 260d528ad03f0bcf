pub mod add;
pub mod clock;
pub mod config;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod registry;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::time_source::{FixedClock, TimeSource};
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time::require_date_time;

/// Open the configured database, creating missing tables.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// System clock in the configured offset, or a frozen one when `--now` is given.
pub(crate) fn time_source(cli: &Cli, cfg: &Config) -> AppResult<Box<dyn TimeSource>> {
    match &cli.now {
        Some(raw) => Ok(Box::new(FixedClock(require_date_time(raw)?))),
        None => Ok(Box::new(cfg.system_clock()?)),
    }
}
