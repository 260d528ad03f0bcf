use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the SQLite database and its tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing timesheets…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", db_path));

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    ttlog_quiet(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", db_path),
    );

    success(format!("Database initialized at {}", db_path));
    Ok(())
}
