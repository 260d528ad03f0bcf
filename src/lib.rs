//! timesheets library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Client { .. } => commands::registry::handle_client(&cli.command, cfg),
        Commands::Job { .. } => commands::registry::handle_job(&cli.command, cfg),
        Commands::In { .. } => commands::clock::handle_in(cli, cfg),
        Commands::Out { .. } => commands::clock::handle_out(cli, cfg),
        Commands::Add { .. } => commands::add::handle(cli, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Jobs | Commands::Shifts { .. } | Commands::Show { .. } => {
            commands::list::handle(&cli.command, cfg)
        }
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line DB override
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
