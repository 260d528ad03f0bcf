use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::RegistryLogic;
use crate::db::queries::shifts_for_job;
use crate::db::registry::list_jobs;
use crate::errors::AppResult;
use crate::ui::messages::{heading, info};
use crate::utils::table::Table;

/// `jobs`, `shifts <job>` and `show <job>`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = open_pool(cfg)?;

    match cmd {
        Commands::Jobs => {
            let jobs = list_jobs(&pool.conn)?;
            if jobs.is_empty() {
                info("No jobs registered yet.");
                return Ok(());
            }

            let mut table = Table::new(["ID", "Name", "Created", "Client Name", "Client Email"]);
            for j in jobs {
                table.add_row(vec![
                    j.id.to_string(),
                    j.name,
                    j.created_on,
                    j.client_name,
                    j.client_email,
                ]);
            }
            println!("{}", table.render());
        }

        Commands::Shifts { job } => {
            let shifts = shifts_for_job(&pool.conn, job)?;
            if shifts.is_empty() {
                info(format!("No shifts recorded for {}.", job));
                return Ok(());
            }

            heading(format!("🗓️  Timesheet for {}", job));
            let mut table = Table::new(["ID", "Description", "Start", "End", "Duration (hrs)"]);
            for s in shifts {
                table.add_row(vec![
                    s.id.to_string(),
                    s.note.clone().unwrap_or_default(),
                    s.start_str(),
                    s.end_str().unwrap_or_else(|| "--".to_string()),
                    s.duration.map(|d| d.to_string()).unwrap_or_default(),
                ]);
            }
            println!("{}", table.render());
        }

        Commands::Show { job } => {
            let d = RegistryLogic::detail(&mut pool, job)?;

            let mut table = Table::new(["Field", "Value"]);
            for (k, v) in [
                ("ID", d.id.to_string()),
                ("Name", d.name),
                ("Created On", d.created_on),
                ("Client Name", d.client_name),
                ("Business", d.client_business),
                ("Email", d.client_email),
                ("Rate", format!("{:.2}", d.rate)),
            ] {
                table.add_row(vec![k.to_string(), v]);
            }
            println!("{}", table.render());
        }

        _ => {}
    }

    Ok(())
}
