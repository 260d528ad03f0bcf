use super::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::registry::RegistryLogic;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::client::NewClient;
use crate::ui::messages::success;

/// Handle `client <name> --email ...`
pub fn handle_client(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Client {
        name,
        business,
        address,
        email,
        phone,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;

        let client = NewClient {
            name: name.clone(),
            business: business.clone(),
            address: address.clone(),
            email: email.clone(),
            phone: phone.clone(),
        };
        let id = RegistryLogic::new_client(&mut pool, &client)?;

        ttlog_quiet(&pool.conn, "client", email, &format!("Client #{} created", id));
        success(format!("Client {} <{}> created (id {}).", name, email, id));
    }

    Ok(())
}

/// Handle `job <name> --client <email> --rate <r>`
pub fn handle_job(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Job {
        name,
        client_email,
        rate,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;

        let id = RegistryLogic::new_job(&mut pool, name, client_email, *rate)?;

        ttlog_quiet(
            &pool.conn,
            "job",
            name,
            &format!("Job #{} created for {} at {:.2}/h", id, client_email, rate),
        );
        success(format!("Job {} created (id {}).", name, id));
    }

    Ok(())
}
