use crate::db::pool::DbPool;
use crate::db::registry::{find_client_by_email, insert_client, insert_job, job_detail};
use crate::errors::{AppError, AppResult, is_constraint_violation};
use crate::models::client::NewClient;
use crate::models::job::JobDetail;

/// Client and job bookkeeping.
pub struct RegistryLogic;

impl RegistryLogic {
    pub fn new_client(pool: &mut DbPool, client: &NewClient) -> AppResult<i64> {
        match insert_client(&pool.conn, client) {
            Err(AppError::Db(e)) if is_constraint_violation(&e) => Err(AppError::DuplicateClient(
                format!("{} (a client with email {} already exists)", client.name, client.email),
            )),
            other => other,
        }
    }

    /// Create a job for the client identified by `client_email`.
    pub fn new_job(pool: &mut DbPool, name: &str, client_email: &str, rate: f64) -> AppResult<i64> {
        let client = find_client_by_email(&pool.conn, client_email)?.ok_or_else(|| {
            AppError::DuplicateOrMissingJob(format!(
                "Can't find client with email: {}. Does the client exist?",
                client_email
            ))
        })?;

        match insert_job(&pool.conn, name, client.id, rate) {
            Err(AppError::Db(e)) if is_constraint_violation(&e) => {
                Err(AppError::DuplicateOrMissingJob(format!(
                    "Can't create new job: {}. Does a job with this name already exist?",
                    name
                )))
            }
            other => other,
        }
    }

    pub fn detail(pool: &mut DbPool, name: &str) -> AppResult<JobDetail> {
        job_detail(&pool.conn, name)?
            .ok_or_else(|| AppError::NotFound(format!("no job named {}", name)))
    }
}
