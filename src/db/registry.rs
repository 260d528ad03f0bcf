//! Client and job (`tasksheet`) persistence.

use crate::errors::AppResult;
use crate::models::client::{Client, NewClient};
use crate::models::job::{Job, JobDetail, JobListing};
use rusqlite::{Connection, OptionalExtension, params};

pub fn insert_client(conn: &Connection, c: &NewClient) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO clients (client_name, client_business, client_address, client_email, client_phone)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![c.name, c.business, c.address, c.email, c.phone],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_client_by_email(conn: &Connection, email: &str) -> AppResult<Option<Client>> {
    let client = conn
        .query_row(
            "SELECT client_id, client_name, client_business, client_address, client_email, client_phone
             FROM clients WHERE client_email = ?1",
            [email],
            |row| {
                Ok(Client {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    business: row.get(2)?,
                    address: row.get(3)?,
                    email: row.get(4)?,
                    phone: row.get(5)?,
                })
            },
        )
        .optional()?;
    Ok(client)
}

pub fn insert_job(conn: &Connection, name: &str, client_id: i64, rate: f64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tasksheet (task_name, client_id, rate) VALUES (?1, ?2, ?3)",
        params![name, client_id, rate],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn resolve_job(conn: &Connection, name: &str) -> AppResult<Option<Job>> {
    let job = conn
        .query_row(
            "SELECT task_id, task_name, created_on, client_id, rate
             FROM tasksheet WHERE task_name = ?1",
            [name],
            |row| {
                Ok(Job {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_on: row.get(2)?,
                    client_id: row.get(3)?,
                    rate: row.get(4)?,
                })
            },
        )
        .optional()?;
    Ok(job)
}

pub fn list_jobs(conn: &Connection) -> AppResult<Vec<JobListing>> {
    let mut stmt = conn.prepare(
        "SELECT tasksheet.task_id, tasksheet.task_name, tasksheet.created_on,
                clients.client_name, clients.client_email
         FROM tasksheet
         JOIN clients ON tasksheet.client_id = clients.client_id
         ORDER BY tasksheet.task_id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(JobListing {
            id: row.get(0)?,
            name: row.get(1)?,
            created_on: row.get(2)?,
            client_name: row.get(3)?,
            client_email: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn job_detail(conn: &Connection, name: &str) -> AppResult<Option<JobDetail>> {
    let detail = conn
        .query_row(
            "SELECT tasksheet.task_id, tasksheet.task_name, tasksheet.created_on,
                    clients.client_name, clients.client_business, clients.client_email,
                    tasksheet.rate
             FROM tasksheet
             JOIN clients ON tasksheet.client_id = clients.client_id
             WHERE tasksheet.task_name = ?1",
            [name],
            |row| {
                Ok(JobDetail {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    created_on: row.get(2)?,
                    client_name: row.get(3)?,
                    client_business: row.get(4)?,
                    client_email: row.get(5)?,
                    rate: row.get(6)?,
                })
            },
        )
        .optional()?;
    Ok(detail)
}
