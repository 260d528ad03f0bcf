use serde::Serialize;

/// A billable task, stored in the `tasksheet` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    pub id: i64,
    pub name: String,
    pub created_on: String,
    pub client_id: i64,
    pub rate: f64,
}

/// Row of the job list: a job joined with its client.
#[derive(Debug, Clone, Serialize)]
pub struct JobListing {
    pub id: i64,
    pub name: String,
    pub created_on: String,
    pub client_name: String,
    pub client_email: String,
}

/// Everything known about one job, used by `show`.
#[derive(Debug, Clone, Serialize)]
pub struct JobDetail {
    pub id: i64,
    pub name: String,
    pub created_on: String,
    pub client_name: String,
    pub client_business: String,
    pub client_email: String,
    pub rate: f64,
}
