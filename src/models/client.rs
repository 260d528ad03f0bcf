use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub business: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// Input for `client` creation; the id is assigned by SQLite.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub business: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}
