#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::PathBuf;
use timesheets::core::time_source::FixedClock;
use timesheets::db::initialize::init_db;
use timesheets::db::pool::DbPool;
use timesheets::models::client::NewClient;
use timesheets::core::registry::RegistryLogic;

pub fn tsh() -> Command {
    cargo_bin_cmd!("timesheets")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timesheets.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Init the DB through the CLI and register client `jon@dow.com` with job `test`.
pub fn init_db_with_job(db_path: &str) {
    tsh()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    tsh()
        .args([
            "--db",
            db_path,
            "--test",
            "client",
            "jon",
            "--business",
            "dow.inc",
            "--address",
            "123 some street, edinburgh, eh10 5aa",
            "--email",
            "jon@dow.com",
            "--phone",
            "0131 555 6969",
        ])
        .assert()
        .success();

    tsh()
        .args([
            "--db",
            db_path,
            "--test",
            "job",
            "test",
            "--client",
            "jon@dow.com",
            "--rate",
            "14",
        ])
        .assert()
        .success();
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn clock_at(s: &str) -> FixedClock {
    FixedClock(dt(s))
}

/// In-memory DB with the schema, one client and the job `test`.
pub fn memory_pool() -> DbPool {
    let mut pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init schema");

    let client = NewClient {
        name: "jon".into(),
        business: "dow.inc".into(),
        address: "123 some street".into(),
        email: "jon@dow.com".into(),
        phone: "0131 555 6969".into(),
    };
    RegistryLogic::new_client(&mut pool, &client).expect("client");
    RegistryLogic::new_job(&mut pool, "test", "jon@dow.com", 14.0).expect("job");
    pool
}
