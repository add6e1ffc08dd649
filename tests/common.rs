#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use labtracker::config::Config;
use labtracker::db::initialize::reset_tracking_table;
use labtracker::db::pool::DbPool;
use labtracker::web::AppState;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Binary under test, with HOME pointed at a scratch dir so that a real
/// `~/.labtracker/labtracker.conf` never leaks into the tests.
pub fn lt() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("labtracker_test_home");
    fs::create_dir_all(&home).ok();
    lt_home(&home)
}

/// Binary under test with its own HOME (and so its own config file).
pub fn lt_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("labtracker");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_labtracker.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    lt().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for (date, time, operator, operation, status, comment) in [
        ("2025-09-01", "08:15", "Alex", "PCR", "done", "Lauf 1"),
        ("2025-09-01", "10:40", "Mo", "Cobas", "wip", "Kalibrierung"),
        ("2025-09-02", "13:05", "Alex", "Analyse", "pending", "Nachmessung"),
    ] {
        lt().args([
            "--db",
            db_path,
            "add",
            "--date",
            date,
            "--time",
            time,
            "--operator",
            operator,
            "--operation",
            operation,
            "--status",
            status,
            "--comment",
            comment,
        ])
        .assert()
        .success();
    }
}

/// Fresh in-memory state with an empty tracking table.
pub fn memory_state() -> AppState {
    let pool = DbPool::in_memory().expect("open in-memory db");
    reset_tracking_table(&pool.conn).expect("create tracking table");
    AppState::new(pool, Config::default())
}

/// Make every INSERT into `tracking` fail while reads keep working.
pub fn block_inserts(conn: &rusqlite::Connection) {
    conn.execute_batch(
        "CREATE TRIGGER block_insert BEFORE INSERT ON tracking
         BEGIN SELECT RAISE(ABORT, 'insert blocked'); END;",
    )
    .expect("create trigger");
}
