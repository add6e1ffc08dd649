//! SQLite connection wrapper: one connection, opened once and reused.

use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        ensure_parent_dir(p)?;
        let conn = Connection::open(p)?;
        Ok(Self { conn })
    }

    /// In-memory database, handy for tests.
    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }
}
