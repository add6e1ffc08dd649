use crate::errors::AppResult;
use rusqlite::Connection;

const CREATE_TRACKING: &str = "CREATE TABLE tracking (
    datum     TEXT,
    prozess   TEXT,
    status    TEXT,
    uhrzeit   TEXT,
    operator  TEXT,
    operation TEXT
)";

/// Drop the `tracking` table (if present) and create it again, empty.
/// Runs on every server start.
pub fn reset_tracking_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(&format!(
        "DROP TABLE IF EXISTS tracking;\n{CREATE_TRACKING};"
    ))?;
    Ok(())
}

/// Create the `tracking` table only when it does not exist yet.
/// Used by CLI commands that work on an existing database file.
pub fn ensure_tracking_table(conn: &Connection) -> AppResult<()> {
    let sql = CREATE_TRACKING.replacen("CREATE TABLE", "CREATE TABLE IF NOT EXISTS", 1);
    conn.execute_batch(&sql)?;
    Ok(())
}
