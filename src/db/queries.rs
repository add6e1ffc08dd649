use crate::errors::AppResult;
use crate::models::record::TrackingRecord;
use rusqlite::{Connection, Result, Row, params};

pub fn map_row(row: &Row) -> Result<TrackingRecord> {
    Ok(TrackingRecord {
        date: row.get("datum")?,
        comment: row.get("prozess")?,
        status: row.get("status")?,
        time: row.get("uhrzeit")?,
        operator: row.get("operator")?,
        operation: row.get("operation")?,
    })
}

/// Append one row. Nothing is validated: NULLs and duplicates are accepted.
pub fn insert_record(conn: &Connection, rec: &TrackingRecord) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO tracking (datum, prozess, status, uhrzeit, operator, operation)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )?;

    stmt.execute(params![
        rec.date,
        rec.comment,
        rec.status,
        rec.time,
        rec.operator,
        rec.operation,
    ])?;
    Ok(())
}

/// Load the whole table in insertion order.
pub fn load_records(conn: &Connection) -> AppResult<Vec<TrackingRecord>> {
    let mut stmt = conn.prepare(
        "SELECT datum, prozess, status, uhrzeit, operator, operation
         FROM tracking
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn count_records(conn: &Connection) -> AppResult<i64> {
    let n = conn.query_row("SELECT COUNT(*) FROM tracking", [], |row| row.get(0))?;
    Ok(n)
}

/// Row count grouped by the given column, largest group first.
/// `column` must be one of the fixed table columns.
pub fn count_by(conn: &Connection, column: &str) -> AppResult<Vec<(Option<String>, i64)>> {
    let sql = format!(
        "SELECT {column}, COUNT(*) AS n FROM tracking GROUP BY {column} ORDER BY n DESC, {column} ASC"
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, Option<String>>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
