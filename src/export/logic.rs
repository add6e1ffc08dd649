// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of the whole `tracking` table.
pub struct ExportLogic;

impl ExportLogic {
    /// Returns the number of exported rows (0 when the table is empty and
    /// no file was written).
    pub fn export(pool: &DbPool, format: ExportFormat, file: &str, force: bool) -> AppResult<usize> {
        let path = Path::new(file);

        let records = load_records(&pool.conn)?;

        if records.is_empty() {
            warning("No entries to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, path)?,
            ExportFormat::Json => export_json(&records, path)?,
        }

        Ok(records.len())
    }
}
