use crate::core::chart::OperatorChart;
use crate::db::queries::{insert_record, load_records};
use crate::errors::AppResult;
use crate::models::form::EntryForm;
use crate::models::record::TrackingRecord;
use rusqlite::Connection;
use tracing::{debug, info, warn};

/// Everything the page needs after a submit: optional error banner,
/// all rows, and the operator chart.
#[derive(Debug, Clone, Default)]
pub struct TrackingView {
    pub alert: Option<String>,
    pub records: Vec<TrackingRecord>,
    pub chart: OperatorChart,
}

/// Insert-then-reload handler behind the "Eintrag hinzufügen" button.
pub struct SubmitLogic;

impl SubmitLogic {
    /// - `clicks == 0` (first page load) → nothing is inserted.
    /// - `clicks > 0` → the form values are inserted as-is; a failing insert
    ///   becomes the alert text instead of an error.
    ///
    /// The table is reloaded in both cases; only a failing reload is an error.
    pub fn apply(conn: &Connection, clicks: u32, form: &EntryForm) -> AppResult<TrackingView> {
        let mut alert = None;

        if clicks > 0 {
            let record = form.to_record();
            match insert_record(conn, &record) {
                Ok(()) => info!(
                    clicks,
                    operator = record.operator.as_deref().unwrap_or(""),
                    operation = record.operation.as_deref().unwrap_or(""),
                    "entry inserted"
                ),
                Err(e) => {
                    warn!(clicks, error = %e, "insert failed");
                    alert = Some(format!("Fehler beim Einfügen der Daten: {e}"));
                }
            }
        }

        let records = load_records(conn)?;
        debug!(rows = records.len(), "tracking table reloaded");

        let chart = OperatorChart::from_records(&records);

        Ok(TrackingView {
            alert,
            records,
            chart,
        })
    }
}
