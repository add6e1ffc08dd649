use super::record::TrackingRecord;
use serde::Deserialize;

/// Current values of the entry form, as posted by the browser.
///
/// Field names match the `name` attributes rendered by `web::render`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntryForm {
    pub n_clicks: u32,
    pub datum: Option<String>,
    pub uhrzeit: Option<String>,
    pub operator: Option<String>,
    pub operation: Option<String>,
    pub status: Option<String>,
    pub prozess: Option<String>,
}

/// Empty inputs and unselected dropdowns arrive as "" and are stored as NULL.
fn non_empty(v: &Option<String>) -> Option<String> {
    v.as_ref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

impl EntryForm {
    /// Form prefilled with today's date and the current time.
    pub fn with_defaults(date: String, time: String) -> Self {
        Self {
            datum: Some(date),
            uhrzeit: Some(time),
            ..Self::default()
        }
    }

    pub fn to_record(&self) -> TrackingRecord {
        TrackingRecord {
            date: non_empty(&self.datum),
            comment: non_empty(&self.prozess),
            status: non_empty(&self.status),
            time: non_empty(&self.uhrzeit),
            operator: non_empty(&self.operator),
            operation: non_empty(&self.operation),
        }
    }
}
