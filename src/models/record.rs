use serde::Serialize;

/// Column names of the `tracking` table, in table order.
pub const COLUMNS: [&str; 6] = ["datum", "prozess", "status", "uhrzeit", "operator", "operation"];

/// One row of the `tracking` table.
///
/// Every field is free text and may be NULL: the form does not validate
/// anything before inserting.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct TrackingRecord {
    #[serde(rename = "datum")]
    pub date: Option<String>, // ⇔ tracking.datum   ("YYYY-MM-DD")
    #[serde(rename = "prozess")]
    pub comment: Option<String>, // ⇔ tracking.prozess
    pub status: Option<String>, // ⇔ tracking.status   (Erledigt | In Bearbeitung | Ausstehend)
    #[serde(rename = "uhrzeit")]
    pub time: Option<String>, // ⇔ tracking.uhrzeit  ("HH:MM")
    pub operator: Option<String>, // ⇔ tracking.operator
    pub operation: Option<String>, // ⇔ tracking.operation
}

impl TrackingRecord {
    /// Field values in column order, NULL rendered as an empty string.
    pub fn cells(&self) -> [&str; 6] {
        [
            self.date.as_deref().unwrap_or(""),
            self.comment.as_deref().unwrap_or(""),
            self.status.as_deref().unwrap_or(""),
            self.time.as_deref().unwrap_or(""),
            self.operator.as_deref().unwrap_or(""),
            self.operation.as_deref().unwrap_or(""),
        ]
    }
}
