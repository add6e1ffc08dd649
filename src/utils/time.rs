//! Time utilities: parsing and formatting HH:MM.

use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Current local time as stored in `tracking.uhrzeit`.
pub fn now_str() -> String {
    chrono::Local::now().format("%H:%M").to_string()
}
