use crate::models::record::TrackingRecord;
use serde::Serialize;

pub const CHART_TITLE: &str = "Anzahl der Einträge pro Arbeiter";
pub const X_LABEL: &str = "Arbeiter";
pub const Y_LABEL: &str = "Anzahl der Einträge";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Bar {
    pub operator: String,
    pub count: usize,
}

/// Entry counts per operator.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct OperatorChart {
    pub bars: Vec<Bar>,
}

impl OperatorChart {
    /// One bar per distinct operator, in order of first appearance.
    /// Rows without an operator are not charted.
    pub fn from_records(records: &[TrackingRecord]) -> Self {
        let mut bars: Vec<Bar> = Vec::new();

        for op in records.iter().filter_map(|r| r.operator.as_deref()) {
            match bars.iter_mut().find(|b| b.operator == op) {
                Some(bar) => bar.count += 1,
                None => bars.push(Bar {
                    operator: op.to_string(),
                    count: 1,
                }),
            }
        }

        Self { bars }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.bars.iter().map(|b| b.count).max().unwrap_or(0)
    }

    pub fn categories(&self) -> Vec<&str> {
        self.bars.iter().map(|b| b.operator.as_str()).collect()
    }
}
