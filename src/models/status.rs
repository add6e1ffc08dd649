/// Workflow state of a tracked process entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Done,       // Erledigt
    InProgress, // In Bearbeitung
    Pending,    // Ausstehend
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Done, Status::InProgress, Status::Pending];

    /// Label shown in the form and stored in the `status` column.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Done => "Erledigt",
            Status::InProgress => "In Bearbeitung",
            Status::Pending => "Ausstehend",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Status::Done => "done",
            Status::InProgress => "wip",
            Status::Pending => "pending",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.label() == s)
    }

    /// Helper: accept either the label (any case) or the short code.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|st| st.label().to_lowercase() == needle || st.code() == needle)
    }
}
