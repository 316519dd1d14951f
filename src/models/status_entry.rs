use super::status_kind::StatusKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated status fact: "client was in status X starting on date".
/// Stored inside the `history` array of a status document. `comment` is
/// absent in documents written before the comment field existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub status: StatusKind,
    pub date: NaiveDate, // ⇔ "date" (TEXT "YYYY-MM-DD")
    #[serde(default)]
    pub comment: String,
}

impl StatusEntry {
    pub fn new(status: StatusKind, date: NaiveDate, comment: impl Into<String>) -> Self {
        Self {
            status,
            date,
            comment: comment.into(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
