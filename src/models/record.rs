use super::status_entry::StatusEntry;
use super::status_kind::StatusKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_status() -> StatusKind {
    StatusKind::FullTraining
}

fn default_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Authoritative per-client status record, mirroring the on-disk document:
///
/// ```json
/// {
///   "firstname": "...", "lastname": "...", "client_id": "...",
///   "current_status": "Full Training",
///   "restrictions": "",
///   "last_updated": "YYYY-MM-DD",
///   "history": [{"status": "...", "date": "YYYY-MM-DD", "comment": "..."}]
/// }
/// ```
///
/// Older documents may miss any field except the name/id triple; serde
/// defaults cover those. Documents with no `history` array get a single
/// entry synthesized from the scalar fields, see `normalize()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientStatusRecord {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default = "default_status")]
    pub current_status: StatusKind,
    #[serde(default)]
    pub restrictions: String,
    #[serde(default = "default_today")]
    pub last_updated: NaiveDate,
    #[serde(default)]
    pub history: Vec<StatusEntry>,
}

impl ClientStatusRecord {
    /// Fresh record for a client with no stored document: Full Training as
    /// of today, empty restrictions, single matching history entry.
    pub fn fresh(firstname: &str, lastname: &str, client_id: &str, today: NaiveDate) -> Self {
        Self {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            client_id: client_id.to_string(),
            current_status: StatusKind::FullTraining,
            restrictions: String::new(),
            last_updated: today,
            history: vec![StatusEntry::new(StatusKind::FullTraining, today, "")],
        }
    }

    /// Repair a freshly parsed document so the in-memory invariants hold:
    /// a non-empty history, synthesized from the scalar fields when the
    /// stored document predates the history array.
    pub fn normalize(&mut self) {
        if self.history.is_empty() {
            self.history.push(StatusEntry::new(
                self.current_status,
                self.last_updated,
                self.restrictions.clone(),
            ));
        }
    }

    /// Re-derive `current_status`, `last_updated` and `restrictions` from
    /// the last history entry. Must be called after every history mutation.
    pub fn sync_derived(&mut self) {
        if let Some(last) = self.history.last() {
            self.current_status = last.status;
            self.last_updated = last.date;
            self.restrictions = last.comment.clone();
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}
