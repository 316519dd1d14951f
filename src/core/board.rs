//! Grouped "coach board" view: every active athlete bucketed by current
//! status, in the fixed display order the dashboard and its report
//! consumers expect.

use crate::models::record::ClientStatusRecord;
use crate::models::status_kind::{DISPLAY_ORDER, StatusKind};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct BoardRow {
    pub client_id: String,
    pub name: String,
    pub comments: String,
    pub last_updated: NaiveDate,
}

impl BoardRow {
    fn from_record(record: &ClientStatusRecord) -> Self {
        Self {
            client_id: record.client_id.clone(),
            name: record.full_name(),
            comments: record.restrictions.clone(),
            last_updated: record.last_updated,
        }
    }
}

/// Group records by their current status. Every status appears in the
/// result, empty groups included, in the order
/// Modified Training, Full Training, Rehab, No Training. Within a group
/// the input order (last name, first name from the directory query) is
/// preserved.
pub fn group_by_status(records: &[ClientStatusRecord]) -> Vec<(StatusKind, Vec<BoardRow>)> {
    DISPLAY_ORDER
        .iter()
        .map(|&status| {
            let rows = records
                .iter()
                .filter(|r| r.current_status == status)
                .map(BoardRow::from_record)
                .collect();
            (status, rows)
        })
        .collect()
}
