use crate::core::board::BoardRow;
use crate::models::status_kind::StatusKind;
use serde::Serialize;

/// Flat row for CSV/JSON export: the board projection, one line per
/// client, already in display order.
#[derive(Serialize, Clone, Debug)]
pub struct StatusExport {
    pub client_id: String,
    pub name: String,
    pub status: String,
    pub restrictions: String,
    pub last_updated: String,
}

impl StatusExport {
    pub fn new(status: StatusKind, row: &BoardRow) -> Self {
        Self {
            client_id: row.client_id.clone(),
            name: row.name.clone(),
            status: status.as_str().to_string(),
            restrictions: row.comments.clone(),
            last_updated: row.last_updated.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Flatten the grouped board into export rows, keeping the display order.
pub(crate) fn flatten_grouped(grouped: &[(StatusKind, Vec<BoardRow>)]) -> Vec<StatusExport> {
    grouped
        .iter()
        .flat_map(|(status, rows)| rows.iter().map(|r| StatusExport::new(*status, r)))
        .collect()
}
