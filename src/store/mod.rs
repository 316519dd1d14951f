//! Filesystem document store: one JSON document per client, holding the
//! authoritative status record. Layout on disk:
//!
//! `<status_dir>/<lastname>_<firstname>_<client_id>/status.json`
//!
//! Absent or unreadable documents are never an error: they mean "new
//! client" and load as a fresh Full Training record. Saving overwrites the
//! previous document unconditionally (last write wins, no versioning).

use crate::db::models::ClientRow;
use crate::errors::AppResult;
use crate::models::record::ClientStatusRecord;
use crate::utils::date;
use std::fs;
use std::path::{Path, PathBuf};

pub struct StatusStore {
    root: PathBuf,
}

impl StatusStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Deterministic folder key for one client.
    pub fn client_key(last_name: &str, first_name: &str, client_id: &str) -> String {
        format!("{}_{}_{}", last_name, first_name, client_id)
    }

    pub fn document_path(&self, client: &ClientRow) -> PathBuf {
        self.root
            .join(Self::client_key(
                &client.last_name,
                &client.first_name,
                &client.id,
            ))
            .join("status.json")
    }

    /// Load the record for one directory entry.
    ///
    /// Missing or malformed documents both fall back to the fresh-client
    /// default; a half-written file on disk must never break the board.
    /// The name/id triple always comes from the directory, not from the
    /// document, so renames in the directory win.
    pub fn load(&self, client: &ClientRow) -> ClientStatusRecord {
        let today = date::today();
        let path = self.document_path(client);

        let mut record = fs::read_to_string(&path)
            .ok()
            .and_then(|content| serde_json::from_str::<ClientStatusRecord>(&content).ok())
            .unwrap_or_else(|| {
                ClientStatusRecord::fresh(&client.first_name, &client.last_name, &client.id, today)
            });

        record.firstname = client.first_name.clone();
        record.lastname = client.last_name.clone();
        record.client_id = client.id.clone();
        record.normalize();

        record
    }

    /// Persist the full record, creating the client folder when needed.
    /// I/O failures surface to the caller; there is no retry.
    pub fn save(&self, record: &ClientStatusRecord) -> AppResult<()> {
        let dir = self.root.join(Self::client_key(
            &record.lastname,
            &record.firstname,
            &record.client_id,
        ));
        fs::create_dir_all(&dir)?;

        let json = serde_json::to_string_pretty(record)?;
        fs::write(dir.join("status.json"), json)?;

        Ok(())
    }
}
