use crate::config::Config;
use crate::core::board;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten_grouped;
use crate::export::pdf_export::export_pdf;
use crate::store::StatusStore;
use crate::ui::messages::warning;
use crate::utils::path::is_absolute;
use std::io;
use std::path::Path;

/// High-level export logic: gather the board projection for the selected
/// group and hand it to the format writer.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        pool: &mut DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        group: Option<i64>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let group_label = match group {
            Some(gid) => queries::group_name(&pool.conn, gid)?,
            None => "All".to_string(),
        };

        let athletes = queries::list_active_athletes(pool, group)?;

        if athletes.is_empty() {
            warning("⚠️  No active athletes found for selected group.");
            return Ok(());
        }

        let store = StatusStore::new(&cfg.status_dir);
        let records: Vec<_> = athletes.iter().map(|c| store.load(c)).collect();
        let grouped = board::group_by_status(&records);

        match format {
            ExportFormat::Csv => export_csv(&flatten_grouped(&grouped), path)?,
            ExportFormat::Json => export_json(&flatten_grouped(&grouped), path)?,
            ExportFormat::Pdf => {
                let subheading = format!("Group: {}", group_label);
                export_pdf(&grouped, path, "Coach Dashboard", &subheading)?;
            }
        }

        Ok(())
    }
}
