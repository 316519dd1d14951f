use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Create a zip archive holding the client database and the whole
    /// status-document tree. `compress` selects Deflated over Stored.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let db_src = Path::new(&cfg.database);
        let status_root = Path::new(&cfg.status_dir);
        let dest = Path::new(dest_file);

        if !db_src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", db_src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        info(format!("Creating backup: {}", dest.display()));

        let method = if compress {
            CompressionMethod::Deflated
        } else {
            CompressionMethod::Stored
        };
        let options: FileOptions<'_, ()> = FileOptions::default().compression_method(method);

        let file = File::create(dest)?;
        let mut zip = ZipWriter::new(file);

        // 1) database
        zip.start_file("clients.sqlite", options)
            .map_err(|e| AppError::Other(format!("Backup failed (start_file): {e}")))?;
        let db_content = fs::read(db_src)?;
        zip.write_all(&db_content)?;

        // 2) status documents
        if status_root.exists() {
            let mut docs = Vec::new();
            collect_documents(status_root, &mut docs)?;

            for doc in docs {
                let rel = doc
                    .strip_prefix(status_root)
                    .map_err(|e| AppError::Other(format!("Backup failed (path): {e}")))?;
                let name = format!("patient_status/{}", rel.to_string_lossy());

                zip.start_file(name, options)
                    .map_err(|e| AppError::Other(format!("Backup failed (start_file): {e}")))?;

                let mut content = Vec::new();
                File::open(&doc)?.read_to_end(&mut content)?;
                zip.write_all(&content)?;
            }
        }

        zip.finish()
            .map_err(|e| AppError::Other(format!("Backup failed (finish): {e}")))?;

        success(format!("📦 Backup created: {}", dest.display()));
        Ok(())
    }
}

/// Recursively collect regular files under `dir`.
fn collect_documents(dir: &Path, out: &mut Vec<PathBuf>) -> AppResult<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_documents(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}
