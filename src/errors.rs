//! Unified application error type.
//! All modules (db, core, store, cli, export) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Document store
    // ---------------------------
    #[error("Status document error: {0}")]
    Document(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid training status: {0}")]
    InvalidStatus(String),

    // ---------------------------
    // Directory errors
    // ---------------------------
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    #[error("Group not found: {0}")]
    GroupNotFound(i64),

    // ---------------------------
    // History validation
    // ---------------------------
    #[error("History entry #{0} does not exist")]
    EntryOutOfRange(usize),

    #[error("Out-of-order status date: {0}")]
    DateOrder(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
