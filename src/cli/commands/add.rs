use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::status_kind::StatusKind;
use crate::store::StatusStore;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Record a new training status for a client.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        client_id,
        status,
        date: date_str,
        comment,
    } = cmd
    {
        //
        // 1. Parse status code (mandatory)
        //
        let new_status = StatusKind::from_code(status).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "'{}'. Use full, modified, rehab or none (or f/m/r/n)",
                status
            ))
        })?;

        //
        // 2. Parse date (default = today)
        //
        let new_date = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let new_comment = comment.clone().unwrap_or_default();

        //
        // 3. Resolve the client in the directory
        //
        let mut pool = DbPool::new(&cfg.database)?;
        let client = queries::find_client(&mut pool, client_id)?
            .ok_or_else(|| AppError::ClientNotFound(client_id.clone()))?;

        //
        // 4. Load, append, save
        //
        let store = StatusStore::new(&cfg.status_dir);
        let mut record = store.load(&client);

        let appended = history::append(&mut record, new_status, new_date, &new_comment)?;

        if !appended {
            info(format!(
                "{} is already in {}, nothing to record.",
                record.full_name(),
                new_status
            ));
            return Ok(());
        }

        store.save(&record)?;

        log::audit(
            &pool.conn,
            "add",
            client_id,
            &format!("{} → {} ({})", record.full_name(), new_status, new_date),
        )?;

        success(format!(
            "{}: status updated to {} as of {}",
            record.full_name(),
            new_status,
            new_date
        ));
    }

    Ok(())
}
