use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::store::StatusStore;
use crate::ui::messages::{success, warning};
use crate::utils::date;

/// Correct the date or comment of one history entry in place.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        client_id,
        entry,
        date: date_str,
        comment,
    } = cmd
    {
        if date_str.is_none() && comment.is_none() {
            warning("Nothing to edit: pass --date and/or --comment.");
            return Ok(());
        }

        let new_date = match date_str {
            Some(s) => {
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?)
            }
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let client = queries::find_client(&mut pool, client_id)?
            .ok_or_else(|| AppError::ClientNotFound(client_id.clone()))?;

        // re-load right before mutating so a stale entry number from an
        // earlier listing fails validation instead of hitting the wrong row
        let store = StatusStore::new(&cfg.status_dir);
        let mut record = store.load(&client);

        history::edit_entry(&mut record, *entry, new_date, comment.as_deref())?;

        store.save(&record)?;

        log::audit(
            &pool.conn,
            "edit",
            client_id,
            &format!("Edited history entry #{} of {}", entry, record.full_name()),
        )?;

        success(format!(
            "{}: history entry #{} updated.",
            record.full_name(),
            entry
        ));
    }

    Ok(())
}
