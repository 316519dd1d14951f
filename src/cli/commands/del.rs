use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::store::StatusStore;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Remove one history entry from a client's record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        client_id,
        entry,
        yes,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let client = queries::find_client(&mut pool, client_id)?
            .ok_or_else(|| AppError::ClientNotFound(client_id.clone()))?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete history entry #{} for {} {}? This action is irreversible.",
            entry, client.first_name, client.last_name
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let store = StatusStore::new(&cfg.status_dir);
        let mut record = store.load(&client);

        history::remove_entry(&mut record, *entry, date::today())?;

        store.save(&record)?;

        log::audit(
            &pool.conn,
            "del",
            client_id,
            &format!(
                "Deleted history entry #{} of {}",
                entry,
                record.full_name()
            ),
        )?;

        success(format!(
            "{}: history entry #{} has been deleted.",
            record.full_name(),
            entry
        ));
    }

    Ok(())
}
