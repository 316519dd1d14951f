use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::store::StatusStore;
use crate::utils::formatting::status_dot;
use crate::utils::table::Table;

/// Show the coach board: every active athlete grouped by current training
/// status, in the fixed display order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { group } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let athletes = queries::list_active_athletes(&mut pool, *group)?;

        if athletes.is_empty() {
            println!("No active athletes found.");
            return Ok(());
        }

        let store = StatusStore::new(&cfg.status_dir);
        let records: Vec<_> = athletes.iter().map(|c| store.load(c)).collect();
        let grouped = board::group_by_status(&records);

        for (status, rows) in grouped {
            if rows.is_empty() {
                continue;
            }

            println!("\n{}  ({})", status_dot(status), rows.len());

            let mut table = Table::new(&["Client", "Restrictions & Comments", "Last Updated"]);
            for row in &rows {
                table.add_row(vec![
                    row.name.clone(),
                    row.comments.clone(),
                    row.last_updated.format("%Y-%m-%d").to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
