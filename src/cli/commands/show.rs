use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timeline;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::store::StatusStore;
use crate::utils::date;
use crate::utils::formatting::{bold, status_dot};
use crate::utils::table::Table;

/// Show one client's full status record: derived fields, the editable
/// history table and the proportional timeline bar.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { client_id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let client = queries::find_client(&mut pool, client_id)?
            .ok_or_else(|| AppError::ClientNotFound(client_id.clone()))?;

        let store = StatusStore::new(&cfg.status_dir);
        let record = store.load(&client);

        let today = date::today();

        println!("{}  ({})", bold(&record.full_name()), record.client_id);
        println!("Status:       {}", status_dot(record.current_status));
        println!("Restrictions: {}", record.restrictions);
        println!("Last updated: {}", record.last_updated.format("%Y-%m-%d"));
        println!();

        let mut table = Table::new(&["#", "Status", "Date", "Restrictions & Comments"]);
        for (i, entry) in record.history.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                entry.status.as_str().to_string(),
                entry.date_str(),
                entry.comment.clone(),
            ]);
        }
        print!("{}", table.render());
        println!();

        let segments = timeline::build_segments(&record.history, today);
        println!(
            "{}",
            timeline::bar_labels(&record.history, today, cfg.timeline_width)
        );
        println!("{}", timeline::render_bar(&segments, cfg.timeline_width));
    }

    Ok(())
}
