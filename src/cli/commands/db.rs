use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `db` maintenance subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations are up to date.");
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                warning(format!("Database integrity check reported: {}", result));
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            success("Database vacuumed.");
        }

        if *show_info {
            let clients: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM clients", [], |row| row.get(0))?;
            let groups: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM user_groups", [], |row| row.get(0))?;
            let log_rows: i64 =
                pool.conn
                    .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;

            info(format!("Database: {}", &cfg.database));
            println!("  clients:     {}", clients);
            println!("  groups:      {}", groups);
            println!("  log entries: {}", log_rows);
        }
    }
    Ok(())
}
