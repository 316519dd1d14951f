use crate::cli::parser::{ClientCmd, Commands};
use crate::config::Config;
use crate::db::log;
use crate::db::models::ClientRow;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;

/// Manage the client directory.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Client { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        ClientCmd::Add {
            first_name,
            last_name,
            id,
            email,
            mobile,
            coach,
        } => {
            let client_id = match id {
                Some(given) => given.clone(),
                None => queries::next_client_id(&pool.conn)?,
            };

            let account_type = if *coach { "Coach" } else { "Athlete" };

            let row = ClientRow {
                id: client_id.clone(),
                account_type: account_type.to_string(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                mobile: mobile.clone(),
                email: email.clone(),
                status: "active".to_string(),
            };

            queries::insert_client(&pool.conn, &row)?;

            log::audit(
                &pool.conn,
                "client",
                &client_id,
                &format!("Added {} {} to the directory", first_name, last_name),
            )?;

            success(format!(
                "Added {} ({} {}) as {}",
                client_id, first_name, last_name, row.account_type
            ));
        }

        ClientCmd::List { group, all } => {
            let clients = queries::list_clients(&mut pool, *group, *all)?;

            if clients.is_empty() {
                warning("No clients found.");
                return Ok(());
            }

            let mut table = Table::new(&["Id", "Name", "Type", "Status", "Email"]);
            for c in &clients {
                table.add_row(vec![
                    c.id.clone(),
                    c.full_name(),
                    c.account_type.clone(),
                    c.status.clone(),
                    c.email.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }

        ClientCmd::Archive { client_id } => {
            if !queries::archive_client(&pool.conn, client_id)? {
                return Err(AppError::ClientNotFound(client_id.clone()));
            }

            log::audit(
                &pool.conn,
                "client",
                client_id,
                "Archived directory entry",
            )?;

            success(format!("Client {} archived.", client_id));
        }
    }

    Ok(())
}
