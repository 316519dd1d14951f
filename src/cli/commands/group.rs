use crate::cli::parser::{Commands, GroupCmd};
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;

/// Manage client groups (squads, teams, clinics).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Group { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::new(&cfg.database)?;

    match action {
        GroupCmd::Create { name } => {
            let gid = queries::create_group(&pool.conn, name)?;

            log::audit(
                &pool.conn,
                "group",
                &gid.to_string(),
                &format!("Created group '{}'", name),
            )?;

            success(format!("Created group '{}' (id {})", name, gid));
        }

        GroupCmd::Join {
            group_id,
            client_id,
            role,
        } => {
            queries::add_group_member(&mut pool, *group_id, client_id, role)?;

            log::audit(
                &pool.conn,
                "group",
                &group_id.to_string(),
                &format!("Added {} as {}", client_id, role),
            )?;

            success(format!(
                "Client {} joined group {} as {}",
                client_id, group_id, role
            ));
        }

        GroupCmd::List => {
            let groups = queries::list_groups(&mut pool)?;

            if groups.is_empty() {
                warning("No groups found.");
                return Ok(());
            }

            let mut table = Table::new(&["Id", "Name", "Created", "Members"]);
            for g in &groups {
                table.add_row(vec![
                    g.group_id.to_string(),
                    g.group_name.clone(),
                    g.date_created.clone(),
                    g.member_count.to_string(),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
