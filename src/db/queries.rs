use crate::db::models::{ClientRow, GroupRow};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_client_row(row: &Row) -> Result<ClientRow> {
    Ok(ClientRow {
        id: row.get("id")?,
        account_type: row.get("account_type")?,
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        mobile: row.get("mobile")?,
        email: row.get("email")?,
        status: row.get("status")?,
    })
}

/// Insert a new directory entry. The id must be unique; collisions surface
/// as a database error.
pub fn insert_client(conn: &Connection, c: &ClientRow) -> AppResult<()> {
    conn.execute(
        "INSERT INTO clients (id, account_type, first_name, last_name, mobile, email, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            c.id,
            c.account_type,
            c.first_name,
            c.last_name,
            c.mobile,
            c.email,
            c.status,
        ],
    )?;
    Ok(())
}

/// Generate the next free client id of the form `C0001`.
pub fn next_client_id(conn: &Connection) -> AppResult<String> {
    let last: Option<String> = conn
        .query_row(
            "SELECT id FROM clients WHERE id LIKE 'C%' ORDER BY id DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let next = match last {
        Some(id) => id
            .trim_start_matches('C')
            .parse::<u32>()
            .map(|n| n + 1)
            .unwrap_or(1),
        None => 1,
    };

    Ok(format!("C{:04}", next))
}

pub fn find_client(pool: &mut DbPool, id: &str) -> AppResult<Option<ClientRow>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM clients WHERE id = ?1")?;
    let row = stmt.query_row([id], map_client_row).optional()?;
    Ok(row)
}

/// List directory entries, ordered by last name then first name.
/// `group` restricts the listing to members of that group;
/// `include_archived` keeps archived clients visible.
pub fn list_clients(
    pool: &mut DbPool,
    group: Option<i64>,
    include_archived: bool,
) -> AppResult<Vec<ClientRow>> {
    let mut sql = String::from("SELECT c.* FROM clients c");
    if group.is_some() {
        sql.push_str(" JOIN group_members gm ON gm.member_id = c.id AND gm.group_id = ?1");
    }
    if !include_archived {
        sql.push_str(" WHERE c.status = 'active'");
    }
    sql.push_str(" ORDER BY c.last_name, c.first_name");

    let mut stmt = pool.conn.prepare(&sql)?;

    let mut out = Vec::new();
    match group {
        Some(gid) => {
            let rows = stmt.query_map([gid], map_client_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let rows = stmt.query_map([], map_client_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// Active athletes, optionally filtered to one group, ordered by last name
/// then first name. This is the projection the board and the exporters
/// consume.
pub fn list_active_athletes(pool: &mut DbPool, group: Option<i64>) -> AppResult<Vec<ClientRow>> {
    let mut sql = String::from(
        "SELECT c.* FROM clients c
         WHERE c.account_type = 'Athlete' AND c.status = 'active'",
    );
    if group.is_some() {
        sql.push_str(
            " AND EXISTS (SELECT 1 FROM group_members gm
                          WHERE gm.member_id = c.id AND gm.group_id = ?1)",
        );
    }
    sql.push_str(" ORDER BY c.last_name, c.first_name");

    let mut stmt = pool.conn.prepare(&sql)?;

    let mut out = Vec::new();
    match group {
        Some(gid) => {
            let rows = stmt.query_map([gid], map_client_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let rows = stmt.query_map([], map_client_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// Mark a client archived. Returns false when the id is unknown.
pub fn archive_client(conn: &Connection, id: &str) -> AppResult<bool> {
    let n = conn.execute(
        "UPDATE clients SET status = 'archived' WHERE id = ?1",
        [id],
    )?;
    Ok(n > 0)
}

pub fn create_group(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO user_groups (group_name, date_created) VALUES (?1, ?2)",
        params![name, Local::now().format("%Y-%m-%d").to_string()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn group_exists(conn: &Connection, group_id: i64) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT 1 FROM user_groups WHERE group_id = ?1")?;
    Ok(stmt.exists([group_id])?)
}

/// Attach a client to a group. Both sides must exist.
pub fn add_group_member(
    pool: &mut DbPool,
    group_id: i64,
    member_id: &str,
    role: &str,
) -> AppResult<()> {
    if !group_exists(&pool.conn, group_id)? {
        return Err(AppError::GroupNotFound(group_id));
    }
    if find_client(pool, member_id)?.is_none() {
        return Err(AppError::ClientNotFound(member_id.to_string()));
    }

    pool.conn.execute(
        "INSERT OR REPLACE INTO group_members (group_id, member_id, role)
         VALUES (?1, ?2, ?3)",
        params![group_id, member_id, role],
    )?;
    Ok(())
}

pub fn list_groups(pool: &mut DbPool) -> AppResult<Vec<GroupRow>> {
    let mut stmt = pool.conn.prepare(
        "SELECT g.group_id, g.group_name, g.date_created,
                (SELECT COUNT(*) FROM group_members gm WHERE gm.group_id = g.group_id)
           FROM user_groups g
          ORDER BY g.group_name",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(GroupRow {
            group_id: row.get(0)?,
            group_name: row.get(1)?,
            date_created: row.get(2)?,
            member_count: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Group name lookup used for export subheadings.
pub fn group_name(conn: &Connection, group_id: i64) -> AppResult<String> {
    let name: Option<String> = conn
        .query_row(
            "SELECT group_name FROM user_groups WHERE group_id = ?1",
            [group_id],
            |row| row.get(0),
        )
        .optional()?;
    name.ok_or(AppError::GroupNotFound(group_id))
}
