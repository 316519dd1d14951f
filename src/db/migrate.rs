use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `clients` table exists.
fn clients_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='clients'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `clients` table has a `status` column.
fn clients_has_status_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('clients')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "status" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the directory tables with the modern schema.
fn create_directory_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id           TEXT PRIMARY KEY,
            account_type TEXT NOT NULL CHECK(account_type IN ('Athlete','Coach')),
            first_name   TEXT NOT NULL,
            last_name    TEXT NOT NULL,
            mobile       TEXT,
            email        TEXT UNIQUE,
            status       TEXT NOT NULL DEFAULT 'active' CHECK(status IN ('active','archived'))
        );

        CREATE TABLE IF NOT EXISTS user_groups (
            group_id     INTEGER PRIMARY KEY AUTOINCREMENT,
            group_name   TEXT NOT NULL UNIQUE,
            date_created TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS group_members (
            group_id  INTEGER,
            member_id TEXT,
            role      TEXT NOT NULL,
            PRIMARY KEY (group_id, member_id),
            FOREIGN KEY (group_id) REFERENCES user_groups(group_id) ON DELETE CASCADE,
            FOREIGN KEY (member_id) REFERENCES clients(id) ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_clients_name ON clients(last_name, first_name);
        CREATE INDEX IF NOT EXISTS idx_group_members_member ON group_members(member_id);
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-archival `clients` table to include the `status` column.
/// Directories created before client archiving existed lack it.
fn migrate_add_status_to_clients(conn: &Connection) -> Result<()> {
    let version = "20250412_0007_add_client_status_flag";

    // 1) Skip if already applied
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if clients_has_status_column(conn)? {
        return Ok(());
    }

    // 2) Apply
    conn.execute(
        "ALTER TABLE clients ADD COLUMN status TEXT NOT NULL DEFAULT 'active';",
        [],
    )?;

    // 3) Mark as applied
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added status flag to clients')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'status' to clients table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or upgrade the directory tables
    let clients_exist = clients_table_exists(conn)?;

    if !clients_exist {
        create_directory_tables(conn)?;
        success("Created client directory tables (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_clients_name ON clients(last_name, first_name);
            CREATE INDEX IF NOT EXISTS idx_group_members_member ON group_members(member_id);
            "#,
        )?;

        migrate_add_status_to_clients(conn)?;
    }

    Ok(())
}
