use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;

use crate::cli::parser::Cli;
use crate::db::initialize::init_db;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite client database and all pending migrations
///  - the status document root
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.status_dir.clone(), cli.test)?;

    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_dir) = &cli.status_dir {
        cfg.status_dir = custom_dir.clone();
    }

    println!("⚙️  Initializing coachboard…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);
    println!("📁 Status dir : {}", &cfg.status_dir);

    let conn = Connection::open(&cfg.database)?;

    init_db(&conn)?;

    println!("✅ Database initialized at {}", &cfg.database);

    // internal log (non-blocking)
    if let Err(e) = log::audit(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &cfg.database),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 coachboard initialization completed!");
    Ok(())
}
