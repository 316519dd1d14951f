use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        BackupLogic::backup(cfg, file, *compress)?;

        let pool = DbPool::new(&cfg.database)?;
        log::audit(
            &pool.conn,
            "backup",
            "",
            &format!("Backup archive written to {}", file),
        )?;
    }
    Ok(())
}
