use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::AuditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print, filter } = cmd
        && *print
    {
        let mut pool = DbPool::new(&cfg.database)?;
        AuditLogic::print_log(&mut pool, cfg, filter)?;
    }
    Ok(())
}
