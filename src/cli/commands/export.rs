use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::ensure_tracking_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use tracing::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        ensure_tracking_table(&pool.conn)?;
        let rows = ExportLogic::export(&pool, *format, file, *force)?;
        info!(format = format.as_str(), rows, file = %file, "export finished");
    }
    Ok(())
}
