use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::reset_tracking_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database with an empty `tracking` table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    info("Initializing labtracker…");

    //
    // 1️⃣ CONFIG FILE
    //
    if !cli.test {
        let path = cfg.save()?;
        success(format!("Config file : {}", path.display()));
    }

    //
    // 2️⃣ DATABASE
    //
    let pool = DbPool::new(&cfg.database)?;
    reset_tracking_table(&pool.conn)?;

    success(format!("Database    : {}", cfg.database));
    Ok(())
}
