use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::{ensure_tracking_table, reset_tracking_table};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info, check, reset } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        //
        // 1) RESET
        //
        if *reset {
            println!("{}▶ Recreating tracking table…{}", CYAN, RESET);
            reset_tracking_table(&pool.conn)?;
            println!("{}✔ Tracking table is empty.{}\n", GREEN, RESET);
        } else {
            ensure_tracking_table(&pool.conn)?;
        }

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }
    }

    Ok(())
}
