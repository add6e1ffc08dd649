use crate::db::pool::DbPool;
use crate::db::queries::{count_by, count_records};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) TOTAL ROWS
    //
    let count = count_records(&pool.conn)?;
    println!("{}• Total entries:{} {}{}{}", CYAN, RESET, GREEN, count, RESET);

    //
    // 3) BREAKDOWNS
    //
    for column in ["operator", "status", "operation"] {
        println!("{}• Entries per {}:{}", CYAN, column, RESET);
        let groups = count_by(&pool.conn, column)?;
        if groups.is_empty() {
            println!("    {GREY}--{RESET}");
        }
        for (value, n) in groups {
            let label = value.unwrap_or_else(|| format!("{GREY}(leer){RESET}"));
            println!("    {label}: {n}");
        }
    }

    println!();
    Ok(())
}
