use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::{CHART_TITLE, OperatorChart};
use crate::db::initialize::ensure_tracking_table;
use crate::db::pool::DbPool;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::record::{COLUMNS, TrackingRecord};
use crate::models::status::Status;
use crate::utils::table::Table;
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

const BAR_MAX: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { chart } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        ensure_tracking_table(&pool.conn)?;

        let records = load_records(&pool.conn)?;

        if records.is_empty() {
            println!("No entries.");
            return Ok(());
        }

        print_records(&records);

        if *chart {
            print_chart(&OperatorChart::from_records(&records));
        }
    }
    Ok(())
}

fn print_records(records: &[TrackingRecord]) {
    let mut table = Table::new(&COLUMNS);
    for rec in records {
        table.add_row(rec.cells().iter().map(|c| c.to_string()).collect());
    }
    print!("{}", table.render());

    // status summary line, coloured
    let summary: Vec<String> = Status::ALL
        .iter()
        .map(|st| {
            let n = records
                .iter()
                .filter(|r| r.status.as_deref().and_then(Status::from_db_str) == Some(*st))
                .count();
            let colour = match st {
                Status::Done => Colour::Green,
                Status::InProgress => Colour::Yellow,
                Status::Pending => Colour::Red,
            };
            colour.paint(format!("{}: {}", st.label(), n)).to_string()
        })
        .collect();
    println!("\n{} entries | {}", records.len(), summary.join(" | "));
}

fn print_chart(chart: &OperatorChart) {
    println!("\n{}", Colour::Cyan.bold().paint(CHART_TITLE));

    if chart.is_empty() {
        println!("(no operators recorded)");
        return;
    }

    let label_w = chart
        .bars
        .iter()
        .map(|b| UnicodeWidthStr::width(b.operator.as_str()))
        .max()
        .unwrap_or(0);
    let max = chart.max_count().max(1);

    for bar in &chart.bars {
        let len = (bar.count * BAR_MAX).div_ceil(max);
        let pad = label_w - UnicodeWidthStr::width(bar.operator.as_str());
        println!(
            "{}{} | {} {}",
            bar.operator,
            " ".repeat(pad),
            "█".repeat(len),
            bar.count
        );
    }
}
