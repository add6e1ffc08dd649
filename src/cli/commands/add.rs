use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::SubmitLogic;
use crate::db::initialize::ensure_tracking_table;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::form::EntryForm;
use crate::models::status::Status;
use crate::ui::messages::{error, success};
use crate::utils::{date, time};

/// Accept `value` only if it is one of `allowed` (case-insensitive),
/// returning the configured spelling.
fn pick_choice(field: &'static str, value: &str, allowed: &[String]) -> AppResult<String> {
    allowed
        .iter()
        .find(|a| a.eq_ignore_ascii_case(value.trim()))
        .cloned()
        .ok_or_else(|| AppError::InvalidChoice {
            field,
            value: value.to_string(),
            allowed: allowed.join(", "),
        })
}

/// Add one entry, going through the same insert-then-reload logic as the
/// web form's submit button.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_arg,
        time: time_arg,
        operator,
        operation,
        status,
        comment,
    } = cmd
    {
        //
        // 1. Date / time (default: now)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s)
                .ok_or_else(|| AppError::InvalidDate(s.to_string()))?
                .format("%Y-%m-%d")
                .to_string(),
            None => date::today_str(),
        };
        let t = match time_arg {
            Some(s) => time::parse_time(s)
                .ok_or_else(|| AppError::InvalidTime(s.to_string()))?
                .format("%H:%M")
                .to_string(),
            None => time::now_str(),
        };

        //
        // 2. Dropdown values
        //
        let operator = operator
            .as_deref()
            .map(|v| pick_choice("operator", v, &cfg.operators))
            .transpose()?;
        let operation = operation
            .as_deref()
            .map(|v| pick_choice("operation", v, &cfg.operations))
            .transpose()?;
        let status = status
            .as_deref()
            .map(|v| {
                Status::parse(v)
                    .map(|s| s.label().to_string())
                    .ok_or_else(|| AppError::InvalidStatus(v.to_string()))
            })
            .transpose()?;

        let form = EntryForm {
            n_clicks: 0,
            datum: Some(d),
            uhrzeit: Some(t),
            operator,
            operation,
            status,
            prozess: comment.clone(),
        };

        //
        // 3. Insert and reload
        //
        let pool = DbPool::new(&cfg.database)?;
        ensure_tracking_table(&pool.conn)?;

        let view = SubmitLogic::apply(&pool.conn, 1, &form)?;

        if let Some(msg) = view.alert {
            error(&msg);
            return Err(AppError::Other(msg));
        }

        success(format!("Entry added ({} entries in total).", view.records.len()));
    }

    Ok(())
}
