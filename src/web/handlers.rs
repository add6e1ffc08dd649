use crate::core::chart::{Bar, OperatorChart};
use crate::core::submit::SubmitLogic;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::form::EntryForm;
use crate::models::record::TrackingRecord;
use crate::utils::{date, time};
use crate::web::render::render_page;
use crate::web::server::AppState;
use axum::Form;
use axum::Json;
use axum::extract::State;
use axum::response::Html;

/// First page load: the handler runs with zero clicks, nothing is inserted.
pub(crate) async fn index_handler(State(state): State<AppState>) -> AppResult<Html<String>> {
    let form = EntryForm::with_defaults(date::today_str(), time::now_str());
    let view = state.with_db(|pool| SubmitLogic::apply(&pool.conn, 0, &form))?;
    Ok(Html(render_page(&state.cfg, &form, 0, &view)))
}

/// One button click: the hidden counter is advanced before running the handler.
pub(crate) async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<EntryForm>,
) -> AppResult<Html<String>> {
    let clicks = form.n_clicks.saturating_add(1);
    let view = state.with_db(|pool| SubmitLogic::apply(&pool.conn, clicks, &form))?;
    Ok(Html(render_page(&state.cfg, &form, clicks, &view)))
}

pub(crate) async fn records_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TrackingRecord>>> {
    let records = state.with_db(|pool| load_records(&pool.conn))?;
    Ok(Json(records))
}

pub(crate) async fn chart_handler(State(state): State<AppState>) -> AppResult<Json<Vec<Bar>>> {
    let records = state.with_db(|pool| load_records(&pool.conn))?;
    Ok(Json(OperatorChart::from_records(&records).bars))
}

pub(crate) async fn healthz_handler() -> &'static str {
    "ok"
}
