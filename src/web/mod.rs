//! Local web surface: one page with the entry form, the table and the chart,
//! plus a couple of JSON read endpoints.

pub mod handlers;
pub mod render;
pub mod server;

pub use server::{AppState, build_router, prepare_state, serve};

use crate::errors::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
