use crate::config::Config;
use crate::db::initialize::reset_tracking_table;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::web::handlers;
use axum::Router;
use axum::routing::get;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tracing::info;

/// Shared state: the single database connection and the loaded config.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<DbPool>>,
    pub cfg: Arc<Config>,
}

impl AppState {
    pub fn new(pool: DbPool, cfg: Config) -> Self {
        Self {
            db: Arc::new(Mutex::new(pool)),
            cfg: Arc::new(cfg),
        }
    }

    /// Run `f` with exclusive access to the connection.
    pub fn with_db<T>(&self, f: impl FnOnce(&DbPool) -> AppResult<T>) -> AppResult<T> {
        let pool = self
            .db
            .lock()
            .map_err(|_| AppError::Server("database connection lock poisoned".into()))?;
        f(&pool)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::index_handler).post(handlers::submit_handler),
        )
        .route("/api/records", get(handlers::records_handler))
        .route("/api/chart", get(handlers::chart_handler))
        .route("/healthz", get(handlers::healthz_handler))
        .with_state(state)
}

async fn wait_for_shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Open the configured database and recreate the `tracking` table empty.
pub fn prepare_state(cfg: Config) -> AppResult<AppState> {
    let pool = DbPool::new(&cfg.database)?;
    reset_tracking_table(&pool.conn)?;
    info!(database = %cfg.database, "tracking table recreated");

    Ok(AppState::new(pool, cfg))
}

/// Prepare the state, then serve until Ctrl-C.
pub async fn serve(cfg: Config) -> AppResult<()> {
    let bind_addr = cfg.bind_addr();
    let state = prepare_state(cfg)?;
    let app = build_router(state);

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("cannot bind {bind_addr}: {e}")))?;
    info!("labtracker listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await?;

    info!("labtracker stopped");
    Ok(())
}
