use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::core::QuoteManager;

mod handlers;
mod models;

use handlers::{
    categories, current_quote, export, health, import, list_quotes, not_found, push, random_quote,
    set_filter, submit_quote, sync,
};

#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<QuoteManager>,
    pub started_at: std::time::SystemTime,
}

pub fn router(manager: Arc<QuoteManager>) -> Router {
    let state = AppState {
        manager,
        started_at: std::time::SystemTime::now(),
    };

    Router::new()
        .route("/health", get(health))
        .route("/quotes", get(list_quotes).post(submit_quote))
        .route("/quotes/random", get(random_quote))
        .route("/quotes/current", get(current_quote))
        .route("/categories", get(categories))
        .route("/filter", put(set_filter))
        .route("/export", get(export))
        .route("/import", post(import))
        .route("/sync", post(sync))
        .route("/push", post(push))
        .fallback(not_found)
        .with_state(state)
}

pub async fn serve(
    addr: SocketAddr,
    manager: Arc<QuoteManager>,
    shutdown: tokio_util::sync::CancellationToken,
) -> anyhow::Result<()> {
    let app = router(manager);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("🌐 REST listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            log::info!("🛑 REST shutdown requested");
        })
        .await?;
    log::info!("👋 REST server exited");
    Ok(())
}
