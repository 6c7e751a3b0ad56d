//! HTTP server exposing the match enrichment and the static front-end.

use std::path::Path;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::enricher::MatchEnricher;
use crate::error::AppError;
use crate::riot::LolApi;

pub mod handlers;

/// State shared by every request.
pub struct AppState<A: LolApi> {
    enricher: MatchEnricher<A>,
}

impl<A: LolApi> AppState<A> {
    pub fn new(enricher: MatchEnricher<A>) -> Self {
        Self { enricher }
    }

    pub fn enricher(&self) -> &MatchEnricher<A> {
        &self.enricher
    }
}

/// Create HTTP router with all endpoints.
///
/// Paths not handled by the API are served from `static_dir`.
pub fn create_router<A: LolApi + 'static>(
    state: Arc<AppState<A>>,
    static_dir: impl AsRef<Path>,
) -> Router {
    Router::new()
        .route("/gamedata", get(handlers::handle_gamedata::<A>))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start HTTP server.
///
/// # Errors
///
/// Returns `AppError` if the server fails to bind or encounters a runtime error.
pub async fn start_server(bind_addr: &str, app: Router) -> Result<(), AppError> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;

    tracing::info!("🌐 HTTP server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
