use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::server::{controller::health::health, state::AppState};

/// Builds the HTTP application.
///
/// # Arguments
/// - `static_dir` - Directory served under `/static`
pub fn router(static_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
