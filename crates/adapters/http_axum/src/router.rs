//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Routes `/api` and `/health`; when the state carries a `dist_dir`, every
/// other path is served from it. Includes a [`TraceLayer`] that logs each
/// request/response at the `DEBUG` level.
pub fn build(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        .route("/api", get(crate::api::status));

    if let Some(dir) = state.dist_dir.as_deref() {
        tracing::debug!(dir = %dir.display(), "serving static files");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
