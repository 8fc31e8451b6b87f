pub mod error;
pub mod explanation;
pub mod forum;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Upstream explanation service queried by the proxy route.
pub const DEFAULT_UPSTREAM: &str = "https://idk-540108306777.us-central1.run.app";

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: String,
}

impl AppState {
    pub fn new(upstream: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            upstream,
        }
    }
}

/// Portal routes. The frontend runs on a separate origin, so CORS stays open.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/medical-explanation", get(explanation::medical_explanation))
        .route("/api/forum/posts", get(forum::forum_posts))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
