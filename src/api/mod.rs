pub mod routes;
pub mod models;
pub mod errors;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::compare::BatchComparer;
use crate::config::PlagConfig;

#[derive(Clone)]
pub struct AppState {
    pub comparer: BatchComparer,
}

pub fn create_app_state(config: &PlagConfig) -> AppState {
    AppState {
        comparer: BatchComparer::from_config(config),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", axum::routing::get(routes::health::health_check))
        .route("/compare", axum::routing::post(routes::compare::compare))
        .route("/score", axum::routing::post(routes::score::score_texts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
