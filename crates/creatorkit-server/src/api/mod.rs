mod scrape;

use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use creatorkit_scraper::ProfileScraper;

#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<ProfileScraper>,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

async fn health() -> Json<HealthData> {
    Json(HealthData { status: "ok" })
}

/// Assemble the router: scrape endpoint, health probe, CORS, request tracing.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/scrape/instagram", post(scrape::scrape_instagram))
        .route("/api/health", get(health))
        .layer(build_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
