use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use creatorkit_scraper::{mock_profile, ScrapedProfile};

use super::AppState;

#[derive(Debug, Deserialize)]
pub(super) struct ScrapeRequest {
    username: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ScrapeResponse {
    success: bool,
    data: ScrapedProfile,
    /// Whether `data` is the offline demo fixture rather than live data.
    /// The scraper itself never marks its output; the mock generator is
    /// deterministic, so the unmodified fixture is recognizable by equality.
    is_mock_data: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct ApiError {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// `POST /api/scrape/instagram` — run the fallback chain for a username.
///
/// The scrape itself is total, so the only error this handler can produce is
/// a missing or blank username.
pub(super) async fn scrape_instagram(
    State(state): State<AppState>,
    Json(request): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let Some(username) = request
        .username
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
    else {
        return Err(ApiError {
            error: "Username is required",
        });
    };

    let data = state.scraper.scrape(&username).await;
    let is_mock_data = data == mock_profile(&username);
    if is_mock_data {
        tracing::warn!(username, "serving mock profile; all live sources failed");
    }

    Ok(Json(ScrapeResponse {
        success: true,
        data,
        is_mock_data,
    }))
}
