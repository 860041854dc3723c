use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::services::content;
use crate::state::AppState;

/// Serve the about singleton as JSON: 200 with the page, 404 when the
/// backend has no record, 500 on backend failure.
pub async fn get_about(State(state): State<AppState>) -> impl IntoResponse {
    match content::about_page(&state.cms).await {
        Ok(Some(page)) => (StatusCode::OK, Json(json!(page))),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "About page data not found" })),
        ),
        Err(err) => {
            tracing::error!("Failed to serve about page: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to fetch about page data" })),
            )
        }
    }
}
