pub mod about;
pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new().route("/about-uses", get(about::get_about))
}
