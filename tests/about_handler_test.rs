//! Integration tests for the about API route:
//! - 200 with the normalized page
//! - 404 with the documented body when the record is absent
//! - 500 with the documented body on backend failure

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::util::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gns_content_api::handlers;
use gns_content_api::state::AppState;
use gns_content_api::test_utils::{envelope, raw_about, test_app_state};

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .nest("/api", handlers::api_routes())
        .with_state(state.clone())
}

async fn parse_json_response(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

async fn get_about(state: &AppState) -> axum::response::Response {
    create_test_router(state)
        .oneshot(
            Request::builder()
                .uri("/api/about-uses")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn test_about_route_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/about-uses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![raw_about()])))
        .mount(&server)
        .await;

    let state = test_app_state(&server.uri());
    let response = get_about(&state).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_json_response(response).await;
    assert_eq!(body["title"], "About Us");
    assert_eq!(body["heading"], "Our Story");
    assert_eq!(body["image"]["url"], "/uploads/about.jpg");
    assert_eq!(body["image"]["alternativeText"], "the team");
    assert_eq!(body["businessEmail"], "hello@example.com");
}

#[tokio::test]
async fn test_about_route_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/about-uses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(vec![])))
        .mount(&server)
        .await;

    let state = test_app_state(&server.uri());
    let response = get_about(&state).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        parse_json_response(response).await,
        json!({ "error": "About page data not found" })
    );
}

#[tokio::test]
async fn test_about_route_backend_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/about-uses"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let state = test_app_state(&server.uri());
    let response = get_about(&state).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        parse_json_response(response).await,
        json!({ "error": "Failed to fetch about page data" })
    );
}
