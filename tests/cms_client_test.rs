//! Integration tests for the CMS fetch client:
//! - JSON body fetching and typed non-2xx failures
//! - Revalidation cache hits, expiry, and bypass

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use gns_content_api::error::AppError;
use gns_content_api::services::cms::{CmsClient, FetchOptions};
use gns_content_api::test_utils::ManualClock;

#[tokio::test]
async fn test_fetch_returns_parsed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/mains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [1, 2] })))
        .mount(&server)
        .await;

    let cms = CmsClient::new(&server.uri());
    let body = cms.fetch("/mains", FetchOptions::default()).await.unwrap();

    assert_eq!(body, json!({ "data": [1, 2] }));
}

#[tokio::test]
async fn test_non_success_status_is_a_typed_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/artists"))
        .respond_with(ResponseTemplate::new(503).set_body_string("backend down"))
        .mount(&server)
        .await;

    let cms = CmsClient::new(&server.uri());
    let err = cms
        .fetch("/artists", FetchOptions::default())
        .await
        .unwrap_err();

    match err {
        AppError::BackendStatus { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert_eq!(body, "backend down");
        }
        other => panic!("expected BackendStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_second_fetch_within_window_hits_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/mains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": ["x"] })))
        .expect(1)
        .mount(&server)
        .await;

    let cms = CmsClient::new(&server.uri());
    let first = cms.fetch("/mains", FetchOptions::default()).await.unwrap();
    let second = cms.fetch("/mains", FetchOptions::default()).await.unwrap();

    assert_eq!(first, second);
    // Mock::expect(1) verifies only one backend call happened.
}

#[tokio::test]
async fn test_fetch_after_window_expiry_refetches_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/mains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let clock = ManualClock::new();
    let cms = CmsClient::with_clock(&server.uri(), clock.clone());

    cms.fetch("/mains", FetchOptions::default()).await.unwrap();
    clock.advance(Duration::from_secs(10));
    cms.fetch("/mains", FetchOptions::default()).await.unwrap();
    // Still within the reset window: served from cache.
    clock.advance(Duration::from_secs(9));
    cms.fetch("/mains", FetchOptions::default()).await.unwrap();
}

#[tokio::test]
async fn test_no_store_bypasses_the_cache() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/mains"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let cms = CmsClient::new(&server.uri());
    cms.fetch("/mains", FetchOptions::no_store()).await.unwrap();
    cms.fetch("/mains", FetchOptions::no_store()).await.unwrap();
}

#[tokio::test]
async fn test_cache_keys_include_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(2)
        .mount(&server)
        .await;

    let cms = CmsClient::new(&server.uri());
    cms.fetch("/projects?populate=*", FetchOptions::default())
        .await
        .unwrap();
    cms.fetch("/projects?populate=*&pagination[limit]=3", FetchOptions::default())
        .await
        .unwrap();
}
