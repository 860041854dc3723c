//! Test utilities
//!
//! Provides helpers shared by unit and integration tests:
//! - A manual clock for deterministic staleness-window tests
//! - Raw CMS record builders in the backend's response shapes
//! - AppState/client factories pointed at a mock backend

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::services::cache::Clock;
use crate::services::cms::CmsClient;
use crate::state::AppState;

/// A clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(Instant::now()),
        })
    }

    pub fn advance(&self, duration: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += duration;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().expect("clock lock poisoned")
    }
}

/// Create a test configuration pointed at the given CMS base URL
pub fn test_config(cms_base_url: &str) -> Config {
    Config {
        cms_base_url: cms_base_url.to_string(),
        server_host: "127.0.0.1".to_string(),
        server_port: 3000,
    }
}

/// Create an AppState whose CMS client targets a mock backend
pub fn test_app_state(cms_base_url: &str) -> AppState {
    AppState::new(CmsClient::new(cms_base_url), test_config(cms_base_url))
}

// ============================================================================
// Raw record builders
// ============================================================================

/// Wrap records in the backend response envelope
pub fn envelope(records: Vec<Value>) -> Value {
    json!({ "data": records })
}

/// A raw artist record in the fully-populated response shape
pub fn raw_artist(id: i64, document_id: &str, name: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "documentId": document_id,
        "createdAt": "2024-05-01T12:00:00.000Z",
        "name": name,
        "slug": slug,
        "profileImage": { "url": format!("/uploads/{}.jpg", slug) },
        "backgroundImage": { "url": format!("/uploads/{}-bg.jpg", slug) },
        "signature": name,
        "spotifyEmbedUrl": null,
        "about": null,
        "socialMediaLinks": []
    })
}

/// A raw project record in the fully-populated response shape
pub fn raw_project(id: i64, document_id: &str, name: &str, artist: &str) -> Value {
    json!({
        "id": id,
        "documentId": document_id,
        "createdAt": "2024-06-01T12:00:00.000Z",
        "name": name,
        "type": "single",
        "url": format!("https://example.com/{}", document_id),
        "releaseYear": 2024,
        "cover": { "url": format!("/uploads/{}.jpg", document_id) },
        "artists": [{ "id": 1, "name": artist }],
        "featured": []
    })
}

/// A raw about record matching the singleton's populated shape
pub fn raw_about() -> Value {
    json!({
        "id": 1,
        "documentId": "about1",
        "title": "About Us",
        "heading": "Our Story",
        "text": "Welcome.",
        "image": { "url": "/uploads/about.jpg", "alternativeText": "the team" },
        "businessEmail": "hello@example.com"
    })
}
