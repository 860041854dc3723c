use reqwest::{header, Client};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::services::cache::{Clock, RevalidationCache, SystemClock};

const API_TIMEOUT: Duration = Duration::from_secs(30);

/// Default staleness window for cached responses.
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(10);

/// Per-fetch options. `revalidate` is the staleness window under which
/// a previously fetched body may be reused; `None` bypasses the cache
/// entirely.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub revalidate: Option<Duration>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            revalidate: Some(DEFAULT_REVALIDATE),
        }
    }
}

impl FetchOptions {
    pub fn no_store() -> Self {
        Self { revalidate: None }
    }
}

/// Thin transport wrapper over the CMS read API.
///
/// Holds only fixed configuration (resolved `/api` base URL) plus the
/// revalidation cache; it does not construct query syntax. Callers
/// pass relative paths that already carry their populate/sort/filter
/// parameters.
pub struct CmsClient {
    client: Client,
    api_url: String,
    cache: RevalidationCache,
}

impl CmsClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_clock(base_url, Arc::new(SystemClock))
    }

    pub fn with_clock(base_url: &str, clock: Arc<dyn Clock>) -> Self {
        let client = Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_url: format!("{}/api", base_url.trim_end_matches('/')),
            cache: RevalidationCache::new(clock),
        }
    }

    /// GET a relative endpoint path and return the parsed JSON body.
    ///
    /// A non-success status becomes `AppError::BackendStatus` with the
    /// code and body text; no partial body is ever returned. Within
    /// the revalidation window the previously fetched body is reused
    /// without a network call.
    pub async fn fetch(&self, endpoint: &str, options: FetchOptions) -> Result<Value> {
        if let Some(window) = options.revalidate {
            if let Some(body) = self.cache.get(endpoint, window) {
                tracing::debug!("CMS cache hit: {}", endpoint);
                return Ok(body);
            }
        }

        let url = format!("{}{}", self.api_url, endpoint);
        tracing::debug!("CMS fetch: {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(AppError::BackendStatus { status, body });
        }

        let body: Value = response.json().await?;

        if options.revalidate.is_some() {
            self.cache.put(endpoint.to_string(), body.clone());
        }

        Ok(body)
    }
}
