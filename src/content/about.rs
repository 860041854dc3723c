use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolve::{self, MediaSource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutImage {
    pub url: String,
    pub alternative_text: String,
}

/// The singleton about page. Absence of the backend record is a valid
/// state handled by the aggregation layer, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutPage {
    pub title: String,
    pub heading: String,
    pub text: String,
    pub image: AboutImage,
    pub business_email: String,
}

pub fn normalize_about(raw: &Value) -> AboutPage {
    AboutPage {
        title: resolve::text(raw, "title"),
        heading: resolve::text(raw, "heading"),
        text: resolve::text(raw, "text"),
        image: AboutImage {
            url: MediaSource::decode(raw, "image").into_url(),
            alternative_text: resolve::media_text(raw, "image", "alternativeText"),
        },
        business_email: resolve::text(raw, "businessEmail"),
    }
}
