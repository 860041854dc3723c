//! Field resolution over raw CMS records.
//!
//! Strapi responses change shape depending on how a media/relation
//! field was populated: sometimes the attributes sit directly on the
//! field, sometimes under a `data.attributes` envelope, and sized
//! image variants live under `formats`. Every accessor here tries the
//! known shapes in priority order and falls back to an explicit
//! default, so normalizers never have to branch on nesting and never
//! fail.

use serde_json::Value;

/// A media field decoded into one of the known nesting variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Attributes flattened onto the field: `{ "url": ... }`
    Direct(String),
    /// Relation envelope: `{ "data": { "attributes": { "url": ... } } }`
    Envelope(String),
    /// Field missing or in no recognized shape.
    Absent,
}

impl MediaSource {
    pub fn decode(record: &Value, field: &str) -> Self {
        let media = &record[field];
        if let Some(url) = media["url"].as_str() {
            return Self::Direct(url.to_string());
        }
        if let Some(url) = media["data"]["attributes"]["url"].as_str() {
            return Self::Envelope(url.to_string());
        }
        Self::Absent
    }

    /// The resolved URL, or the documented default (empty string).
    pub fn into_url(self) -> String {
        match self {
            Self::Direct(url) | Self::Envelope(url) => url,
            Self::Absent => String::new(),
        }
    }
}

/// Resolve the URL of a sized variant under `field.formats.{variant}.url`.
pub fn format_url(record: &Value, field: &str, variant: &str) -> String {
    record[field]["formats"][variant]["url"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

/// Resolve a textual attribute of a media field across the direct and
/// envelope shapes (e.g. `alternativeText`).
pub fn media_text(record: &Value, field: &str, attr: &str) -> String {
    let media = &record[field];
    if let Some(text) = media[attr].as_str() {
        return text.to_string();
    }
    media["data"]["attributes"][attr]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

/// A required string field; missing or non-string values become "".
pub fn text(record: &Value, field: &str) -> String {
    record[field].as_str().unwrap_or_default().to_string()
}

/// An optional scalar string field; absent stays absent.
pub fn opt_text(record: &Value, field: &str) -> Option<String> {
    record[field].as_str().map(str::to_string)
}

pub fn opt_int(record: &Value, field: &str) -> Option<i64> {
    record[field].as_i64()
}

/// Collect the `name` of each entry in a populated relation list.
pub fn names(record: &Value, field: &str) -> Vec<String> {
    record[field]
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// The stable external key for a record: `documentId` when the backend
/// exposes one, otherwise the internal numeric `id`.
pub fn document_id(record: &Value) -> String {
    if let Some(doc_id) = record["documentId"].as_str() {
        return doc_id.to_string();
    }
    match &record["id"] {
        Value::Number(id) => id.to_string(),
        Value::String(id) => id.clone(),
        _ => String::new(),
    }
}
