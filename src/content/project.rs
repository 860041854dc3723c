use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolve::{self, MediaSource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
    pub release_year: Option<i64>,
    pub cover_image_url: String,
    pub artist: String,
    pub featured_artists: Vec<String>,
}

/// Flatten a raw project record. The artist relation is denormalized
/// to names: the first credited artist becomes `artist`, the
/// `featured` relation becomes `featuredArtists`.
pub fn normalize_project(raw: &Value) -> Project {
    Project {
        id: resolve::document_id(raw),
        created_at: resolve::opt_text(raw, "createdAt"),
        name: resolve::text(raw, "name"),
        kind: resolve::opt_text(raw, "type"),
        url: resolve::opt_text(raw, "url"),
        release_year: resolve::opt_int(raw, "releaseYear"),
        cover_image_url: MediaSource::decode(raw, "cover").into_url(),
        artist: raw["artists"][0]["name"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
        featured_artists: resolve::names(raw, "featured"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_normalize_record_with_direct_cover() {
        let raw = json!({
            "id": 7,
            "documentId": "p7",
            "name": "Echoes",
            "cover": { "url": "/x.jpg" },
            "artists": [{ "name": "Ada" }],
            "featured": [{ "name": "Ray" }]
        });

        let project = normalize_project(&raw);

        assert_eq!(project.id, "p7");
        assert_eq!(project.name, "Echoes");
        assert_eq!(project.cover_image_url, "/x.jpg");
        assert_eq!(project.artist, "Ada");
        assert_eq!(project.featured_artists, vec!["Ray"]);
    }

    #[test]
    fn test_normalize_record_with_enveloped_cover() {
        let raw = json!({
            "documentId": "p8",
            "name": "Drift",
            "cover": { "data": { "attributes": { "url": "/drift.jpg" } } },
            "artists": [{ "name": "Ada" }, { "name": "Ray" }]
        });

        let project = normalize_project(&raw);

        assert_eq!(project.cover_image_url, "/drift.jpg");
        // Only the first credited artist is kept.
        assert_eq!(project.artist, "Ada");
        assert!(project.featured_artists.is_empty());
    }

    #[test]
    fn test_missing_fields_take_documented_defaults() {
        let project = normalize_project(&json!({ "id": 1 }));

        assert_eq!(project.id, "1");
        assert_eq!(project.name, "");
        assert_eq!(project.kind, None);
        assert_eq!(project.url, None);
        assert_eq!(project.release_year, None);
        assert_eq!(project.cover_image_url, "");
        assert_eq!(project.artist, "");
        assert_eq!(project.featured_artists, Vec::<String>::new());
    }

    #[test]
    fn test_wire_field_names() {
        let raw = json!({
            "documentId": "p7",
            "name": "Echoes",
            "type": "single",
            "releaseYear": 2023,
            "cover": { "url": "/x.jpg" }
        });

        let wire = serde_json::to_value(normalize_project(&raw)).expect("serializes");

        assert_eq!(wire["_id"], "p7");
        assert_eq!(wire["type"], "single");
        assert_eq!(wire["releaseYear"], 2023);
        assert_eq!(wire["coverImageUrl"], "/x.jpg");
        assert_eq!(wire["featuredArtists"], json!([]));
    }
}
