use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolve::{self, MediaSource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialMediaLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_createdAt")]
    pub created_at: Option<String>,
    pub name: String,
    pub slug: String,
    pub profile_image: ProfileImage,
    pub background_image: String,
    pub signature: String,
    pub spotify_embed_url: Option<String>,
    pub about: Option<String>,
    pub social_media_links: Vec<SocialMediaLink>,
}

/// Flatten a raw artist record. The `signature` display name falls
/// back to `name` when missing or blank; `name` itself is always
/// present on the output, even if blank.
pub fn normalize_artist(raw: &Value) -> Artist {
    let name = resolve::text(raw, "name");
    let signature = resolve::text(raw, "signature");

    Artist {
        id: resolve::document_id(raw),
        created_at: resolve::opt_text(raw, "createdAt"),
        slug: resolve::text(raw, "slug"),
        profile_image: ProfileImage {
            url: MediaSource::decode(raw, "profileImage").into_url(),
        },
        background_image: MediaSource::decode(raw, "backgroundImage").into_url(),
        signature: if signature.is_empty() {
            name.clone()
        } else {
            signature
        },
        spotify_embed_url: resolve::opt_text(raw, "spotifyEmbedUrl"),
        about: resolve::opt_text(raw, "about"),
        social_media_links: social_links(raw),
        name,
    }
}

fn social_links(raw: &Value) -> Vec<SocialMediaLink> {
    raw["socialMediaLinks"]
        .as_array()
        .map(|links| {
            links
                .iter()
                .map(|link| SocialMediaLink {
                    platform: resolve::text(link, "platform"),
                    url: resolve::text(link, "url"),
                })
                .collect()
        })
        .unwrap_or_default()
}
