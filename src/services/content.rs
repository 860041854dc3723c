//! Aggregation operations: each one composes CMS queries and
//! normalizers into a single composite result for a page or route.
//!
//! Every operation here is a recovery boundary. Backend failures are
//! logged and degrade to the documented empty shape (empty listing,
//! absent artist) instead of propagating, so callers never see an
//! error state. The one exception is [`about_page`], whose HTTP route
//! must distinguish backend failure (500) from absence (404), so it
//! returns the failure to its caller.

use serde::Serialize;
use serde_json::Value;

use crate::content::{
    normalize_about, normalize_artist, normalize_main_block, normalize_project, AboutPage, Artist,
    MainBlock, Project,
};
use crate::error::Result;
use crate::resolve;
use crate::services::cms::{CmsClient, FetchOptions};

#[derive(Debug, Clone, Serialize)]
pub struct ArtistWithProjects {
    pub artist: Option<Artist>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistsWithFeatured {
    pub artists: Vec<Artist>,
    pub featured_projects: Vec<Project>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListing {
    pub projects: Vec<Project>,
    pub featured_projects: Vec<Project>,
}

/// The records under the response envelope's `data` field. A missing
/// or non-array `data` is empty, never a parse error.
fn records(body: &Value) -> &[Value] {
    body["data"].as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// All artists, ordered by their explicit rank ascending (rank ties
/// keep backend order). Degrades to an empty listing on failure.
pub async fn list_artists(cms: &CmsClient) -> Vec<Artist> {
    match try_list_artists(cms).await {
        Ok(artists) => artists,
        Err(err) => {
            tracing::error!("Failed to fetch artists: {}", err);
            Vec::new()
        }
    }
}

async fn try_list_artists(cms: &CmsClient) -> Result<Vec<Artist>> {
    let body = cms
        .fetch(
            "/artists?populate=*&sort[0]=orderRank:asc",
            FetchOptions::default(),
        )
        .await?;
    Ok(records(&body).iter().map(normalize_artist).collect())
}

/// Look up a single artist by slug. The slug is matched exactly; when
/// the backend returns duplicates the first in response order wins.
pub async fn artist_by_slug(cms: &CmsClient, slug: &str) -> Option<Artist> {
    match fetch_raw_artist(cms, slug).await {
        Ok(raw) => raw.map(|record| normalize_artist(&record)),
        Err(err) => {
            tracing::error!("Failed to fetch artist {:?}: {}", slug, err);
            None
        }
    }
}

async fn fetch_raw_artist(cms: &CmsClient, slug: &str) -> Result<Option<Value>> {
    let path = format!(
        "/artists?filters[slug][$eq]={}&populate=*&sort[0]=orderRank:asc",
        urlencoding::encode(slug)
    );
    let body = cms.fetch(&path, FetchOptions::default()).await?;

    Ok(records(&body)
        .iter()
        .find(|record| resolve::text(record, "slug") == slug)
        .cloned())
}

/// An artist together with their projects: the artist lookup runs
/// first, then the project query filtered by the backend id resolved
/// from it. Degrades to `{ artist: None, projects: [] }` on failure or
/// unknown slug.
pub async fn artist_with_projects(cms: &CmsClient, slug: &str) -> ArtistWithProjects {
    match try_artist_with_projects(cms, slug).await {
        Ok(result) => result,
        Err(err) => {
            tracing::error!("Failed to fetch artist {:?} with projects: {}", slug, err);
            ArtistWithProjects {
                artist: None,
                projects: Vec::new(),
            }
        }
    }
}

async fn try_artist_with_projects(cms: &CmsClient, slug: &str) -> Result<ArtistWithProjects> {
    let Some(raw_artist) = fetch_raw_artist(cms, slug).await? else {
        return Ok(ArtistWithProjects {
            artist: None,
            projects: Vec::new(),
        });
    };

    // The project relation filters on the backend's internal numeric
    // id, not the external document identifier.
    let backend_id = raw_artist["id"].as_i64().unwrap_or_default();
    let path = format!(
        "/projects?filters[artists][id][$eq]={}&populate=*",
        backend_id
    );
    let body = cms.fetch(&path, FetchOptions::default()).await?;

    Ok(ArtistWithProjects {
        artist: Some(normalize_artist(&raw_artist)),
        projects: records(&body).iter().map(normalize_project).collect(),
    })
}

/// All artists plus the three most recently created projects. The two
/// fetches are independent; no cross-filtering happens.
pub async fn artists_with_featured_projects(cms: &CmsClient) -> ArtistsWithFeatured {
    match try_artists_with_featured(cms).await {
        Ok(result) => result,
        Err(err) => {
            tracing::error!("Failed to fetch artists with featured projects: {}", err);
            ArtistsWithFeatured {
                artists: Vec::new(),
                featured_projects: Vec::new(),
            }
        }
    }
}

async fn try_artists_with_featured(cms: &CmsClient) -> Result<ArtistsWithFeatured> {
    let artists_body = cms
        .fetch("/artists?populate=*", FetchOptions::default())
        .await?;
    let projects_body = cms
        .fetch(
            "/projects?populate=*&sort[0]=createdAt:desc&pagination[limit]=3",
            FetchOptions::default(),
        )
        .await?;

    Ok(ArtistsWithFeatured {
        artists: records(&artists_body).iter().map(normalize_artist).collect(),
        featured_projects: records(&projects_body)
            .iter()
            .map(normalize_project)
            .collect(),
    })
}

/// The full project listing, with the first three records doubling as
/// the "featured" set (a plain prefix slice, not a relevance pick).
pub async fn all_projects(cms: &CmsClient) -> ProjectListing {
    match try_all_projects(cms).await {
        Ok(listing) => listing,
        Err(err) => {
            tracing::error!("Failed to fetch project listing: {}", err);
            ProjectListing {
                projects: Vec::new(),
                featured_projects: Vec::new(),
            }
        }
    }
}

async fn try_all_projects(cms: &CmsClient) -> Result<ProjectListing> {
    let body = cms
        .fetch("/projects?populate=*", FetchOptions::default())
        .await?;
    let projects: Vec<Project> = records(&body).iter().map(normalize_project).collect();
    let featured_projects = projects.iter().take(3).cloned().collect();

    Ok(ProjectListing {
        projects,
        featured_projects,
    })
}

/// Homepage content blocks in backend insertion order.
pub async fn main_blocks(cms: &CmsClient) -> Vec<MainBlock> {
    match try_main_blocks(cms).await {
        Ok(blocks) => blocks,
        Err(err) => {
            tracing::error!("Failed to fetch main blocks: {}", err);
            Vec::new()
        }
    }
}

async fn try_main_blocks(cms: &CmsClient) -> Result<Vec<MainBlock>> {
    let body = cms.fetch("/mains?populate=*", FetchOptions::default()).await?;
    Ok(records(&body).iter().map(normalize_main_block).collect())
}

/// The about singleton. `Ok(None)` means the backend has no record,
/// which is a valid state; `Err` is a backend failure the About route
/// reports as a 500.
pub async fn about_page(cms: &CmsClient) -> Result<Option<AboutPage>> {
    let body = cms
        .fetch("/about-uses?populate=*", FetchOptions::default())
        .await?;

    let record = match &body["data"] {
        Value::Array(items) => items.first(),
        data @ Value::Object(_) => Some(data),
        _ => None,
    };

    Ok(record.map(normalize_about))
}
