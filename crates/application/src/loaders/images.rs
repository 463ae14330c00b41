//! Image browser page.

use imageer_domain::api::{Page, Project};
use serde::Serialize;

use super::event::LoadEvent;
use super::page_request;
use crate::error::LoadResult;

/// Enough to cover every project in the selector.
const PROJECT_SELECTOR_LIMIT: u32 = 1000;

/// Data of `/images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagesData {
    /// Projects offered in the project selector.
    pub projects: Vec<Project>,
}

/// Loads the projects for the image browser's selector.
///
/// # Errors
///
/// Fails if the request fails.
pub async fn load_images(event: &LoadEvent) -> LoadResult<ImagesData> {
    let result = event
        .client()
        .list_projects(Page::limit(PROJECT_SELECTOR_LIMIT))
        .await;
    Ok(ImagesData {
        projects: page_request(event, result)?.items,
    })
}
