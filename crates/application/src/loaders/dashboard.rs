//! Dashboard page.

use imageer_domain::api::Page;
use serde::Serialize;

use super::event::LoadEvent;
use super::{page_data, request_failure};
use crate::error::LoadResult;

/// Headline counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Number of projects.
    pub projects: u64,
    /// Number of service accounts.
    pub service_accounts: u64,
}

/// Data of `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    /// Headline counts.
    pub stats: DashboardStats,
}

/// Counts projects and service accounts.
///
/// Both counts are fetched in parallel as one-item pages; only the totals
/// are used.
///
/// # Errors
///
/// Fails if either request fails.
pub async fn load_dashboard(event: &LoadEvent) -> LoadResult<DashboardData> {
    let client = event.client();
    let (projects, service_accounts) = tokio::try_join!(
        client.list_projects(Page::new(0, 1)),
        client.list_service_accounts(Page::new(0, 1)),
    )
    .map_err(|error| request_failure(event, error))?;

    let projects = page_data(event, projects)?;
    let service_accounts = page_data(event, service_accounts)?;

    Ok(DashboardData {
        stats: DashboardStats {
            projects: projects.total,
            service_accounts: service_accounts.total,
        },
    })
}
