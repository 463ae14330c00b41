//! Project list and detail pages.

use imageer_domain::api::{Page, Project, Projects};
use serde::Serialize;

use super::event::LoadEvent;
use super::page_request;
use crate::error::LoadResult;

const DEFAULT_LIMIT: u32 = 10;

/// Data of `/projects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectsData {
    /// The requested page.
    pub projects: Projects,
    /// Offset taken from the query, 0 by default.
    pub offset: u32,
    /// Page size taken from the query, 10 by default.
    pub limit: u32,
}

/// Data of `/projects/{projectId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectData {
    /// The project.
    pub project: Project,
}

/// Loads one page of projects, paged by the `offset` and `limit` query
/// parameters.
///
/// # Errors
///
/// Fails if the request fails.
pub async fn load_projects(event: &LoadEvent) -> LoadResult<ProjectsData> {
    let offset = event.query_u32("offset", 0);
    let limit = event.query_u32("limit", DEFAULT_LIMIT);

    let result = event.client().list_projects(Page::new(offset, limit)).await;
    Ok(ProjectsData {
        projects: page_request(event, result)?,
        offset,
        limit,
    })
}

/// Loads the project named by the `projectId` parameter.
///
/// # Errors
///
/// Fails if the parameter is missing or the request fails.
pub async fn load_project(event: &LoadEvent) -> LoadResult<ProjectData> {
    let project_id = event.param("projectId")?;
    let result = event.client().get_project(project_id).await;
    Ok(ProjectData {
        project: page_request(event, result)?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::testing::{StubTransport, app_error_json, load_event, project_json, projects_json};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn paging_defaults() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, projects_json(3));

        let data = load_projects(&load_event("/projects", &transport))
            .await
            .expect("projects");

        assert_eq!((data.offset, data.limit), (0, 10));
        assert_eq!(data.projects.total, 3);
        assert_eq!(
            transport.paths(),
            vec!["/api/v1/admin/projects?offset=0&limit=10"]
        );
    }

    #[tokio::test]
    async fn paging_from_query() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, projects_json(0));

        let data = load_projects(&load_event("/projects?offset=20&limit=5", &transport))
            .await
            .expect("projects");

        assert_eq!((data.offset, data.limit), (20, 5));
        assert_eq!(
            transport.paths(),
            vec!["/api/v1/admin/projects?offset=20&limit=5"]
        );
    }

    #[tokio::test]
    async fn detail_uses_route_param() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, project_json("p-9"));

        let event = load_event("/projects/p-9", &transport).with_param("projectId", "p-9");
        let data = load_project(&event).await.expect("project");

        assert_eq!(data.project.id, "p-9");
        assert_eq!(transport.paths(), vec!["/api/v1/admin/projects/p-9"]);
    }

    #[tokio::test]
    async fn detail_without_param_fails() {
        let transport = Arc::new(StubTransport::new());

        let error = load_project(&load_event("/projects/x", &transport))
            .await
            .expect_err("missing param");

        assert!(matches!(error, LoadError::MissingParam("projectId")));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn not_found_propagates() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(404, app_error_json("project not found", 4000, "NOT_FOUND"));

        let event = load_event("/projects/gone", &transport).with_param("projectId", "gone");
        let error = load_project(&event).await.expect_err("not found");

        assert!(matches!(error, LoadError::Api(ref api) if api.code_name() == "NOT_FOUND"));
    }

    #[tokio::test]
    async fn expired_session_redirects_to_login() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(401, app_error_json("unauthenticated", 2000, "UNAUTHORIZED"));

        let error = load_projects(&load_event("/projects?offset=10", &transport))
            .await
            .expect_err("redirect");

        assert_eq!(
            error.redirect().map(|r| r.location.as_str()),
            Some("/login?redirect=%2Fprojects")
        );
    }
}
