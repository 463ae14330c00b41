//! Service account pages.

use imageer_domain::api::{Page, Projects, ServiceAccount, ServiceAccounts};
use serde::Serialize;

use super::event::LoadEvent;
use super::{page_data, page_request, request_failure};
use crate::error::LoadResult;

const DEFAULT_LIMIT: u32 = 10;
const PROJECT_SELECTOR_LIMIT: u32 = 100;

/// Data of `/service-accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountsData {
    /// The requested page.
    pub service_accounts: ServiceAccounts,
    /// Offset taken from the query.
    pub offset: u32,
    /// Page size taken from the query.
    pub limit: u32,
}

/// Data of `/service-accounts/new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewServiceAccountData {
    /// Projects the new account may be scoped to.
    pub projects: Projects,
}

/// Data of `/service-accounts/{serviceAccountId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountData {
    /// The account being edited.
    pub service_account: ServiceAccount,
    /// Projects the account may be scoped to.
    pub projects: Projects,
}

/// Loads one page of service accounts.
///
/// # Errors
///
/// Fails if the request fails.
pub async fn load_service_accounts(event: &LoadEvent) -> LoadResult<ServiceAccountsData> {
    let offset = event.query_u32("offset", 0);
    let limit = event.query_u32("limit", DEFAULT_LIMIT);

    let result = event
        .client()
        .list_service_accounts(Page::new(offset, limit))
        .await;
    Ok(ServiceAccountsData {
        service_accounts: page_request(event, result)?,
        offset,
        limit,
    })
}

/// Loads the project selector of the creation form.
///
/// # Errors
///
/// Fails if the request fails.
pub async fn load_new_service_account(event: &LoadEvent) -> LoadResult<NewServiceAccountData> {
    let result = event
        .client()
        .list_projects(Page::new(0, PROJECT_SELECTOR_LIMIT))
        .await;
    Ok(NewServiceAccountData {
        projects: page_request(event, result)?,
    })
}

/// Loads the account named by `serviceAccountId` and the project selector,
/// in parallel.
///
/// # Errors
///
/// Fails if the parameter is missing or either request fails.
pub async fn load_service_account(event: &LoadEvent) -> LoadResult<ServiceAccountData> {
    let service_account_id = event.param("serviceAccountId")?;
    let client = event.client();

    let (service_account, projects) = tokio::try_join!(
        client.get_service_account(service_account_id),
        client.list_projects(Page::new(0, PROJECT_SELECTOR_LIMIT)),
    )
    .map_err(|error| request_failure(event, error))?;

    Ok(ServiceAccountData {
        service_account: page_data(event, service_account)?,
        projects: page_data(event, projects)?,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::testing::{
        StubTransport, app_error_json, load_event, projects_json, service_account_json,
        service_accounts_json,
    };
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    #[tokio::test]
    async fn list_uses_query_paging() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, service_accounts_json(4));

        let data = load_service_accounts(&load_event("/service-accounts?limit=50", &transport))
            .await
            .expect("service accounts");

        assert_eq!((data.offset, data.limit), (0, 50));
        assert_eq!(data.service_accounts.total, 4);
        assert_eq!(
            transport.paths(),
            vec!["/api/v1/admin/service-accounts?offset=0&limit=50"]
        );
    }

    #[tokio::test]
    async fn creation_form_lists_projects() {
        let transport = Arc::new(StubTransport::new());
        transport.respond_json(200, projects_json(5));

        let data = load_new_service_account(&load_event("/service-accounts/new", &transport))
            .await
            .expect("new service account");

        assert_eq!(data.projects.total, 5);
        assert_eq!(
            transport.paths(),
            vec!["/api/v1/admin/projects?offset=0&limit=100"]
        );
    }

    #[tokio::test]
    async fn detail_loads_account_and_projects() {
        let transport = Arc::new(StubTransport::new());
        transport.route(
            "/api/v1/admin/service-accounts/sa-1",
            200,
            service_account_json("sa-1"),
        );
        transport.route("/api/v1/admin/projects", 200, projects_json(8));

        let event = load_event("/service-accounts/sa-1", &transport)
            .with_param("serviceAccountId", "sa-1");
        let data = load_service_account(&event).await.expect("service account");

        assert_eq!(data.service_account.id, "sa-1");
        assert_eq!(data.projects.total, 8);
        assert_eq!(transport.requests().len(), 2);
    }

    #[tokio::test]
    async fn detail_fails_when_account_is_missing() {
        let transport = Arc::new(StubTransport::new());
        transport.route(
            "/api/v1/admin/service-accounts/sa-404",
            404,
            app_error_json("service account not found", 4000, "NOT_FOUND"),
        );
        transport.route("/api/v1/admin/projects", 200, projects_json(8));

        let event = load_event("/service-accounts/sa-404", &transport)
            .with_param("serviceAccountId", "sa-404");
        let error = load_service_account(&event).await.expect_err("missing");

        assert!(matches!(error, LoadError::Api(ref api) if api.status() == 404));
    }
}
