//! Maps console paths to their loaders.

use serde::Serialize;

use crate::error::{LoadError, LoadResult};
use crate::loaders::{
    DashboardData, ImagesData, LayoutData, LoadEvent, NewServiceAccountData, ProjectData,
    ProjectsData, ServiceAccountData, ServiceAccountsData, UploadTestData, load_app_layout,
    load_dashboard, load_images, load_new_service_account, load_project, load_projects,
    load_service_account, load_service_accounts, load_upload_test,
};

/// A console page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Dashboard,
    /// `/projects`
    Projects,
    /// `/projects/{projectId}`
    Project {
        /// Captured `projectId`.
        project_id: String,
    },
    /// `/images`
    Images,
    /// `/upload-test`
    UploadTest,
    /// `/service-accounts`
    ServiceAccounts,
    /// `/service-accounts/new`
    NewServiceAccount,
    /// `/service-accounts/{serviceAccountId}`
    ServiceAccount {
        /// Captured `serviceAccountId`.
        service_account_id: String,
    },
}

impl Route {
    /// Resolves a URL path, ignoring a trailing slash.
    #[must_use]
    pub fn resolve(path: &str) -> Option<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let route = match segments.as_slice() {
            [] => Self::Dashboard,
            ["projects"] => Self::Projects,
            ["projects", id] => Self::Project {
                project_id: decode(id)?,
            },
            ["images"] => Self::Images,
            ["upload-test"] => Self::UploadTest,
            ["service-accounts"] => Self::ServiceAccounts,
            ["service-accounts", "new"] => Self::NewServiceAccount,
            ["service-accounts", id] => Self::ServiceAccount {
                service_account_id: decode(id)?,
            },
            _ => return None,
        };
        Some(route)
    }

    /// Route parameters in the form loaders read them.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Project { project_id } => vec![("projectId", project_id.as_str())],
            Self::ServiceAccount { service_account_id } => {
                vec![("serviceAccountId", service_account_id.as_str())]
            }
            _ => Vec::new(),
        }
    }
}

fn decode(segment: &str) -> Option<String> {
    urlencoding::decode(segment).ok().map(|s| s.into_owned())
}

/// Data of a single page, tagged with its route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "data", rename_all = "kebab-case")]
pub enum PageData {
    /// Dashboard.
    Dashboard(DashboardData),
    /// Project list.
    Projects(ProjectsData),
    /// Project detail.
    Project(ProjectData),
    /// Image browser.
    Images(ImagesData),
    /// Upload test.
    UploadTest(UploadTestData),
    /// Service account list.
    ServiceAccounts(ServiceAccountsData),
    /// Service account creation form.
    NewServiceAccount(NewServiceAccountData),
    /// Service account detail.
    ServiceAccount(ServiceAccountData),
}

/// Layout and page data of a navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedPage {
    /// Data of the shared layout.
    pub layout: LayoutData,
    /// Data of the page itself.
    pub page: PageData,
}

/// Loads the layout and then the page for `event.url`.
///
/// The page loader only runs once the layout has admitted the user.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] for unknown paths, or the first loader
/// failure (including redirects).
pub async fn load_route(mut event: LoadEvent) -> LoadResult<LoadedPage> {
    let path = event.url.path().to_string();
    let route = Route::resolve(&path).ok_or_else(|| LoadError::NotFound(path.clone()))?;
    for (name, value) in route.params() {
        event.params.insert(name.to_string(), value.to_string());
    }
    tracing::debug!(%path, ?route, "loading route");

    let layout = load_app_layout(&event).await?;
    let page = match route {
        Route::Dashboard => PageData::Dashboard(load_dashboard(&event).await?),
        Route::Projects => PageData::Projects(load_projects(&event).await?),
        Route::Project { .. } => PageData::Project(load_project(&event).await?),
        Route::Images => PageData::Images(load_images(&event).await?),
        Route::UploadTest => PageData::UploadTest(load_upload_test(&event).await?),
        Route::ServiceAccounts => PageData::ServiceAccounts(load_service_accounts(&event).await?),
        Route::NewServiceAccount => {
            PageData::NewServiceAccount(load_new_service_account(&event).await?)
        }
        Route::ServiceAccount { .. } => {
            PageData::ServiceAccount(load_service_account(&event).await?)
        }
    };

    Ok(LoadedPage { layout, page })
}
