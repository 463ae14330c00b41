//! Route loaders.
//!
//! Each loader fetches what one page of the console needs and returns it as
//! plain serializable data. Loaders run while rendering on the server, so
//! they build a fresh client per event and never raise toasts.

mod dashboard;
mod event;
mod images;
mod layout;
mod projects;
mod redirect;
mod service_accounts;

pub use dashboard::{DashboardData, DashboardStats, load_dashboard};
pub use event::LoadEvent;
pub use images::{ImagesData, load_images};
pub use layout::{LayoutData, load_app_layout};
pub use projects::{ProjectData, ProjectsData, load_project, load_projects};
pub use redirect::{LOGIN_PATH, Redirect};
pub use service_accounts::{
    NewServiceAccountData, ServiceAccountData, ServiceAccountsData, load_new_service_account,
    load_service_account, load_service_accounts,
};
pub use upload_test::{UploadTestData, load_upload_test};

use crate::client::{RequestResult, unwrap};
use crate::error::{ClientError, ClientResult, LoadError, LoadResult, UnwrapError};

/// Completes a page request, turning authentication failures into redirects.
///
/// Covers both the server-declared errors of the result and failed
/// responses that carried no error body.
fn page_request<T>(event: &LoadEvent, result: ClientResult<RequestResult<T>>) -> LoadResult<T> {
    let result = result.map_err(|error| request_failure(event, error))?;
    page_data(event, result)
}

/// Unwraps a page request, turning authentication failures into redirects.
///
/// 401 sends the user to the login page with the current path, 403 to the
/// login page's unauthorized notice. Everything else propagates.
fn page_data<T>(event: &LoadEvent, result: RequestResult<T>) -> LoadResult<T> {
    unwrap(result).map_err(|error| match error {
        UnwrapError::Api(api) => auth_redirect(event, api.status()).unwrap_or(LoadError::Api(api)),
        UnwrapError::EmptyResponse => LoadError::EmptyResponse,
    })
}

/// Maps a failed request of a page loader; 401 and 403 redirect even
/// without an error body.
fn request_failure(event: &LoadEvent, error: ClientError) -> LoadError {
    match error {
        ClientError::UnexpectedStatus { status, .. } => {
            auth_redirect(event, status).unwrap_or_else(|| LoadError::Client(error))
        }
        other => LoadError::Client(other),
    }
}

fn auth_redirect(event: &LoadEvent, status: u16) -> Option<LoadError> {
    match status {
        401 => Some(redirect_to(Redirect::to_login(event.url.path()))),
        403 => Some(redirect_to(Redirect::unauthorized())),
        _ => None,
    }
}

fn redirect_to(redirect: Redirect) -> LoadError {
    tracing::info!(location = %redirect.location, "redirecting");
    LoadError::Redirect(redirect)
}
