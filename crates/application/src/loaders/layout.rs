//! Layout shared by every console page.

use imageer_domain::api::User;
use serde::Serialize;

use super::event::LoadEvent;
use super::redirect::Redirect;
use crate::client::unwrap;
use crate::error::{ClientError, LoadError, LoadResult};

/// Data of the console layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutData {
    /// The signed-in administrator.
    pub user: User,
}

/// Resolves the session user.
///
/// Any failure to establish a session redirects to the login page, which
/// sends the user back to the requested path afterwards. Signed-in users who
/// are not administrators get the unauthorized notice instead.
///
/// # Errors
///
/// Returns [`LoadError::Redirect`] as described above, or the transport
/// failure if the API could not be reached.
pub async fn load_app_layout(event: &LoadEvent) -> LoadResult<LayoutData> {
    let login = || super::redirect_to(Redirect::to_login(event.url.path()));

    let result = match event.client().get_current_user().await {
        Ok(result) => result,
        Err(ClientError::UnexpectedStatus { status, .. }) => {
            if matches!(status, 401 | 403) {
                tracing::debug!(status, "session lookup failed without error body");
            } else {
                tracing::warn!(status, "session lookup failed; API may be unavailable");
            }
            return Err(login());
        }
        Err(e) => return Err(e.into()),
    };
    if result.is_error() {
        return Err(login());
    }

    let user = unwrap(result).map_err(LoadError::from)?;
    if !user.is_admin() {
        tracing::info!(user = %user.id, role = ?user.role, "non-admin user rejected");
        return Err(super::redirect_to(Redirect::unauthorized()));
    }

    Ok(LayoutData { user })
}
