//! Navigation redirects raised by loaders.

use serde::Serialize;

/// Path of the login page.
pub const LOGIN_PATH: &str = "/login";

/// Temporary redirect status used for every loader redirect.
const TEMPORARY_REDIRECT: u16 = 307;

/// A redirect the host must follow instead of rendering the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    /// HTTP status, always 307.
    pub status: u16,
    /// Target location.
    pub location: String,
}

impl Redirect {
    /// Temporary redirect to `location`.
    #[must_use]
    pub fn temporary(location: impl Into<String>) -> Self {
        Self {
            status: TEMPORARY_REDIRECT,
            location: location.into(),
        }
    }

    /// Login page, returning to `path` afterwards.
    #[must_use]
    pub fn to_login(path: &str) -> Self {
        Self::temporary(format!(
            "{LOGIN_PATH}?redirect={}",
            urlencoding::encode(path)
        ))
    }

    /// Login page with the unauthorized notice.
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::temporary(format!("{LOGIN_PATH}?error=unauthorized"))
    }
}
