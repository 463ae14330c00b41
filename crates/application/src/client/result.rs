//! The non-throwing outcome of an API call.

use std::collections::BTreeMap;

use imageer_domain::AppError;

use super::request::ApiResponse;

/// Transport-level facts about the response a result came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResponseMeta {
    /// HTTP status code.
    pub status: u16,
    /// Status text.
    pub status_text: String,
    /// Response headers.
    pub headers: BTreeMap<String, String>,
}

impl From<&ApiResponse> for ResponseMeta {
    fn from(response: &ApiResponse) -> Self {
        Self {
            status: response.status,
            status_text: response.status_text.clone(),
            headers: response.headers.clone(),
        }
    }
}

/// Outcome of a typed API call: data on success, the server's error
/// otherwise. The API guarantees exactly one of them is present; this type
/// does not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestResult<T> {
    /// Decoded response body on success.
    pub data: Option<T>,
    /// Server-declared error on failure.
    pub error: Option<AppError>,
    /// Response metadata.
    pub response: ResponseMeta,
}

impl<T> RequestResult<T> {
    /// A successful result.
    #[must_use]
    pub const fn success(data: T, response: ResponseMeta) -> Self {
        Self {
            data: Some(data),
            error: None,
            response,
        }
    }

    /// A failed result.
    #[must_use]
    pub const fn failure(error: AppError, response: ResponseMeta) -> Self {
        Self {
            data: None,
            error: Some(error),
            response,
        }
    }

    /// A result without data or error, e.g. a 204.
    #[must_use]
    pub const fn empty(response: ResponseMeta) -> Self {
        Self {
            data: None,
            error: None,
            response,
        }
    }

    /// Returns true if the server declared an error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.response.status
    }
}
