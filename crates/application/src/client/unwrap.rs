//! Conversion of request results into plain values or errors.
//!
//! Unwrapping never notifies: the error-notification middleware has already
//! reported the failure once, however many callers unwrap the result.

use super::result::RequestResult;
use crate::error::{ApiError, UnwrapError};

/// Returns the result's data.
///
/// # Errors
///
/// Returns [`UnwrapError::Api`] if the server declared an error, and
/// [`UnwrapError::EmptyResponse`] if the result carries neither data nor error.
pub fn unwrap<T>(result: RequestResult<T>) -> Result<T, UnwrapError> {
    if let Some(error) = result.error {
        return Err(ApiError::new(error, result.response.status).into());
    }

    result.data.ok_or(UnwrapError::EmptyResponse)
}

/// Checks a result whose success carries no content, e.g. a deletion.
///
/// # Errors
///
/// Returns [`UnwrapError::Api`] if the server declared an error.
pub fn unwrap_empty<T>(result: RequestResult<T>) -> Result<(), UnwrapError> {
    match result.error {
        Some(error) => Err(ApiError::new(error, result.response.status).into()),
        None => Ok(()),
    }
}
