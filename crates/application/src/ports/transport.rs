//! HTTP transport port

use async_trait::async_trait;

use crate::client::{ApiRequest, ApiResponse};
use crate::error::TransportError;

/// Port for sending a single HTTP request.
///
/// This is the console's equivalent of a `fetch` implementation. Callers
/// may inject their own, for instance to forward the end user's cookies
/// when rendering on the server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and returns the complete response.
    ///
    /// Non-2xx statuses are responses, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained.
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}
