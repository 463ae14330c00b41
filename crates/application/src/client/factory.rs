//! Client construction with the standard middleware stack.

use std::sync::Arc;

use super::api_client::ApiClient;
use super::middleware::{CredentialsMiddleware, ErrorNotificationMiddleware};
use crate::context::ExecutionContext;
use crate::ports::Transport;
use crate::stores::ToastStore;

/// Options for [`create_api_client`].
#[derive(Clone)]
pub struct ClientOptions {
    /// API origin; `None` sends same-origin requests.
    pub base_url: Option<String>,
    /// Transport the requests go through.
    pub transport: Arc<dyn Transport>,
    /// Where the client runs.
    pub context: ExecutionContext,
    /// Registry failed requests are reported to in an interactive context.
    pub toasts: ToastStore,
}

/// Builds a client with the standard middleware stack.
///
/// Credentials are always included. Failed responses are reported as toasts
/// only when `options.context` is interactive.
#[must_use]
pub fn create_api_client(options: ClientOptions) -> ApiClient {
    let mut builder = ApiClient::builder(options.transport)
        .base_url(options.base_url.unwrap_or_default())
        .middleware(Arc::new(CredentialsMiddleware));

    if let Ok(interactive) = options.context.require_interactive() {
        builder = builder.middleware(Arc::new(ErrorNotificationMiddleware::new(
            options.toasts,
            interactive,
        )));
    }

    builder.build()
}
