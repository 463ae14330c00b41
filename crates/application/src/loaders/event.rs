//! The input of a route loader.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use url::Url;

use crate::client::{ApiClient, ClientOptions, create_api_client};
use crate::context::ExecutionContext;
use crate::error::{LoadError, LoadResult};
use crate::ports::Transport;
use crate::stores::ToastStore;

/// Everything a loader knows about the navigation it serves.
#[derive(Clone)]
pub struct LoadEvent {
    /// Requested page URL.
    pub url: Url,
    /// Route parameters, e.g. `projectId`.
    pub params: BTreeMap<String, String>,
    /// API origin; `None` for same-origin requests.
    pub base_url: Option<String>,
    /// Transport for the API requests, e.g. one forwarding the user's cookies.
    pub transport: Arc<dyn Transport>,
    /// Where the loader runs.
    pub context: ExecutionContext,
    /// Toast registry, only written to in an interactive context.
    pub toasts: ToastStore,
}

impl LoadEvent {
    /// A server-render event for `url`.
    #[must_use]
    pub fn new(url: Url, transport: Arc<dyn Transport>, toasts: ToastStore) -> Self {
        Self {
            url,
            params: BTreeMap::new(),
            base_url: None,
            transport,
            context: ExecutionContext::ServerRender,
            toasts,
        }
    }

    /// Sets the API origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        self.base_url = base_url;
        self
    }

    /// Adds a route parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Sets the execution context.
    #[must_use]
    pub const fn with_context(mut self, context: ExecutionContext) -> Self {
        self.context = context;
        self
    }

    /// A client for this event, with the standard middleware stack.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        create_api_client(ClientOptions {
            base_url: self.base_url.clone(),
            transport: Arc::clone(&self.transport),
            context: self.context,
            toasts: self.toasts.clone(),
        })
    }

    /// A route parameter.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingParam`] if the route did not capture it.
    pub fn param(&self, name: &'static str) -> LoadResult<&str> {
        self.params
            .get(name)
            .map(String::as_str)
            .ok_or(LoadError::MissingParam(name))
    }

    /// An integer query parameter, `default` when absent or not a number.
    #[must_use]
    pub fn query_u32(&self, name: &str, default: u32) -> u32 {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.parse().ok())
            .unwrap_or(default)
    }
}

impl fmt::Debug for LoadEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadEvent")
            .field("url", &self.url.as_str())
            .field("params", &self.params)
            .field("base_url", &self.base_url)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
