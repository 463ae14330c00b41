//! Ordered request/response middleware.
//!
//! A [`MiddlewarePipeline`] is an explicit list of [`Middleware`] layers.
//! Request transforms run in list order; response observers run in list
//! order on every response, before it is decoded for the caller.

use std::fmt;
use std::sync::Arc;

use imageer_domain::{AppError, ToastLevel};

use super::request::{ApiRequest, ApiResponse, Credentials};
use crate::context::InteractiveContext;
use crate::stores::ToastStore;

/// A cross-cutting concern applied to every request of a client.
pub trait Middleware: Send + Sync {
    /// Short name for logs and introspection.
    fn name(&self) -> &'static str;

    /// Transforms an outgoing request.
    fn on_request(&self, request: ApiRequest) -> ApiRequest {
        request
    }

    /// Observes a response. Observers cannot change or block it.
    fn on_response(&self, _response: &ApiResponse) {}
}

/// Ordered list of middleware layers.
#[derive(Clone, Default)]
pub struct MiddlewarePipeline {
    layers: Vec<Arc<dyn Middleware>>,
}

impl MiddlewarePipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layer after the existing ones.
    pub fn push(&mut self, layer: Arc<dyn Middleware>) {
        self.layers.push(layer);
    }

    /// Runs every request transform, left to right.
    #[must_use]
    pub fn on_request(&self, request: ApiRequest) -> ApiRequest {
        self.layers
            .iter()
            .fold(request, |request, layer| layer.on_request(request))
    }

    /// Runs every response observer, left to right.
    pub fn on_response(&self, response: &ApiResponse) {
        for layer in &self.layers {
            layer.on_response(response);
        }
    }

    /// Names of the layers, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.layers.iter().map(|layer| layer.name()).collect()
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true if there are no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl fmt::Debug for MiddlewarePipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// Sends ambient credentials with every request, cross-origin included.
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialsMiddleware;

impl Middleware for CredentialsMiddleware {
    fn name(&self) -> &'static str {
        "credentials"
    }

    fn on_request(&self, request: ApiRequest) -> ApiRequest {
        ApiRequest {
            credentials: Credentials::Include,
            ..request
        }
    }
}

/// Turns every failed response into a toast.
///
/// 5xx responses raise an error toast, 4xx a warning. The message is the
/// server's [`AppError`] message, or the status text when the body is not
/// one. Only constructible in an interactive context, so server-side
/// rendering never produces notifications.
#[derive(Debug, Clone)]
pub struct ErrorNotificationMiddleware {
    toasts: ToastStore,
}

impl ErrorNotificationMiddleware {
    /// Creates the middleware, reporting into `toasts`.
    #[must_use]
    pub const fn new(toasts: ToastStore, _context: InteractiveContext) -> Self {
        Self { toasts }
    }

    /// Toast level for a failed status, `None` below 400.
    #[must_use]
    pub const fn level_for(status: u16) -> Option<ToastLevel> {
        if status >= 500 {
            Some(ToastLevel::Error)
        } else if status >= 400 {
            Some(ToastLevel::Warning)
        } else {
            None
        }
    }

    fn message_for(response: &ApiResponse) -> String {
        match response.json::<AppError>() {
            Ok(error) => error.message,
            Err(_) if response.status_text.is_empty() => format!("HTTP {}", response.status),
            Err(_) => response.status_text.clone(),
        }
    }
}

impl Middleware for ErrorNotificationMiddleware {
    fn name(&self) -> &'static str {
        "error-notification"
    }

    fn on_response(&self, response: &ApiResponse) {
        if response.is_success() {
            return;
        }
        let Some(level) = Self::level_for(response.status) else {
            return;
        };

        let message = Self::message_for(response);
        tracing::warn!(status = response.status, %level, %message, "request failed");
        match level {
            ToastLevel::Error => self.toasts.error(message, None),
            _ => self.toasts.warning(message, None),
        };
    }
}
