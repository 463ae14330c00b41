//! Application error types

use imageer_domain::AppError;
use thiserror::Error;

use crate::loaders::Redirect;

/// Failure of the underlying transport before any HTTP response arrived.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request URL could not be built or parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request did not complete in time.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Configured timeout.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Failure of a typed API call that cannot be expressed as a
/// [`RequestResult`](crate::client::RequestResult).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The transport failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// A successful response carried a body that does not match the endpoint.
    #[error("failed to decode {status} response: {source}")]
    Decode {
        /// HTTP status of the response.
        status: u16,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// A failed response carried no server-declared error body.
    #[error("unexpected {status} {status_text} response")]
    UnexpectedStatus {
        /// HTTP status of the response.
        status: u16,
        /// Transport status text.
        status_text: String,
    },
}

impl ClientError {
    /// HTTP status of the response, if one was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Decode { status, .. } | Self::UnexpectedStatus { status, .. } => Some(*status),
            Self::Transport(_) | Self::Encode(_) => None,
        }
    }
}

/// Result type alias for typed API calls.
pub type ClientResult<T> = Result<T, ClientError>;

/// A server-declared error together with the HTTP status it came with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{} ({} {}, HTTP {status})", error.message, error.code_name, error.code_id)]
pub struct ApiError {
    error: AppError,
    status: u16,
}

impl ApiError {
    /// Wraps a server error body and its HTTP status.
    #[must_use]
    pub const fn new(error: AppError, status: u16) -> Self {
        Self { error, status }
    }

    /// Server message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.error.message
    }

    /// Numeric application code.
    #[must_use]
    pub const fn code_id(&self) -> i64 {
        self.error.code_id
    }

    /// Symbolic application code.
    #[must_use]
    pub fn code_name(&self) -> &str {
        &self.error.code_name
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// The original error body.
    #[must_use]
    pub const fn app_error(&self) -> &AppError {
        &self.error
    }

    /// Returns true for HTTP 401.
    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        self.status == 401
    }

    /// Returns true for HTTP 403.
    #[must_use]
    pub const fn is_forbidden(&self) -> bool {
        self.status == 403
    }
}

/// Errors raised when turning a request result into plain data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UnwrapError {
    /// The server declared an error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Neither data nor error was present.
    #[error("unexpected empty response")]
    EmptyResponse,
}

/// Errors of the persisted key-value storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error while reading or writing the backing store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing store holds malformed data.
    #[error("corrupt storage: {0}")]
    Corrupt(String),

    /// The storage is not available in this context.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors of execution-context checks.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContextError {
    /// An interactive-only facility was requested while rendering on the server.
    #[error(
        "the shared browser client is only available in an interactive context; \
         build a client per request with create_api_client() when rendering on the server"
    )]
    NotInteractive,
}

/// Outcome of a route loader other than page data.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The client must navigate elsewhere.
    #[error("redirect ({}) to {}", .0.status, .0.location)]
    Redirect(Redirect),

    /// The server declared an error the loader does not handle.
    #[error(transparent)]
    Api(ApiError),

    /// A response carried neither data nor error.
    #[error("unexpected empty response")]
    EmptyResponse,

    /// The request could not be completed or decoded.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A route parameter is absent.
    #[error("missing route parameter: {0}")]
    MissingParam(&'static str),

    /// No route matches the path.
    #[error("no route for {0}")]
    NotFound(String),
}

impl LoadError {
    /// The redirect, if this is one.
    #[must_use]
    pub const fn redirect(&self) -> Option<&Redirect> {
        match self {
            Self::Redirect(redirect) => Some(redirect),
            _ => None,
        }
    }
}

impl From<Redirect> for LoadError {
    fn from(redirect: Redirect) -> Self {
        Self::Redirect(redirect)
    }
}

impl From<UnwrapError> for LoadError {
    fn from(error: UnwrapError) -> Self {
        match error {
            UnwrapError::Api(error) => Self::Api(error),
            UnwrapError::EmptyResponse => Self::EmptyResponse,
        }
    }
}

/// Result type alias for route loaders.
pub type LoadResult<T> = Result<T, LoadError>;
