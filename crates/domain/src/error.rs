//! Domain error types and the server-declared error body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain-level errors that can occur while parsing console values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The sort field is not one the image list supports.
    #[error("invalid sort field: {0}")]
    InvalidSortBy(String),

    /// The sort order is neither `ASC` nor `DESC`.
    #[error("invalid sort order: {0}")]
    InvalidSortOrder(String),

    /// The page size is not one of the offered sizes.
    #[error("invalid page size: {0}")]
    InvalidPerPage(String),

    /// The theme name is neither `light` nor `dark`.
    #[error("invalid theme: {0}")]
    InvalidTheme(String),

    /// The toast level name is unknown.
    #[error("invalid toast level: {0}")]
    InvalidToastLevel(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Structured error body returned by the Imageer API on failure.
///
/// Serialized exactly as `{"message": .., "codeId": .., "codeName": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Human-readable message meant for the operator.
    pub message: String,
    /// Numeric application error code.
    pub code_id: i64,
    /// Symbolic application error code, e.g. `NOT_FOUND`.
    pub code_name: String,
}

impl AppError {
    /// Creates a new error body.
    #[must_use]
    pub fn new(message: impl Into<String>, code_id: i64, code_name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code_id,
            code_name: code_name.into(),
        }
    }

    /// Returns the well-known code this error carries, if any.
    #[must_use]
    pub fn code(&self) -> Option<AppErrorCode> {
        AppErrorCode::from_id(self.code_id)
    }
}

/// Returns true if `value` has the shape of an [`AppError`].
#[must_use]
pub fn is_app_error(value: &serde_json::Value) -> bool {
    value.as_object().is_some_and(|object| {
        object.get("message").is_some_and(serde_json::Value::is_string)
            && object.get("codeId").is_some_and(serde_json::Value::is_i64)
            && object.get("codeName").is_some_and(serde_json::Value::is_string)
    })
}

/// Error codes the API declares, paired with their HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppErrorCode {
    /// 1000, HTTP 400.
    BadRequest,
    /// 2000, HTTP 401.
    Unauthorized,
    /// 3000, HTTP 403.
    Forbidden,
    /// 4000, HTTP 404.
    NotFound,
    /// 5000, HTTP 405.
    MethodNotAllowed,
    /// 6000, HTTP 406.
    NotAcceptable,
    /// 7000, HTTP 409.
    Conflict,
    /// 8000, HTTP 410.
    Gone,
    /// 9000, HTTP 413.
    RequestEntityTooLarge,
    /// 10000, HTTP 418.
    Teapot,
    /// 11000, HTTP 422.
    UnprocessableEntity,
    /// 12000, HTTP 429.
    TooManyRequests,
    /// 13000, HTTP 500.
    InternalServerError,
    /// 14000, HTTP 501.
    NotImplemented,
    /// 15000, HTTP 503.
    ServiceUnavailable,
}

impl AppErrorCode {
    const ALL: [Self; 15] = [
        Self::BadRequest,
        Self::Unauthorized,
        Self::Forbidden,
        Self::NotFound,
        Self::MethodNotAllowed,
        Self::NotAcceptable,
        Self::Conflict,
        Self::Gone,
        Self::RequestEntityTooLarge,
        Self::Teapot,
        Self::UnprocessableEntity,
        Self::TooManyRequests,
        Self::InternalServerError,
        Self::NotImplemented,
        Self::ServiceUnavailable,
    ];

    /// Numeric identifier of the code.
    #[must_use]
    pub const fn id(self) -> i64 {
        match self {
            Self::BadRequest => 1000,
            Self::Unauthorized => 2000,
            Self::Forbidden => 3000,
            Self::NotFound => 4000,
            Self::MethodNotAllowed => 5000,
            Self::NotAcceptable => 6000,
            Self::Conflict => 7000,
            Self::Gone => 8000,
            Self::RequestEntityTooLarge => 9000,
            Self::Teapot => 10000,
            Self::UnprocessableEntity => 11000,
            Self::TooManyRequests => 12000,
            Self::InternalServerError => 13000,
            Self::NotImplemented => 14000,
            Self::ServiceUnavailable => 15000,
        }
    }

    /// Symbolic name of the code.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BadRequest => "BAD_REQUEST",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::Forbidden => "FORBIDDEN",
            Self::NotFound => "NOT_FOUND",
            Self::MethodNotAllowed => "METHOD_NOT_ALLOWED",
            Self::NotAcceptable => "NOT_ACCEPTABLE",
            Self::Conflict => "CONFLICT",
            Self::Gone => "GONE",
            Self::RequestEntityTooLarge => "REQUEST_ENTITY_TOO_LARGE",
            Self::Teapot => "IM_A_TEAPOT",
            Self::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            Self::TooManyRequests => "TOO_MANY_REQUESTS",
            Self::InternalServerError => "INTERNAL_SERVER_ERROR",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// HTTP status the server pairs with this code.
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::MethodNotAllowed => 405,
            Self::NotAcceptable => 406,
            Self::Conflict => 409,
            Self::Gone => 410,
            Self::RequestEntityTooLarge => 413,
            Self::Teapot => 418,
            Self::UnprocessableEntity => 422,
            Self::TooManyRequests => 429,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
            Self::ServiceUnavailable => 503,
        }
    }

    /// Looks a code up by its numeric identifier.
    #[must_use]
    pub fn from_id(id: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.id() == id)
    }
}
