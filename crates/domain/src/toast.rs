//! Ephemeral user-facing notifications.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// How long a toast stays visible unless told otherwise.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastLevel {
    /// Neutral information (default).
    #[default]
    Info,
    /// An operation succeeded.
    Success,
    /// Something the operator should look at, e.g. a rejected request.
    Warning,
    /// Something broke on the server side.
    Error,
}

impl ToastLevel {
    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl FromStr for ToastLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Self::Info),
            "success" => Ok(Self::Success),
            "warning" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            other => Err(DomainError::InvalidToastLevel(other.to_string())),
        }
    }
}

impl fmt::Display for ToastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification currently registered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    /// Unique identifier.
    pub id: String,
    /// Text shown to the user.
    pub message: String,
    /// Severity.
    pub level: ToastLevel,
    /// Display duration in milliseconds.
    #[serde(rename = "timeout")]
    pub timeout_ms: u64,
    /// When the toast was added.
    pub created_at: DateTime<Utc>,
}

impl Toast {
    /// Instant after which the toast should no longer be shown.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        let timeout = i64::try_from(self.timeout_ms).unwrap_or(i64::MAX);
        self.created_at
            .checked_add_signed(Duration::milliseconds(timeout))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns true if the toast's timeout has elapsed at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

/// Input for adding a toast; unset fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastOptions {
    /// Text shown to the user.
    pub message: String,
    /// Severity, `Info` when unset.
    pub level: Option<ToastLevel>,
    /// Display duration, [`DEFAULT_TIMEOUT_MS`] when unset.
    pub timeout_ms: Option<u64>,
}

impl ToastOptions {
    /// Options with just a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Sets the level.
    #[must_use]
    pub const fn with_level(mut self, level: ToastLevel) -> Self {
        self.level = Some(level);
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn toast(timeout_ms: u64) -> Toast {
        Toast {
            id: "t-1".to_string(),
            message: "saved".to_string(),
            level: ToastLevel::Success,
            timeout_ms,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn expiry_follows_timeout() {
        let toast = toast(5000);
        let start = toast.created_at;
        assert!(!toast.is_expired(start + Duration::milliseconds(4999)));
        assert!(toast.is_expired(start + Duration::milliseconds(5000)));
    }

    #[test]
    fn huge_timeout_never_overflows() {
        let toast = toast(u64::MAX);
        assert!(!toast.is_expired(toast.created_at + Duration::days(365)));
    }

    #[test]
    fn options_builder() {
        let options = ToastOptions::new("hi")
            .with_level(ToastLevel::Warning)
            .with_timeout_ms(100);
        assert_eq!(options.level, Some(ToastLevel::Warning));
        assert_eq!(options.timeout_ms, Some(100));
    }
}
