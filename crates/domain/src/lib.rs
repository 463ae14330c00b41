//! Imageer Domain - Core console types
//!
//! This crate defines the data model of the Imageer admin console:
//! the REST API's wire models, the server error body, toasts and the
//! persisted UI preferences. All types here are pure Rust with no I/O.

pub mod api;
pub mod error;
pub mod id;
pub mod preferences;
pub mod theme;
pub mod toast;

pub use error::{AppError, AppErrorCode, DomainError, DomainResult, is_app_error};
pub use id::generate_id;
pub use preferences::{ImagePreferences, PerPage, SortBy, SortOrder};
pub use theme::Theme;
pub use toast::{DEFAULT_TIMEOUT_MS, Toast, ToastLevel, ToastOptions};
