//! Console error types.

use imageer_application::error::{LoadError, StorageError};
use imageer_infrastructure::{ConfigError, RuntimeError, SerializationError};

/// Error type for console commands.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A page could not be loaded.
    #[error("failed to load page: {0}")]
    Load(#[from] LoadError),

    /// The default wiring failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A preference could not be persisted.
    #[error("failed to persist: {0}")]
    Storage(#[from] StorageError),

    /// Output could not be serialized.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// The page path is not a valid URL path.
    #[error("invalid page path {path:?}: {source}")]
    InvalidPath {
        /// Offending path.
        path: String,
        /// Parse failure.
        source: url::ParseError,
    },
}

/// Result type alias for console commands.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
