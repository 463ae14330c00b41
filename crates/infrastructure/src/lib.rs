//! Imageer Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in the
//! application layer, the console configuration, and the process-wide
//! wiring of stores and clients.

pub mod adapters;
pub mod config;
pub mod persistence;
pub mod runtime;
pub mod serialization;

pub use adapters::{AttributeSurface, EnvSystemTheme, ReqwestTransport, SystemClock};
pub use self::config::{ConfigError, ConsoleConfig};
pub use persistence::{FileKeyValueStorage, MemoryStorage};
pub use runtime::{RuntimeError, browser_client, create_client, default_transport};
pub use serialization::{SerializationError, from_json_bytes, to_json_stable, to_json_stable_bytes};
