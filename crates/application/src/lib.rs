//! Imageer Application - API client, stores and route loaders
//!
//! This crate defines the application layer of the admin console with:
//! - Port traits (transport, storage, clock, host theme)
//! - The typed API client and its middleware pipeline
//! - Process-wide stores for toasts, preferences and theme
//! - Route loaders and the router that runs them

pub mod client;
pub mod context;
pub mod error;
pub mod loaders;
pub mod ports;
pub mod router;
pub mod stores;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{
    ApiClient, ApiRequest, ApiResponse, ClientOptions, RequestResult, create_api_client, unwrap,
    unwrap_empty,
};
pub use context::{ExecutionContext, InteractiveContext};
pub use error::{
    ApiError, ClientError, ClientResult, ContextError, LoadError, LoadResult, StorageError,
    TransportError, UnwrapError,
};
pub use loaders::{LoadEvent, Redirect};
pub use router::{LoadedPage, PageData, Route, load_route};
pub use stores::{ImagePreferencesStore, ThemeStore, ToastStore};
