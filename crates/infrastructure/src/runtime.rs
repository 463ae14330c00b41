//! Process-wide console state and default wiring.
//!
//! The stores are shared by everything running in the interactive console,
//! so they live in lazily initialised statics. Configuration and storage may
//! be installed explicitly before first use; otherwise they are loaded from
//! the standard locations.

use std::sync::{Arc, OnceLock};

use imageer_application::client::{ApiClient, ClientOptions, create_api_client};
use imageer_application::context::ExecutionContext;
use imageer_application::error::{ContextError, StorageError, TransportError};
use imageer_application::ports::{KeyValueStorage, Transport};
use imageer_application::stores::{ImagePreferencesStore, ThemeStore, ToastStore};

use crate::adapters::{ReqwestTransport, SystemClock};
use crate::config::{ConfigError, ConsoleConfig};
use crate::persistence::{FileKeyValueStorage, MemoryStorage};

static CONFIG: OnceLock<ConsoleConfig> = OnceLock::new();
static STORAGE: OnceLock<Arc<dyn KeyValueStorage>> = OnceLock::new();
static TOASTS: OnceLock<ToastStore> = OnceLock::new();
static PREFERENCES: OnceLock<ImagePreferencesStore> = OnceLock::new();
static THEME: OnceLock<ThemeStore> = OnceLock::new();
static BROWSER_CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Errors of the default wiring.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// An interactive-only facility was requested on the server.
    #[error(transparent)]
    Context(#[from] ContextError),

    /// The default transport could not be built.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The persisted storage could not be opened.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A value was installed after it had already been initialised.
    #[error("{0} is already initialised")]
    AlreadyInitialised(&'static str),
}

/// Installs the configuration.
///
/// # Errors
///
/// Fails if the configuration was already used.
pub fn init_config(config: ConsoleConfig) -> Result<(), RuntimeError> {
    CONFIG
        .set(config)
        .map_err(|_| RuntimeError::AlreadyInitialised("configuration"))
}

/// The configuration, loaded from the standard sources on first use.
pub fn config() -> &'static ConsoleConfig {
    CONFIG.get_or_init(|| {
        ConsoleConfig::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "using default configuration");
            ConsoleConfig::default()
        })
    })
}

/// Installs the persisted storage.
///
/// # Errors
///
/// Fails if the storage was already used.
pub fn init_storage(storage: Arc<dyn KeyValueStorage>) -> Result<(), RuntimeError> {
    STORAGE
        .set(storage)
        .map_err(|_| RuntimeError::AlreadyInitialised("storage"))
}

/// Opens the storage file named by `config`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub fn open_storage(config: &ConsoleConfig) -> Result<Arc<dyn KeyValueStorage>, RuntimeError> {
    let storage = match &config.state_dir {
        Some(dir) => FileKeyValueStorage::open(dir)?,
        None => FileKeyValueStorage::open_default()?,
    };
    Ok(Arc::new(storage))
}

/// The persisted storage, opened on first use.
///
/// Falls back to memory if the file cannot be opened, so preferences keep
/// working for the lifetime of the process.
pub fn storage() -> Arc<dyn KeyValueStorage> {
    Arc::clone(STORAGE.get_or_init(|| match open_storage(config()) {
        Ok(storage) => storage,
        Err(e) => {
            tracing::warn!(error = %e, "falling back to in-memory storage");
            Arc::new(MemoryStorage::new())
        }
    }))
}

/// The toast registry.
pub fn toasts() -> &'static ToastStore {
    TOASTS.get_or_init(|| ToastStore::new(Arc::new(SystemClock::new())))
}

/// The image list preferences.
pub fn preferences() -> &'static ImagePreferencesStore {
    PREFERENCES.get_or_init(|| ImagePreferencesStore::load(storage()))
}

/// The theme store. Call [`ThemeStore::init`] once the host theme source is
/// known.
pub fn theme() -> &'static ThemeStore {
    THEME.get_or_init(|| ThemeStore::new(storage()))
}

/// Builds the default HTTP transport for `config`.
///
/// # Errors
///
/// Returns an error if the origin is malformed or the HTTP client cannot be
/// built.
pub fn default_transport(
    config: &ConsoleConfig,
    cookie: Option<String>,
) -> Result<Arc<dyn Transport>, RuntimeError> {
    let mut transport = ReqwestTransport::new(config.request_timeout_ms)?;
    if let Some(origin) = config.origin_url()? {
        transport = transport.with_origin(origin);
    }
    if let Some(cookie) = cookie {
        transport = transport.with_cookie(cookie);
    }
    Ok(Arc::new(transport))
}

/// Builds a client with the standard middleware, using the default
/// transport unless one is given.
///
/// # Errors
///
/// Returns an error if the default transport cannot be built.
pub fn create_client(
    context: ExecutionContext,
    transport: Option<Arc<dyn Transport>>,
) -> Result<ApiClient, RuntimeError> {
    let config = config();
    let transport = match transport {
        Some(transport) => transport,
        None => default_transport(config, None)?,
    };
    Ok(create_api_client(ClientOptions {
        base_url: config.base_url(),
        transport,
        context,
        toasts: toasts().clone(),
    }))
}

/// The client shared by the interactive console.
///
/// Server-side rendering must build a client per request instead, so this
/// fails fast outside an interactive context.
///
/// # Errors
///
/// Returns [`RuntimeError::Context`] while rendering on the server, or an
/// error if the client cannot be built.
pub fn browser_client(context: ExecutionContext) -> Result<&'static ApiClient, RuntimeError> {
    context.require_interactive()?;
    if let Some(client) = BROWSER_CLIENT.get() {
        return Ok(client);
    }
    let client = create_client(ExecutionContext::Interactive, None)?;
    Ok(BROWSER_CLIENT.get_or_init(|| client))
}
