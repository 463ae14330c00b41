//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the console core and the outside
//! world: the network, persisted browser-style storage, the wall clock and
//! the host's theme facilities. Adapters live in the infrastructure crate.

mod clock;
mod storage;
mod system_theme;
mod transport;

pub use clock::Clock;
pub use storage::KeyValueStorage;
pub use system_theme::{SystemThemeListener, SystemThemeSource, ThemeSurface};
pub use transport::Transport;
