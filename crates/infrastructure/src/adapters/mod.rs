//! Adapters implementing application ports.

mod attribute_surface;
mod reqwest_transport;
mod system_clock;
mod system_theme;

pub use attribute_surface::{AttributeSurface, THEME_ATTRIBUTE};
pub use reqwest_transport::{DEFAULT_TIMEOUT_MS, ReqwestTransport};
pub use system_clock::SystemClock;
pub use system_theme::{EnvSystemTheme, COLOR_SCHEME_VAR};
