//! Host color-scheme preference read from the terminal environment.

use std::sync::Arc;

use imageer_application::ports::{SystemThemeListener, SystemThemeSource};
use parking_lot::{Mutex, RwLock};

/// Explicit override, `dark` or `light`.
pub const COLOR_SCHEME_VAR: &str = "IMAGEER_COLOR_SCHEME";

/// `COLORFGBG` as exported by many terminals, e.g. `15;0`.
const COLORFGBG_VAR: &str = "COLORFGBG";

/// The terminal's color-scheme preference.
///
/// Reads [`COLOR_SCHEME_VAR`] first, then the background color of
/// `COLORFGBG`. Changes reported through [`Self::set_prefers_dark`] reach
/// every subscribed listener.
#[derive(Clone, Default)]
pub struct EnvSystemTheme {
    prefers_dark: Arc<RwLock<bool>>,
    listeners: Arc<Mutex<Vec<Arc<dyn Fn(bool) + Send + Sync>>>>,
}

impl EnvSystemTheme {
    /// Detects the preference from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        let scheme = std::env::var(COLOR_SCHEME_VAR).ok();
        let colorfgbg = std::env::var(COLORFGBG_VAR).ok();
        Self::with_preference(detect(scheme.as_deref(), colorfgbg.as_deref()))
    }

    /// A source with a fixed initial preference.
    #[must_use]
    pub fn with_preference(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: Arc::new(RwLock::new(prefers_dark)),
            listeners: Arc::default(),
        }
    }

    /// Records a new preference and notifies listeners if it changed.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        {
            let mut current = self.prefers_dark.write();
            if *current == prefers_dark {
                return;
            }
            *current = prefers_dark;
        }
        let listeners = self.listeners.lock().clone();
        for listener in listeners {
            listener(prefers_dark);
        }
    }
}

fn detect(scheme: Option<&str>, colorfgbg: Option<&str>) -> bool {
    match scheme.map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("dark") => return true,
        Some(s) if s.eq_ignore_ascii_case("light") => return false,
        _ => {}
    }
    // Background is the last field; ANSI colors 0-6 and 8 are dark.
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}

impl SystemThemeSource for EnvSystemTheme {
    fn prefers_dark(&self) -> bool {
        *self.prefers_dark.read()
    }

    fn subscribe(&self, listener: SystemThemeListener) {
        self.listeners.lock().push(Arc::from(listener));
    }
}

impl std::fmt::Debug for EnvSystemTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvSystemTheme")
            .field("prefers_dark", &self.prefers_dark())
            .finish_non_exhaustive()
    }
}
