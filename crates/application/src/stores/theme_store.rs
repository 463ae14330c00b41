//! Color theme store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use imageer_domain::Theme;

use super::observable::{Observable, SubscriptionId};
use crate::error::StorageError;
use crate::ports::{KeyValueStorage, SystemThemeSource, ThemeSurface};

/// Storage key of the explicit theme choice.
pub const THEME_KEY: &str = "theme";

/// Active color theme.
///
/// An explicit choice is persisted and always wins. Without one, the theme
/// follows the host's preference, including later changes to it.
#[derive(Clone)]
pub struct ThemeStore {
    value: Observable<Theme>,
    storage: Arc<dyn KeyValueStorage>,
    system_prefers_dark: Arc<AtomicBool>,
}

impl ThemeStore {
    /// Creates a store with the default theme. Call [`Self::init`] before
    /// relying on the value.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            value: Observable::new(Theme::default()),
            storage,
            system_prefers_dark: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Resolves the initial theme and starts following `source`.
    pub fn init(&self, source: &dyn SystemThemeSource) {
        let prefers_dark = source.prefers_dark();
        self.system_prefers_dark.store(prefers_dark, Ordering::Relaxed);

        let theme = self
            .persisted()
            .unwrap_or_else(|| Theme::from_prefers_dark(prefers_dark));
        tracing::debug!(%theme, "theme initialised");
        self.value.set(theme);

        let store = self.clone();
        source.subscribe(Box::new(move |prefers_dark| {
            store.system_prefers_dark.store(prefers_dark, Ordering::Relaxed);
            if store.persisted().is_none() {
                store.value.set(Theme::from_prefers_dark(prefers_dark));
            }
        }));
    }

    /// Current theme.
    #[must_use]
    pub fn current(&self) -> Theme {
        self.value.get()
    }

    /// Sets and persists an explicit choice.
    ///
    /// # Errors
    ///
    /// Returns an error if the choice could not be persisted; the theme is
    /// applied regardless.
    pub fn set(&self, theme: Theme) -> Result<(), StorageError> {
        self.value.set(theme);
        self.storage.set(THEME_KEY, theme.as_str())?;
        tracing::debug!(%theme, "theme persisted");
        Ok(())
    }

    /// Switches between light and dark, persisting the result.
    ///
    /// # Errors
    ///
    /// See [`Self::set`].
    pub fn toggle(&self) -> Result<Theme, StorageError> {
        let theme = self.current().toggled();
        self.set(theme)?;
        Ok(theme)
    }

    /// Forgets the explicit choice and returns to the host preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored choice could not be removed.
    pub fn clear_choice(&self) -> Result<Theme, StorageError> {
        self.storage.remove(THEME_KEY)?;
        let theme = Theme::from_prefers_dark(self.system_prefers_dark.load(Ordering::Relaxed));
        self.value.set(theme);
        Ok(theme)
    }

    /// Returns true if an explicit choice is persisted.
    #[must_use]
    pub fn has_choice(&self) -> bool {
        self.persisted().is_some()
    }

    /// Registers a change subscriber.
    pub fn subscribe(&self, subscriber: impl Fn(&Theme) + Send + Sync + 'static) -> SubscriptionId {
        self.value.subscribe(subscriber)
    }

    /// Applies the current theme to `surface` and keeps it in sync.
    pub fn attach(&self, surface: Arc<dyn ThemeSurface>) -> SubscriptionId {
        surface.apply(self.current());
        self.value.subscribe(move |theme| surface.apply(*theme))
    }

    fn persisted(&self) -> Option<Theme> {
        match self.storage.get(THEME_KEY) {
            Ok(raw) => raw.and_then(|raw| raw.parse().ok()),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme choice");
                None
            }
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}
