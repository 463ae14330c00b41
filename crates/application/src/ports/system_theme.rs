//! Host theme ports

use imageer_domain::Theme;

/// Callback invoked with the new `prefers dark` flag.
pub type SystemThemeListener = Box<dyn Fn(bool) + Send + Sync>;

/// The host's color-scheme preference, e.g. `prefers-color-scheme`.
pub trait SystemThemeSource: Send + Sync {
    /// Returns true if the host currently prefers a dark theme.
    fn prefers_dark(&self) -> bool;

    /// Registers a listener for preference changes.
    fn subscribe(&self, listener: SystemThemeListener);
}

/// Rendering surface the active theme is applied to.
pub trait ThemeSurface: Send + Sync {
    /// Applies `theme`, e.g. by setting a `data-theme` attribute.
    fn apply(&self, theme: Theme);
}
