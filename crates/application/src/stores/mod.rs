//! Process-wide UI state: toasts, image list preferences and theme.

mod observable;
mod persisted;
mod preferences_store;
mod theme_store;
mod toast_store;

pub use observable::{Observable, SubscriptionId};
pub use persisted::PersistedValue;
pub use preferences_store::{IMAGE_PREFERENCES_KEY_PREFIX, ImagePreferencesStore};
pub use theme_store::{THEME_KEY, ThemeStore};
pub use toast_store::ToastStore;
