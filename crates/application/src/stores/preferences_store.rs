//! Image list preferences.

use std::sync::Arc;

use imageer_domain::{ImagePreferences, PerPage, SortBy, SortOrder};

use super::persisted::PersistedValue;
use crate::ports::KeyValueStorage;

/// Prefix shared by every image preference key.
pub const IMAGE_PREFERENCES_KEY_PREFIX: &str = "imageer:images:";

/// Sort and paging preferences of the image list, each persisted under its
/// own key.
#[derive(Debug, Clone)]
pub struct ImagePreferencesStore {
    /// Sort field, key `imageer:images:sortBy`.
    pub sort_by: PersistedValue<SortBy>,
    /// Sort direction, key `imageer:images:sortOrder`.
    pub sort_order: PersistedValue<SortOrder>,
    /// Page size, key `imageer:images:perPage`.
    pub per_page: PersistedValue<PerPage>,
}

impl ImagePreferencesStore {
    /// Loads the preferences from `storage`, defaulting missing values.
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let defaults = ImagePreferences::default();
        Self {
            sort_by: PersistedValue::load(
                format!("{IMAGE_PREFERENCES_KEY_PREFIX}sortBy"),
                defaults.sort_by,
                Arc::clone(&storage),
            ),
            sort_order: PersistedValue::load(
                format!("{IMAGE_PREFERENCES_KEY_PREFIX}sortOrder"),
                defaults.sort_order,
                Arc::clone(&storage),
            ),
            per_page: PersistedValue::load(
                format!("{IMAGE_PREFERENCES_KEY_PREFIX}perPage"),
                defaults.per_page,
                storage,
            ),
        }
    }

    /// Current values of all three preferences.
    #[must_use]
    pub fn snapshot(&self) -> ImagePreferences {
        ImagePreferences {
            sort_by: self.sort_by.get(),
            sort_order: self.sort_order.get(),
            per_page: self.per_page.get(),
        }
    }
}
