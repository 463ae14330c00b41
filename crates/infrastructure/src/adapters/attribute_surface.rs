//! Theme surface backed by an attribute map.

use std::collections::BTreeMap;
use std::sync::Arc;

use imageer_application::ports::ThemeSurface;
use imageer_domain::Theme;
use parking_lot::RwLock;

/// Attribute carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Root-element attributes of the console, the CLI's stand-in for the
/// document element.
#[derive(Debug, Clone, Default)]
pub struct AttributeSurface {
    attributes: Arc<RwLock<BTreeMap<String, String>>>,
}

impl AttributeSurface {
    /// Creates a surface without attributes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of attribute `name`.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().get(name).cloned()
    }

    /// Snapshot of all attributes.
    #[must_use]
    pub fn attributes(&self) -> BTreeMap<String, String> {
        self.attributes.read().clone()
    }
}

impl ThemeSurface for AttributeSurface {
    fn apply(&self, theme: Theme) {
        self.attributes
            .write()
            .insert(THEME_ATTRIBUTE.to_string(), theme.as_str().to_string());
    }
}
