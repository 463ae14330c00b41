//! Toast notification store.

use std::fmt;
use std::sync::Arc;

use imageer_domain::{DEFAULT_TIMEOUT_MS, Toast, ToastLevel, ToastOptions, generate_id};
use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::ports::Clock;

/// Shared registry of visible toasts.
///
/// Cloning yields another handle to the same registry. Adds from concurrent
/// tasks never collide: each toast gets a fresh UUID and the map is guarded
/// by a lock.
#[derive(Clone)]
pub struct ToastStore {
    toasts: Arc<RwLock<IndexMap<String, Toast>>>,
    clock: Arc<dyn Clock>,
}

impl ToastStore {
    /// Creates an empty store stamping toasts with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            toasts: Arc::new(RwLock::new(IndexMap::new())),
            clock,
        }
    }

    /// Adds a toast and returns its id.
    pub fn add(&self, options: ToastOptions) -> String {
        let toast = Toast {
            id: generate_id(),
            message: options.message,
            level: options.level.unwrap_or_default(),
            timeout_ms: options.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS),
            created_at: self.clock.now(),
        };
        let id = toast.id.clone();
        tracing::debug!(%id, level = %toast.level, "toast added");
        self.toasts.write().insert(id.clone(), toast);
        id
    }

    /// Removes a toast. Unknown ids are ignored.
    pub fn remove(&self, id: &str) {
        self.toasts.write().shift_remove(id);
    }

    /// Removes every toast.
    pub fn clear(&self) {
        self.toasts.write().clear();
    }

    /// Adds an info toast.
    pub fn info(&self, message: impl Into<String>, timeout_ms: Option<u64>) -> String {
        self.add_with_level(message, ToastLevel::Info, timeout_ms)
    }

    /// Adds a success toast.
    pub fn success(&self, message: impl Into<String>, timeout_ms: Option<u64>) -> String {
        self.add_with_level(message, ToastLevel::Success, timeout_ms)
    }

    /// Adds a warning toast.
    pub fn warning(&self, message: impl Into<String>, timeout_ms: Option<u64>) -> String {
        self.add_with_level(message, ToastLevel::Warning, timeout_ms)
    }

    /// Adds an error toast.
    pub fn error(&self, message: impl Into<String>, timeout_ms: Option<u64>) -> String {
        self.add_with_level(message, ToastLevel::Error, timeout_ms)
    }

    fn add_with_level(
        &self,
        message: impl Into<String>,
        level: ToastLevel,
        timeout_ms: Option<u64>,
    ) -> String {
        self.add(ToastOptions {
            message: message.into(),
            level: Some(level),
            timeout_ms,
        })
    }

    /// Snapshot of the current toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.read().values().cloned().collect()
    }

    /// Looks a toast up by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Toast> {
        self.toasts.read().get(id).cloned()
    }

    /// Number of toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.read().len()
    }

    /// Returns true if no toast is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.read().is_empty()
    }

    /// Drops every toast whose timeout has elapsed and returns how many were
    /// removed.
    pub fn remove_expired(&self) -> usize {
        let now = self.clock.now();
        let mut toasts = self.toasts.write();
        let before = toasts.len();
        toasts.retain(|_, toast| !toast.is_expired(now));
        before - toasts.len()
    }
}

impl fmt::Debug for ToastStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastStore")
            .field("toasts", &self.toasts.read().len())
            .finish_non_exhaustive()
    }
}
