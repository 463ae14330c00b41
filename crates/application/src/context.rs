//! Execution context of the console.
//!
//! The same loaders run while rendering on the server and inside the
//! interactive UI. A few facilities (the shared browser client, toast
//! notifications on failed requests) only make sense in the latter, so they
//! demand an [`InteractiveContext`] token that can only be obtained from
//! [`ExecutionContext::require_interactive`].

use crate::error::ContextError;

/// Where the current code is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionContext {
    /// Inside the interactive UI, shared with the user.
    Interactive,
    /// Rendering a page on the server for one request.
    #[default]
    ServerRender,
}

impl ExecutionContext {
    /// Returns true in the interactive UI.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self, Self::Interactive)
    }

    /// Proves that execution is interactive.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::NotInteractive`] while rendering on the server.
    pub const fn require_interactive(self) -> Result<InteractiveContext, ContextError> {
        match self {
            Self::Interactive => Ok(InteractiveContext { _private: () }),
            Self::ServerRender => Err(ContextError::NotInteractive),
        }
    }
}

/// Capability token proving interactive execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractiveContext {
    _private: (),
}
