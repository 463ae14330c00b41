//! Offset/limit paging parameters shared by list endpoints.

use serde::{Deserialize, Serialize};

/// Offset/limit query parameters. Unset fields are omitted from the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Number of items to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Maximum number of items to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl Page {
    /// A page with both offset and limit set.
    #[must_use]
    pub const fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Only a limit, letting the server pick the offset.
    #[must_use]
    pub const fn limit(limit: u32) -> Self {
        Self {
            offset: None,
            limit: Some(limit),
        }
    }
}
