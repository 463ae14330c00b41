//! Image list preferences.
//!
//! Defines the user-scoped knobs of the image browser: sort field, sort
//! order and page size. Each value round-trips through the string form it
//! is persisted with.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Field the image list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Upload time (default).
    #[default]
    CreatedAt,
    /// Last modification time.
    UpdatedAt,
}

impl SortBy {
    /// Persisted and query-string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        }
    }
}

impl FromStr for SortBy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(DomainError::InvalidSortBy(other.to_string())),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    /// Oldest first.
    Asc,
    /// Newest first (default).
    #[default]
    Desc,
}

impl SortOrder {
    /// Persisted and query-string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(DomainError::InvalidSortOrder(other.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of images shown per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum PerPage {
    /// 10 images.
    Ten,
    /// 20 images (default).
    #[default]
    Twenty,
    /// 50 images.
    Fifty,
}

impl PerPage {
    /// Every size the image browser offers.
    pub const ALL: [Self; 3] = [Self::Ten, Self::Twenty, Self::Fifty];

    /// Page size as a number.
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }
}

impl TryFrom<u32> for PerPage {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|size| size.value() == value)
            .ok_or_else(|| DomainError::InvalidPerPage(value.to_string()))
    }
}

impl From<PerPage> for u32 {
    fn from(value: PerPage) -> Self {
        value.value()
    }
}

impl FromStr for PerPage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidPerPage(s.to_string()))?;
        Self::try_from(value)
    }
}

impl fmt::Display for PerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Snapshot of all image list preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImagePreferences {
    /// Sort field.
    #[serde(default)]
    pub sort_by: SortBy,
    /// Sort direction.
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Page size.
    #[serde(default)]
    pub per_page: PerPage,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_preferences() {
        let prefs = ImagePreferences::default();
        assert_eq!(prefs.sort_by, SortBy::CreatedAt);
        assert_eq!(prefs.sort_order, SortOrder::Desc);
        assert_eq!(prefs.per_page, PerPage::Twenty);
    }

    #[test]
    fn per_page_parses_only_offered_sizes() {
        assert_eq!("50".parse::<PerPage>(), Ok(PerPage::Fifty));
        assert_eq!(" 10 ".parse::<PerPage>(), Ok(PerPage::Ten));
        assert!("15".parse::<PerPage>().is_err());
        assert!("twenty".parse::<PerPage>().is_err());
    }

    #[test]
    fn string_forms_round_trip() {
        for sort_by in [SortBy::CreatedAt, SortBy::UpdatedAt] {
            assert_eq!(sort_by.as_str().parse::<SortBy>(), Ok(sort_by));
        }
        for order in [SortOrder::Asc, SortOrder::Desc] {
            assert_eq!(order.to_string().parse::<SortOrder>(), Ok(order));
        }
        assert!("desc".parse::<SortOrder>().is_err());
    }

    #[test]
    fn reversed_order() {
        assert_eq!(SortOrder::Desc.reversed(), SortOrder::Asc);
        assert_eq!(SortOrder::Asc.reversed(), SortOrder::Desc);
    }
}
