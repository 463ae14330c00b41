//! Service accounts: API keys for machine clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::ProjectReference;

/// What a service account's key may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessScope {
    /// Every project.
    Full,
    /// Only the listed projects.
    Project,
}

/// A service account without its secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccount {
    /// Unique identifier.
    pub id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Expiry; `None` never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
    /// Display name.
    pub name: String,
    /// Access scope.
    pub access_scope: AccessScope,
    /// Projects reachable with `AccessScope::Project`.
    #[serde(default)]
    pub projects: Vec<ProjectReference>,
}

/// A freshly created service account, the only time its key is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAccountWithApiKey {
    /// The account.
    #[serde(flatten)]
    pub account: ServiceAccount,
    /// Plaintext API key.
    pub api_key: String,
}

/// One page of service accounts plus the total count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccounts {
    /// Accounts on this page.
    pub items: Vec<ServiceAccount>,
    /// Number of accounts across all pages.
    pub total: u64,
}

/// Body of `POST /api/v1/admin/service-accounts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceAccountRequest {
    /// Display name.
    pub name: String,
    /// Access scope.
    pub access_scope: AccessScope,
    /// Projects for `AccessScope::Project`.
    #[serde(default, rename = "projectIds")]
    pub project_ids: Vec<String>,
    /// Optional expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
}

/// Body of `PUT /api/v1/admin/service-accounts/{serviceAccountId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateServiceAccountRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New access scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_scope: Option<AccessScope>,
    /// Replacement project list.
    #[serde(skip_serializing_if = "Option::is_none", rename = "projectIds")]
    pub project_ids: Option<Vec<String>>,
    /// New expiry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<DateTime<Utc>>,
}
