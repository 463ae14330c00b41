//! Projects and their image presets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::image::ImageFormat;

/// How a preset fits the source image into the target box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageFit {
    /// Crop to fill the box.
    Cover,
    /// Letterbox inside the box.
    Contain,
    /// Stretch to the box.
    Fill,
}

/// Which part of the image to keep when cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageAnchor {
    /// Content-aware anchor.
    Smart,
    /// Center of the image.
    Center,
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
}

/// A named transformation applied to every image uploaded to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preset {
    /// Unique identifier.
    pub id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Kebab-case preset name.
    pub name: String,
    /// Whether the preset is applied when the uploader names none.
    pub default: bool,
    /// Output format.
    pub format: ImageFormat,
    /// Output quality, 1-100.
    pub quality: u8,
    /// Fit mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    /// Crop anchor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<ImageAnchor>,
    /// Target width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Target height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// An image project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Project name.
    pub name: String,
    /// Presets configured on the project.
    #[serde(default)]
    pub presets: Vec<Preset>,
    /// Number of images stored in the project.
    #[serde(default)]
    pub image_count: u64,
}

/// One page of projects plus the total count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projects {
    /// Projects on this page.
    pub items: Vec<Project>,
    /// Number of projects across all pages.
    pub total: u64,
}

/// Short reference to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectReference {
    /// Project identifier.
    pub id: String,
    /// Project name.
    pub name: String,
}

/// Body of a preset creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePresetRequest {
    /// Kebab-case preset name.
    pub name: String,
    /// Whether the preset is a default one.
    #[serde(default)]
    pub default: bool,
    /// Output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    /// Output quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    /// Fit mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    /// Crop anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<ImageAnchor>,
    /// Target width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Target height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

/// A preset to update (with `id`) or create (without).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPresetRequest {
    /// Existing preset to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New default flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
    /// New format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ImageFormat>,
    /// New quality.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<u8>,
    /// New fit mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<ImageFit>,
    /// New anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<ImageAnchor>,
    /// New width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// New height.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl UpsertPresetRequest {
    /// Returns true if this upsert targets an existing preset.
    #[must_use]
    pub const fn is_update(&self) -> bool {
        self.id.is_some()
    }
}

/// Body of `POST /api/v1/admin/projects`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    /// Project name.
    pub name: String,
    /// Presets to create alongside the project.
    #[serde(default)]
    pub presets: Vec<CreatePresetRequest>,
}

/// Body of `PUT /api/v1/admin/projects/{projectId}`.
///
/// Presets missing from `presets` are removed by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProjectRequest {
    /// New project name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Full desired preset list.
    #[serde(default)]
    pub presets: Vec<UpsertPresetRequest>,
}
