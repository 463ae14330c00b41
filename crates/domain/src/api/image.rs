//! Images, their processed variants, and upload URLs.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::ProjectReference;
use crate::preferences::{SortBy, SortOrder};

/// Encoded image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageFormat {
    /// JPEG.
    Jpeg,
    /// PNG.
    Png,
    /// WebP.
    Webp,
    /// AVIF.
    Avif,
    /// HEIC.
    Heic,
}

/// Lifecycle of an original image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageState {
    /// Upload URL issued, bytes not yet received.
    WaitingUpload,
    /// Variants are being produced.
    Processing,
    /// All variants are available.
    Ready,
}

/// Lifecycle of a processed variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageVariantState {
    /// Waiting for the original.
    WaitingUpload,
    /// Being processed.
    Processing,
    /// Processing failed.
    Failed,
    /// Available.
    Ready,
}

/// A preset applied to an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageVariant {
    /// Unique identifier.
    pub id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Preset that produced this variant.
    pub preset_name: String,
    /// Output format.
    pub format: ImageFormat,
    /// Processing state.
    pub state: ImageVariantState,
    /// Public URL once ready.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An uploaded original image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Unique identifier.
    pub id: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Original file name.
    pub file_name: String,
    /// Original format.
    pub format: ImageFormat,
    /// Processing state.
    pub state: ImageState,
    /// Public URL of the original.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Processed variants.
    #[serde(default)]
    pub variants: Vec<ImageVariant>,
    /// Owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectReference>,
}

/// One page of images plus the total count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Images {
    /// Images on this page.
    pub items: Vec<Image>,
    /// Number of images across all pages.
    pub total: u64,
}

/// Query of `GET /api/v1/admin/projects/{projectId}/images`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListImagesParams {
    /// Number of images to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Sort field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Body of `POST /api/v1/admin/projects/{projectId}/images/reprocess`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReprocessImagesRequest {
    /// Images to reprocess; ignored when `reprocess_all` is set.
    #[serde(default, rename = "imageIds")]
    pub image_ids: Vec<String>,
    /// Reprocess every image of the project.
    #[serde(default)]
    pub reprocess_all: bool,
}

/// Body of `POST /api/v1/projects/{projectId}/images/upload-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUploadUrlRequest {
    /// Name of the file to upload.
    pub file_name: String,
    /// Format of the file.
    pub format: ImageFormat,
    /// Presets to apply; empty means the project's defaults.
    #[serde(default)]
    pub preset_names: Vec<String>,
}

/// Presigned upload target for a new image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadUrl {
    /// Identifier the image will have.
    #[serde(rename = "imageId")]
    pub image_id: String,
    /// Presigned PUT URL.
    pub url: String,
    /// When the URL stops working.
    pub expires_at: DateTime<Utc>,
    /// Headers the upload must carry.
    #[serde(default)]
    pub header: BTreeMap<String, Vec<String>>,
}
