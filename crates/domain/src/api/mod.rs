//! Wire models of the Imageer REST API.
//!
//! Field names follow the API's camelCase JSON; enums use the server's
//! SCREAMING_SNAKE_CASE spelling.

mod image;
mod paging;
mod project;
mod service_account;
mod user;

pub use image::{
    CreateUploadUrlRequest, Image, ImageFormat, ImageState, ImageVariant, ImageVariantState,
    Images, ListImagesParams, ReprocessImagesRequest, UploadUrl,
};
pub use paging::Page;
pub use project::{
    CreatePresetRequest, CreateProjectRequest, ImageAnchor, ImageFit, Preset, Project,
    ProjectReference, Projects, UpdateProjectRequest, UpsertPresetRequest,
};
pub use service_account::{
    AccessScope, CreateServiceAccountRequest, ServiceAccount, ServiceAccountWithApiKey,
    ServiceAccounts, UpdateServiceAccountRequest,
};
pub use user::{User, UserRole};
