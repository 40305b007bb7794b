//! Uploaded file references shared by problems and pages.

use serde::{Deserialize, Serialize};

/// A stored file as the API returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub url: String,
}

/// Descriptor for a freshly uploaded object, as mutation payloads expect it.
///
/// Produced by the object-storage collaborator; the upload transport itself
/// lives behind the [`ObjectUpload`](crate::api::ObjectUpload) trait.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetDescriptor {
    pub key: String,
    pub name: String,
    pub content_type: String,
    pub size: u64,
}
