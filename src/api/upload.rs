//! Object-storage collaborator boundary.
//!
//! Mutations that carry files (problem images, testcase pairs) upload them
//! first and send only the returned descriptors in the JSON payload. The
//! upload transport itself is outside this crate; callers provide an
//! implementation of [`ObjectUpload`].

use crate::errors::ApiError;
use crate::models::AssetDescriptor;

/// A file staged for upload.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

/// Uploads raw bytes to object storage and returns the stored key.
#[async_trait::async_trait]
pub trait ObjectUpload: Send + Sync {
    /// Upload one file under the given key prefix (e.g. `problems/{id}`)
    /// and return the descriptor mutation payloads expect.
    async fn upload(&self, prefix: &str, file: &UploadFile) -> Result<AssetDescriptor, ApiError>;
}

/// Upload a batch sequentially, failing fast on the first error.
pub async fn upload_all(
    uploader: &dyn ObjectUpload,
    prefix: &str,
    files: &[UploadFile],
) -> Result<Vec<AssetDescriptor>, ApiError> {
    let mut descriptors = Vec::with_capacity(files.len());
    for file in files {
        descriptors.push(uploader.upload(prefix, file).await?);
    }
    Ok(descriptors)
}
