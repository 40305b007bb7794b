//! HTTP transport: the REST client and the object-storage collaborator.

pub mod client;
pub mod upload;

pub use client::ApiClient;
pub use upload::{ObjectUpload, UploadFile};
