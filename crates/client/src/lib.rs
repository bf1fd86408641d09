//! Client for the Gamma jobs API.
//!
//! # Modules
//!
//! - `attachment` - Uploading local files as job attachments

pub mod attachment;

pub use attachment::{AttachmentUploader, UploadError};
pub use gamma_shared::JobsApiConfig;
