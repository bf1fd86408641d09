//! Job attachment uploads.
//!
//! A single operation: read a local file and POST it as the multipart field
//! `attachment` to `{base_url}/jobs/{job_id}/attachments`.

mod error;
mod types;
mod uploader;

pub use error::UploadError;
pub use types::ApiResponse;
pub use uploader::{ATTACHMENT_FIELD, AttachmentUploader, USER_ID_HEADER, attachments_url};
