//! Upload error types.

use std::path::PathBuf;

use thiserror::Error;

/// Attachment upload errors.
#[derive(Debug, Error)]
pub enum UploadError {
    /// The local file could not be read.
    #[error("unable to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The jobs API answered with a 4xx or 5xx status.
    #[error("jobs API returned {status}: {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message from the response envelope, or the raw body.
        message: String,
    },

    /// The HTTP client could not be built.
    #[error("client configuration error: {0}")]
    Configuration(String),
}

impl UploadError {
    /// Create an I/O error for `path`.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a status error.
    #[must_use]
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    /// Returns the HTTP status for status errors.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the jobs API rejected the upload.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}
