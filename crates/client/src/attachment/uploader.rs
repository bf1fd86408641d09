//! Attachment uploader implementation using `reqwest`.

use std::path::Path;
use std::time::Duration;

use gamma_shared::JobsApiConfig;
use reqwest::multipart::{Form, Part};
use tracing::{debug, error};

use super::error::UploadError;
use super::types::ApiResponse;

/// Header carrying the caller identity.
pub const USER_ID_HEADER: &str = "X-Authenticated-Userid";

/// Multipart field holding the file contents.
pub const ATTACHMENT_FIELD: &str = "attachment";

/// Builds the attachments endpoint for a job.
///
/// Format: `{base_url}/jobs/{job_id}/attachments`. The job ID is inserted
/// verbatim.
#[must_use]
pub fn attachments_url(base_url: &str, job_id: &str) -> String {
    format!("{}/jobs/{job_id}/attachments", base_url.trim_end_matches('/'))
}

/// Uploads local files as attachments on jobs.
#[derive(Debug, Clone)]
pub struct AttachmentUploader {
    client: reqwest::Client,
    config: JobsApiConfig,
}

impl AttachmentUploader {
    /// Create an uploader from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: JobsApiConfig) -> Result<Self, UploadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| UploadError::Configuration(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// The configuration this uploader was built with.
    #[must_use]
    pub fn config(&self) -> &JobsApiConfig {
        &self.config
    }

    /// Attachments endpoint for `job_id` on the configured API.
    #[must_use]
    pub fn attachments_url(&self, job_id: &str) -> String {
        attachments_url(&self.config.base_url, job_id)
    }

    /// Upload the file at `file_path` as an attachment on `job_id`.
    ///
    /// The whole file is read as text before any request is made. Exactly
    /// one POST is sent and it is never retried.
    ///
    /// # Errors
    ///
    /// - [`UploadError::Io`] if the file cannot be read
    /// - [`UploadError::Transport`] if no response is received
    /// - [`UploadError::Status`] if the API answers with 4xx or 5xx
    pub async fn upload(
        &self,
        job_id: &str,
        file_path: impl AsRef<Path>,
    ) -> Result<(), UploadError> {
        let path = file_path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| UploadError::io(path, e))?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(ATTACHMENT_FIELD)
            .to_string();
        let form = Form::new().part(ATTACHMENT_FIELD, Part::text(content).file_name(file_name));

        let url = self.attachments_url(job_id);
        let response = self
            .client
            .post(&url)
            .header(USER_ID_HEADER, &self.config.user_id)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(%status, body = %body, "received API response");

        if status.is_client_error() || status.is_server_error() {
            let message = ApiResponse::failure_message(&body);
            error!(
                status = status.as_u16(),
                job_id,
                url = %url,
                message = %message,
                "unable to upload attachment"
            );
            return Err(UploadError::status(status.as_u16(), message));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("http://localhost:10312", "abc", "http://localhost:10312/jobs/abc/attachments")]
    #[case("http://localhost:10312/", "abc", "http://localhost:10312/jobs/abc/attachments")]
    #[case(
        "http://localhost:10312",
        "c4ff0853-836f-4354-91d3-6614df17d02b",
        "http://localhost:10312/jobs/c4ff0853-836f-4354-91d3-6614df17d02b/attachments"
    )]
    #[case("http://localhost:10312", "a%2Fb", "http://localhost:10312/jobs/a%2Fb/attachments")]
    fn test_attachments_url(#[case] base: &str, #[case] job_id: &str, #[case] expected: &str) {
        assert_eq!(attachments_url(base, job_id), expected);
    }

    #[test]
    fn test_uploader_uses_configured_base_url() {
        let uploader =
            AttachmentUploader::new(JobsApiConfig::new("http://jobs.internal:8080", "svc"))
                .expect("client should build");

        assert_eq!(
            uploader.attachments_url("42"),
            "http://jobs.internal:8080/jobs/42/attachments"
        );
        assert_eq!(uploader.config().user_id, "svc");
    }

    #[test]
    fn test_uploader_builds_with_timeout() {
        let config = JobsApiConfig::new("http://localhost:10312", "psauerborn").with_timeout_secs(1);
        let uploader = AttachmentUploader::new(config).expect("client should build");
        assert_eq!(uploader.config().timeout_secs, Some(1));
    }
}
