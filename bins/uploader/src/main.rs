//! Gamma attachment uploader
//!
//! Uploads `tests/test.txt` to a fixed job for manual testing against a
//! locally running jobs API.

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gamma_client::AttachmentUploader;
use gamma_shared::AppConfig;

const JOB_ID: &str = "c4ff0853-836f-4354-91d3-6614df17d02b";
const SAMPLE_FILE: &str = "tests/test.txt";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamma=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;
    let uploader = AttachmentUploader::new(config.jobs_api)?;

    info!(job_id = JOB_ID, url = %uploader.attachments_url(JOB_ID), "Uploading attachment");
    uploader.upload(JOB_ID, SAMPLE_FILE).await?;
    info!(job_id = JOB_ID, "Attachment uploaded");

    Ok(())
}
