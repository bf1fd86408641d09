//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Jobs API connection settings.
    pub jobs_api: JobsApiConfig,
}

/// Jobs API client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobsApiConfig {
    /// Base address of the jobs API, without a trailing path.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value sent in the `X-Authenticated-Userid` header.
    pub user_id: String,
    /// Request timeout in seconds. Absent means requests never time out.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:10312".to_string()
}

impl JobsApiConfig {
    /// Creates a config with no request timeout.
    #[must_use]
    pub fn new(base_url: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            user_id: user_id.into(),
            timeout_secs: None,
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("GAMMA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
