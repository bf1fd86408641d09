//! Shared configuration for the Gamma jobs API client.
//!
//! Configuration is layered from optional TOML files under `config/` and
//! `GAMMA__`-prefixed environment variables.

pub mod config;


pub use config::{AppConfig, JobsApiConfig};
