//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any request
//! is made.
//!
//! ## Required Variables
//!
//! - `LEAD_API_URL` - Base URL of the lead service (http/https)
//!
//! ## Optional Variables
//!
//! - `REQUEST_TIMEOUT_SECS` - Per-request timeout (default: 10)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote lead service.
    pub api_base_url: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LEAD_API_URL` is missing.
    pub fn from_env() -> Result<Self> {
        let api_base_url = env::var("LEAD_API_URL").context("LEAD_API_URL must be set")?;

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            api_base_url,
            request_timeout_secs,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is not a valid http/https URL
    /// - `request_timeout_secs` is outside 1..=300
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.api_base_url)
            .with_context(|| format!("LEAD_API_URL is not a valid URL: '{}'", self.api_base_url))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => anyhow::bail!("LEAD_API_URL must be http or https, got '{other}'"),
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            anyhow::bail!(
                "REQUEST_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.request_timeout_secs
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
