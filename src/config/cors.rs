//! Cross-origin resource sharing configuration.

use std::env;

/// Configuration for the CORS middleware
///
/// Every origin is accepted. This service is a demo and is not meant to be
/// exposed publicly.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allow_credentials: bool,
    pub max_age_seconds: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_credentials: true,
            max_age_seconds: 3600,
        }
    }
}

impl CorsConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let allow_credentials = env::var("CORS_ALLOW_CREDENTIALS")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        let max_age_seconds = env::var("CORS_MAX_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3600);

        Self {
            allow_credentials,
            max_age_seconds,
        }
    }
}
