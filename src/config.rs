//! Leads client configuration parsed from environment variables.

use std::path::Path;
use std::time::Duration;

pub const BASE_URL_VAR: &str = "LEADS_BACKEND_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "LEADS_REQUEST_TIMEOUT_SECS";
pub const LEADS_PATH: &str = "/api/leads";

/// Errors raised while building the leads client at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The backend base URL variable is unset or empty.
    #[error("missing backend URL: env var {var} not set")]
    MissingBaseUrl { var: String },

    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadsConfig {
    /// Backend origin without trailing slash, e.g. `https://consult.example`.
    pub base_url: String,
    /// Whole-request timeout. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

impl LeadsConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, request_timeout: None }
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Build typed leads config from environment variables.
    ///
    /// Required:
    /// - `LEADS_BACKEND_URL`: backend origin; trailing `/` is trimmed
    ///
    /// Optional:
    /// - `LEADS_REQUEST_TIMEOUT_SECS`: positive whole seconds; unset means no timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or empty, or the timeout
    /// is not a positive integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = match std::env::var(BASE_URL_VAR) {
            Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
            Ok(_) | Err(std::env::VarError::NotPresent) => {
                return Err(ConfigError::MissingBaseUrl { var: BASE_URL_VAR.into() });
            }
            Err(e) => return Err(ConfigError::Parse(format!("{BASE_URL_VAR}: {e}"))),
        };
        let request_timeout = match std::env::var(REQUEST_TIMEOUT_VAR) {
            Ok(raw) => parse_timeout(&raw)?,
            Err(std::env::VarError::NotPresent) => None,
            Err(e) => return Err(ConfigError::Parse(format!("{REQUEST_TIMEOUT_VAR}: {e}"))),
        };

        let mut config = Self::new(base_url);
        config.request_timeout = request_timeout;
        Ok(config)
    }

    /// Load `.env` if present, then read the environment.
    ///
    /// # Errors
    ///
    /// See [`LeadsConfig::from_env`].
    pub fn load() -> Result<Self, ConfigError> {
        report_dotenv(dotenvy::dotenv().map(|_| ()));
        Self::from_env()
    }

    /// Load the given env file if present, then read the environment.
    /// Variables already set in the process take precedence over the file.
    ///
    /// # Errors
    ///
    /// See [`LeadsConfig::from_env`].
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        report_dotenv(dotenvy::from_path(path.as_ref()));
        Self::from_env()
    }

    /// Full URL of the backend leads endpoint.
    #[must_use]
    pub fn leads_endpoint(&self) -> String {
        format!("{}{LEADS_PATH}", self.base_url)
    }
}

fn report_dotenv(loaded: Result<(), dotenvy::Error>) {
    if let Err(e) = loaded {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env file could not be loaded");
        }
    }
}

fn parse_timeout(raw: &str) -> Result<Option<Duration>, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Some(Duration::from_secs(secs))),
        _ => Err(ConfigError::Parse(format!(
            "invalid {REQUEST_TIMEOUT_VAR} '{raw}' (expected a positive number of seconds)"
        ))),
    }
}


#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
