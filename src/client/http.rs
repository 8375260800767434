//! HTTP submission client for `POST {base_url}/api/leads`.

use tracing::{info, warn};

use super::{Ack, LeadSubmitter, NetworkError};
use crate::config::{ConfigError, LeadsConfig};
use crate::fields::LeadFields;

pub struct HttpLeadClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpLeadClient {
    /// Build a client for the configured backend. The endpoint URL is fixed
    /// at construction.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &LeadsConfig) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ConfigError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: config.leads_endpoint() })
    }

    /// Build a client from environment variables. See [`LeadsConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = LeadsConfig::from_env()?;
        Self::new(&config)
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl LeadSubmitter for HttpLeadClient {
    async fn submit(&self, fields: &LeadFields) -> Result<Ack, NetworkError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(fields)
            .send()
            .await
            .map_err(|e| {
                warn!(endpoint = %self.endpoint, error = %e, "lead request failed");
                NetworkError::new(e.to_string())
            })?;

        let status = response.status();
        // Drain the body so a connection dropped mid-response counts as a failure.
        response.bytes().await.map_err(|e| {
            warn!(endpoint = %self.endpoint, error = %e, "lead response unreadable");
            NetworkError::new(e.to_string())
        })?;

        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = status.as_u16(), "lead rejected by backend");
            return Err(NetworkError::new(format!("status {}", status.as_u16())));
        }

        info!(endpoint = %self.endpoint, status = status.as_u16(), "lead accepted");
        Ok(Ack { status: status.as_u16() })
    }
}

#[cfg(test)]
#[path = "http_test.rs"]
mod tests;
