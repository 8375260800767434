//! Submission client — delivers a lead to the backend.
//!
//! DESIGN
//! ======
//! `LeadSubmitter` is the seam between the controller runtime and the
//! network. `HttpLeadClient` is the production implementation; tests drive
//! the runtime with in-memory doubles.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport error, non-2xx status, unreadable response body,
//! timeout when one is configured) collapses into a single `NetworkError`.
//! The detail string exists for logs only; callers never branch on it.

pub mod http;

pub use http::HttpLeadClient;

use crate::fields::LeadFields;

/// Acknowledgment of an accepted lead. The response body is not inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ack {
    pub status: u16,
}

/// The lead could not be delivered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lead submission failed: {detail}")]
pub struct NetworkError {
    detail: String,
}

impl NetworkError {
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into() }
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Delivers one lead per call. Implementations must not retry.
#[async_trait::async_trait]
pub trait LeadSubmitter: Send + Sync {
    /// Send the three fields to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError`] for any failure to get a 2xx acknowledgment.
    async fn submit(&self, fields: &LeadFields) -> Result<Ack, NetworkError>;
}
