//! # lead-capture
//!
//! Lead capture for the SSB Group consultancy landing page.
//!
//! The page itself is static markup. The only moving part is the contact
//! form: three fields (name, email, phone), a completeness check, one POST
//! to the backend leads endpoint, and an inline status message. This crate
//! holds that logic as a UI-independent state machine plus the async
//! runtime and HTTP client that drive it.

pub mod client;
pub mod config;
pub mod controller;
pub mod fields;
pub mod session;
pub mod status;

pub use client::{Ack, HttpLeadClient, LeadSubmitter, NetworkError};
pub use config::{ConfigError, LeadsConfig};
pub use controller::{Effect, LeadController, LeadEvent, LeadFormView};
pub use fields::{FieldKey, LeadFields, UnknownField, ValidationError, validate};
pub use session::{LeadSessionHandle, SessionClosed, spawn_lead_session};
pub use status::{StatusTone, SubmissionStatus};
