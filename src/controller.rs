//! Lead submission state machine.
//!
//! DESIGN
//! ======
//! `LeadController::apply` is a pure transition function over
//! (`LeadFields`, `SubmissionStatus`). It performs no I/O; when a submit
//! passes validation it switches to `Submitting` and returns
//! `Effect::Dispatch` with a copy of the fields. The driver runs the request
//! and feeds the outcome back as `LeadEvent::SubmissionSettled`.
//!
//! Because `Submitting` is entered inside the same call that emits the
//! dispatch, a second `SubmitRequested` can never observe a stale status and
//! start another request.

use tracing::{debug, info, warn};

use crate::client::{Ack, NetworkError};
use crate::fields::{FieldKey, LeadFields, ValidationError, validate};
use crate::status::{StatusTone, SubmissionStatus};

const SUBMIT_LABEL: &str = "Get Expert Advice";
const SUBMITTING_LABEL: &str = "Submitting...";

// =============================================================================
// EVENTS & EFFECTS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadEvent {
    /// One input changed.
    FieldEdited { key: FieldKey, value: String },
    /// The form was submitted.
    SubmitRequested,
    /// The in-flight request finished.
    SubmissionSettled(Result<Ack, NetworkError>),
}

/// Work the driver must perform after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send these fields through the submission client, exactly once.
    Dispatch(LeadFields),
}

// =============================================================================
// CONTROLLER
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct LeadController {
    fields: LeadFields,
    status: SubmissionStatus,
}

impl LeadController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fields(&self) -> &LeadFields {
        &self.fields
    }

    #[must_use]
    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    #[must_use]
    pub fn view(&self) -> LeadFormView {
        LeadFormView { fields: self.fields.clone(), status: self.status.clone() }
    }

    /// Apply one event and return the effect the driver must run, if any.
    pub fn apply(&mut self, event: LeadEvent) -> Option<Effect> {
        match event {
            LeadEvent::FieldEdited { key, value } => {
                debug!(field = %key, len = value.len(), status = self.status.kind(), "lead field edited");
                self.fields.set_field(key, value);
                None
            }
            LeadEvent::SubmitRequested => self.request_submit(),
            LeadEvent::SubmissionSettled(outcome) => {
                self.settle(outcome);
                None
            }
        }
    }

    fn request_submit(&mut self) -> Option<Effect> {
        if self.status.is_submitting() {
            debug!("submission already in flight; dropping duplicate submit");
            return None;
        }
        if let Err(ValidationError::Incomplete { missing }) = validate(&self.fields) {
            let missing: Vec<&str> = missing.iter().map(|key| key.as_str()).collect();
            warn!(?missing, "lead form incomplete");
            self.status = SubmissionStatus::incomplete();
            return None;
        }
        info!("dispatching lead submission");
        self.status = SubmissionStatus::Submitting;
        Some(Effect::Dispatch(self.fields.clone()))
    }

    fn settle(&mut self, outcome: Result<Ack, NetworkError>) {
        if !self.status.is_submitting() {
            warn!(status = self.status.kind(), "ignoring settlement with no submission in flight");
            return;
        }
        match outcome {
            Ok(ack) => {
                info!(status = ack.status, "lead submission succeeded");
                self.fields.clear();
                self.status = SubmissionStatus::received();
            }
            Err(e) => {
                warn!(error = %e, "lead submission failed");
                self.status = SubmissionStatus::failed();
            }
        }
    }
}

// =============================================================================
// FORM VIEW
// =============================================================================

/// Snapshot of the form for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFormView {
    pub fields: LeadFields,
    pub status: SubmissionStatus,
}

impl LeadFormView {
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.status.is_submitting()
    }

    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.status.is_submitting() { SUBMITTING_LABEL } else { SUBMIT_LABEL }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.status.message()
    }

    #[must_use]
    pub fn tone(&self) -> Option<StatusTone> {
        self.status.tone()
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
