//! Submission status shown beneath the lead form.

pub const INCOMPLETE_MESSAGE: &str = "Please complete all fields to consult our team.";
pub const SUCCESS_MESSAGE: &str = "Request received. Our consultants will call you shortly.";
pub const FAILURE_MESSAGE: &str = "We could not submit your request. Please retry.";

/// Outcome of the most recent submit attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Error {
        message: String,
    },
    /// A request is in flight. Further submits are dropped.
    Submitting,
    Success {
        message: String,
    },
}

/// Visual tone of the inline status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
}

impl SubmissionStatus {
    #[must_use]
    pub fn incomplete() -> Self {
        Self::Error { message: INCOMPLETE_MESSAGE.to_owned() }
    }

    #[must_use]
    pub fn failed() -> Self {
        Self::Error { message: FAILURE_MESSAGE.to_owned() }
    }

    #[must_use]
    pub fn received() -> Self {
        Self::Success { message: SUCCESS_MESSAGE.to_owned() }
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// Inline message, if the status carries one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Error { message } | Self::Success { message } => Some(message),
            Self::Idle | Self::Submitting => None,
        }
    }

    #[must_use]
    pub fn tone(&self) -> Option<StatusTone> {
        match self {
            Self::Error { .. } => Some(StatusTone::Error),
            Self::Success { .. } => Some(StatusTone::Success),
            Self::Idle | Self::Submitting => None,
        }
    }

    /// Short label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Error { .. } => "error",
            Self::Submitting => "submitting",
            Self::Success { .. } => "success",
        }
    }
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
