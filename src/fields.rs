//! Field store and completeness validation for the lead form.
//!
//! DESIGN
//! ======
//! Validation is completeness only. Any non-empty string passes, including
//! whitespace, malformed emails and non-numeric phone numbers. Values are
//! stored verbatim: no trimming, no normalization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// =============================================================================
// FIELD KEY
// =============================================================================

/// Identifies one of the three lead form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Name,
    Email,
    Phone,
}

impl FieldKey {
    pub const ALL: [FieldKey; 3] = [FieldKey::Name, FieldKey::Email, FieldKey::Phone];

    /// Form input `name` attribute for this field.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when an input name does not match any lead field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown lead field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldKey {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

// =============================================================================
// FIELD STORE
// =============================================================================

/// Current values of the lead form. Serializes to the exact wire body
/// `{"name": ..., "email": ..., "phone": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl LeadFields {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        Self { name: name.into(), email: email.into(), phone: phone.into() }
    }

    #[must_use]
    pub fn get(&self, key: FieldKey) -> &str {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Phone => &self.phone,
        }
    }

    /// Overwrite exactly one field. The other two are untouched.
    pub fn set_field(&mut self, key: FieldKey, value: impl Into<String>) {
        let slot = match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Phone => &mut self.phone,
        };
        *slot = value.into();
    }

    /// Reset all three fields at once.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fields whose value is the empty string, in form order.
    #[must_use]
    pub fn missing(&self) -> Vec<FieldKey> {
        FieldKey::ALL
            .into_iter()
            .filter(|key| self.get(*key).is_empty())
            .collect()
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Client-side rejection of a submit attempt. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// At least one field is empty. `missing` is kept for logging.
    #[error("incomplete")]
    Incomplete { missing: Vec<FieldKey> },
}

/// Check that all three fields are non-empty.
///
/// # Errors
///
/// Returns [`ValidationError::Incomplete`] if any field is the empty string.
pub fn validate(fields: &LeadFields) -> Result<(), ValidationError> {
    let missing = fields.missing();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::Incomplete { missing })
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;
