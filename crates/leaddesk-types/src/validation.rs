//! Payload validation

use serde::Serialize;
use thiserror::Error;

/// Every problem found in one payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[error("{}", .0.join("; "))]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<String>);

impl ValidationErrors {
    pub fn single(message: impl Into<String>) -> Self {
        Self(vec![message.into()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

/// Payloads checked before they are handed to storage
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Collects field errors for a single payload.
pub(crate) struct Validator {
    errors: Vec<String>,
}

impl Validator {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn not_blank(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.errors.push(format!("{} is required", field));
        }
    }

    pub(crate) fn email(&mut self, field: &str, value: &str) {
        let value = value.trim();
        let valid = match value.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        };
        if !valid {
            self.errors.push(format!("{} must be a valid email address", field));
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}
