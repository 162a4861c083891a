//! Error types for LeadDesk

use leaddesk_types::ValidationErrors;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DeskError>;

/// Failures outside the storage contract. Lookups that find nothing are
/// reported as `None`/`false` by [`crate::Storage`], never through this type.
#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
