//! LeadDesk Core Library
//!
//! Error type and the storage port shared by every LeadDesk component.

// Re-export pure types from leaddesk-types
pub use leaddesk_types::*;

pub mod error;
pub mod ports;

pub use error::{DeskError, Result};
pub use ports::Storage;
