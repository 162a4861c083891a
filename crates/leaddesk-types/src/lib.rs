//! LeadDesk Types - plain record and payload definitions
//!
//! This crate has no async runtime dependencies. Everything here is data:
//! the stored entities, the insert/update payloads accepted by the storage
//! port, and the validation applied to payloads before they reach it.

pub mod activity;
pub mod blog;
pub mod contact;
pub mod enquiry;
pub mod user;
pub mod validation;
pub mod video;

pub use activity::*;
pub use blog::*;
pub use contact::*;
pub use enquiry::*;
pub use user::*;
pub use validation::{Validate, ValidationErrors};
pub use video::*;
