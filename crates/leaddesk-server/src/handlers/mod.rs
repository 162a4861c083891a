//! HTTP handlers

pub mod activities;
pub mod auth;
pub mod blogs;
pub mod contacts;
pub mod enquiry_forms;
pub mod export;
pub mod health;
pub mod login_history;
pub mod users;
pub mod videos;

pub use health::{health, not_found};

use serde::{Deserialize, Serialize};

/// `?search=` on list endpoints
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

impl SearchParams {
    /// The query to search for, if one was actually given.
    pub fn query(&self) -> Option<&str> {
        self.search.as_deref().filter(|q| !q.is_empty())
    }
}

/// Plain `{"message": ...}` body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
