//! Contact message types

use crate::validation::{Validate, ValidationErrors, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message submitted through the public contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl Validate for NewContact {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("firstName", &self.first_name);
        v.not_blank("lastName", &self.last_name);
        v.email("email", &self.email);
        v.not_blank("subject", &self.subject);
        v.not_blank("message", &self.message);
        v.finish()
    }
}
