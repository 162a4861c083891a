//! User and login history types

use crate::validation::{Validate, ValidationErrors, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Admin panel account
///
/// `password` is kept as supplied and is never serialized back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
    pub permissions: Vec<String>,
    pub last_login: Option<DateTime<Utc>>,
    /// Integer count stored in its string form.
    pub login_count: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Shallow-merge the supplied fields. Timestamps are left to the caller.
    pub fn apply(&mut self, update: UpdateUser) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(password) = update.password {
            self.password = password;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(role) = update.role {
            self.role = role;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
        if let Some(permissions) = update.permissions {
            self.permissions = permissions;
        }
    }

    /// Parsed login count; anything unparsable counts as zero.
    pub fn login_count(&self) -> u64 {
        self.login_count.trim().parse().unwrap_or(0)
    }
}

fn default_role() -> String {
    "user".to_string()
}

fn default_true() -> bool {
    true
}

/// User creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("username", &self.username);
        v.not_blank("password", &self.password);
        v.email("email", &self.email);
        v.not_blank("role", &self.role);
        v.finish()
    }
}

/// Partial user update; absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
    pub permissions: Option<Vec<String>>,
}

impl Validate for UpdateUser {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(username) = &self.username {
            v.not_blank("username", username);
        }
        if let Some(password) = &self.password {
            v.not_blank("password", password);
        }
        if let Some(email) = &self.email {
            v.email("email", email);
        }
        if let Some(role) = &self.role {
            v.not_blank("role", role);
        }
        v.finish()
    }
}

/// One successful login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginHistory {
    pub id: String,
    /// Not kept in sync with the users collection.
    pub user_id: String,
    pub username: String,
    pub ip_address: String,
    pub user_agent: String,
    pub login_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLoginHistory {
    pub user_id: String,
    pub username: String,
    pub ip_address: String,
    pub user_agent: String,
}
