//! Activity feed types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of record an activity refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    User,
    Blog,
    Video,
    Contact,
    Enquiry,
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityType::User => write!(f, "user"),
            ActivityType::Blog => write!(f, "blog"),
            ActivityType::Video => write!(f, "video"),
            ActivityType::Contact => write!(f, "contact"),
            ActivityType::Enquiry => write!(f, "enquiry"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityAction {
    Created,
    Updated,
    Deleted,
}

impl std::fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityAction::Created => write!(f, "created"),
            ActivityAction::Updated => write!(f, "updated"),
            ActivityAction::Deleted => write!(f, "deleted"),
        }
    }
}

/// Audit-trail entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub action: ActivityAction,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub action: ActivityAction,
    pub title: String,
}

impl NewActivity {
    pub fn new(kind: ActivityType, action: ActivityAction, title: impl Into<String>) -> Self {
        Self {
            kind,
            action,
            title: title.into(),
        }
    }
}
