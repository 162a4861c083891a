//! Video types

use crate::validation::{Validate, ValidationErrors, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video entry. Updates do not track a modification time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Video {
    pub fn apply(&mut self, update: UpdateVideo) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
    }

    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVideo {
    pub title: String,
    pub description: String,
}

impl Validate for NewVideo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("title", &self.title);
        v.not_blank("description", &self.description);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateVideo {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl Validate for UpdateVideo {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(title) = &self.title {
            v.not_blank("title", title);
        }
        if let Some(description) = &self.description {
            v.not_blank("description", description);
        }
        v.finish()
    }
}
