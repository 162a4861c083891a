//! Blog types

use crate::validation::{Validate, ValidationErrors, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    pub fn apply(&mut self, update: UpdateBlog) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
    }

    /// Case-insensitive substring match over title, content and category.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlog {
    pub title: String,
    pub content: String,
    pub category: String,
}

impl Validate for NewBlog {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("title", &self.title);
        v.not_blank("content", &self.content);
        v.not_blank("category", &self.category);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateBlog {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
}

impl Validate for UpdateBlog {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(title) = &self.title {
            v.not_blank("title", title);
        }
        if let Some(content) = &self.content {
            v.not_blank("content", content);
        }
        if let Some(category) = &self.category {
            v.not_blank("category", category);
        }
        v.finish()
    }
}
