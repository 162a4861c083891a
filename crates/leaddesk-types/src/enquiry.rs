//! Enquiry form types

use crate::validation::{Validate, ValidationErrors, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Service card linking to an external Google Form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnquiryForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub image: String,
    pub google_form_url: String,
    pub features: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl EnquiryForm {
    pub fn apply(&mut self, update: UpdateEnquiryForm) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(icon) = update.icon {
            self.icon = icon;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
        if let Some(url) = update.google_form_url {
            self.google_form_url = url;
        }
        if let Some(features) = update.features {
            self.features = features;
        }
        if let Some(is_active) = update.is_active {
            self.is_active = is_active;
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEnquiryForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub image: String,
    pub google_form_url: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Validate for NewEnquiryForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("title", &self.title);
        v.not_blank("description", &self.description);
        v.not_blank("googleFormUrl", &self.google_form_url);
        v.finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateEnquiryForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub image: Option<String>,
    pub google_form_url: Option<String>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl Validate for UpdateEnquiryForm {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut v = Validator::new();
        if let Some(title) = &self.title {
            v.not_blank("title", title);
        }
        if let Some(description) = &self.description {
            v.not_blank("description", description);
        }
        if let Some(url) = &self.google_form_url {
            v.not_blank("googleFormUrl", url);
        }
        v.finish()
    }
}
