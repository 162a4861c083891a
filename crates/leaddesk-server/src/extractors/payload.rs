//! JSON body extractor that validates before the handler runs

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use leaddesk_types::{
    NewBlog, NewContact, NewEnquiryForm, NewUser, NewVideo, UpdateBlog, UpdateEnquiryForm,
    UpdateUser, UpdateVideo, Validate,
};
use serde::de::DeserializeOwned;

/// Request bodies accepted by the CRUD endpoints
pub trait Payload: DeserializeOwned + Validate + Send {
    /// Noun used in "Invalid <label> data".
    const LABEL: &'static str;
}

impl Payload for NewUser {
    const LABEL: &'static str = "user";
}

impl Payload for UpdateUser {
    const LABEL: &'static str = "user";
}

impl Payload for NewBlog {
    const LABEL: &'static str = "blog";
}

impl Payload for UpdateBlog {
    const LABEL: &'static str = "blog";
}

impl Payload for NewVideo {
    const LABEL: &'static str = "video";
}

impl Payload for UpdateVideo {
    const LABEL: &'static str = "video";
}

impl Payload for NewContact {
    const LABEL: &'static str = "contact";
}

impl Payload for NewEnquiryForm {
    const LABEL: &'static str = "form";
}

impl Payload for UpdateEnquiryForm {
    const LABEL: &'static str = "form";
}

/// Parsed and validated JSON body. Any failure becomes a 400 with the list
/// of problems found.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: Payload,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidData {
                entity: T::LABEL,
                errors: vec![rejection.body_text()],
            })?;

        value.validate().map_err(|errors| ApiError::InvalidData {
            entity: T::LABEL,
            errors: errors.0,
        })?;

        Ok(ValidJson(value))
    }
}
