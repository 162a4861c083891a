//! CSV download handlers

use crate::services::export::{
    contacts_csv, enquiry_forms_csv, CONTACTS_FILENAME, ENQUIRIES_FILENAME,
};
use crate::AppState;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

fn csv_attachment(filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

pub async fn contacts(State(state): State<AppState>) -> Response {
    let contacts = state.storage.get_all_contacts().await;
    csv_attachment(CONTACTS_FILENAME, contacts_csv(&contacts))
}

pub async fn enquiries(State(state): State<AppState>) -> Response {
    let forms = state.storage.get_all_enquiry_forms().await;
    csv_attachment(ENQUIRIES_FILENAME, enquiry_forms_csv(&forms))
}
