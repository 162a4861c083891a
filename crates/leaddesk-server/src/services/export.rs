//! CSV export of contacts and enquiry forms
//!
//! Every field is wrapped in double quotes as-is. Embedded quotes and commas
//! are not escaped.

use chrono::{DateTime, SecondsFormat, Utc};
use leaddesk_types::{Contact, EnquiryForm};

pub const CONTACTS_HEADER: &str = "First Name,Last Name,Email,Phone,Subject,Message,Date\n";
pub const ENQUIRIES_HEADER: &str =
    "Title,Description,Google Form URL,Features,Status,Created Date\n";

pub const CONTACTS_FILENAME: &str = "contacts.csv";
pub const ENQUIRIES_FILENAME: &str = "enquiry-forms.csv";

fn timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn quoted_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| format!("\"{}\"", field))
        .collect::<Vec<_>>()
        .join(",")
}

/// Header line followed by one row per record, rows joined by `\n`.
fn render<T>(header: &str, records: &[T], row: impl Fn(&T) -> String) -> String {
    let rows = records.iter().map(row).collect::<Vec<_>>().join("\n");
    format!("{}{}", header, rows)
}

pub fn contacts_csv(contacts: &[Contact]) -> String {
    render(CONTACTS_HEADER, contacts, |c| {
        quoted_row(&[
            c.first_name.as_str(),
            c.last_name.as_str(),
            c.email.as_str(),
            c.phone.as_deref().unwrap_or(""),
            c.subject.as_str(),
            c.message.as_str(),
            timestamp(&c.created_at).as_str(),
        ])
    })
}

pub fn enquiry_forms_csv(forms: &[EnquiryForm]) -> String {
    render(ENQUIRIES_HEADER, forms, |f| {
        quoted_row(&[
            f.title.as_str(),
            f.description.as_str(),
            f.google_form_url.as_str(),
            f.features.join("; ").as_str(),
            if f.is_active { "Active" } else { "Inactive" },
            timestamp(&f.created_at).as_str(),
        ])
    })
}
