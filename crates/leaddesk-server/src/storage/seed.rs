//! Records present in every freshly constructed store

use chrono::Utc;
use leaddesk_types::{EnquiryForm, User};
use uuid::Uuid;

pub(crate) fn admin_user() -> User {
    let now = Utc::now();
    User {
        id: Uuid::new_v4().to_string(),
        username: "36xfinance".to_string(),
        password: "36xfinance".to_string(),
        email: "admin@36xfinance.com".to_string(),
        role: "admin".to_string(),
        is_active: true,
        permissions: ["blogs", "videos", "contacts", "enquiries", "users", "activities"]
            .iter()
            .map(|p| p.to_string())
            .collect(),
        last_login: None,
        login_count: "0".to_string(),
        created_at: now,
        updated_at: now,
    }
}

pub(crate) fn enquiry_forms() -> Vec<EnquiryForm> {
    let now = Utc::now();
    vec![
        EnquiryForm {
            id: Uuid::new_v4().to_string(),
            title: "Business Registration".to_string(),
            description: "Complete business registration and incorporation services with expert guidance throughout the process.".to_string(),
            icon: "💼".to_string(),
            image: "https://images.unsplash.com/photo-1560472354-b33ff0c44a43?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300".to_string(),
            google_form_url: "https://forms.gle/eBrRUfpQHTu4A3Jk9".to_string(),
            features: vec![
                "Company Registration".to_string(),
                "Tax ID Application".to_string(),
                "Legal Documentation".to_string(),
            ],
            is_active: true,
            created_at: now,
        },
        EnquiryForm {
            id: Uuid::new_v4().to_string(),
            title: "Tax Consultation".to_string(),
            description: "Personalized tax planning and consultation services to optimize your tax strategy and compliance.".to_string(),
            icon: "📊".to_string(),
            image: "https://images.unsplash.com/photo-1554224155-8d04cb21cd6c?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=300".to_string(),
            google_form_url: "https://forms.gle/uepyC8iEHpUJcwsX6".to_string(),
            features: vec![
                "Tax Planning Strategy".to_string(),
                "Compliance Review".to_string(),
                "Deduction Optimization".to_string(),
            ],
            is_active: true,
            created_at: now,
        },
    ]
}
