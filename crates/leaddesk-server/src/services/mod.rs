//! Business logic services

pub mod auth;
pub mod export;

pub use auth::AuthService;
