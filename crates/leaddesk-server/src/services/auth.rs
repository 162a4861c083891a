//! Authentication service
//!
//! Credentials are compared as stored; there are no tokens or sessions.
//! A successful login is tracked through [`Storage::update_user_login`].

use leaddesk_core::Storage;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

pub struct AuthService {
    storage: Arc<dyn Storage>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is disabled")]
    AccountDisabled,
}

/// Public view of the account that just logged in
#[derive(Debug, Clone, Serialize)]
pub struct LoginUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn login(
        &self,
        username: &str,
        password: &str,
        ip_address: Option<&str>,
        user_agent: Option<&str>,
    ) -> Result<LoginUser, AuthError> {
        let user = self
            .storage
            .get_user_by_username(username)
            .await
            .ok_or(AuthError::InvalidCredentials)?;

        // Checked before the password, so a disabled account is reported as such
        if !user.is_active {
            warn!("Login refused for disabled account: {}", username);
            return Err(AuthError::AccountDisabled);
        }

        if user.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        self.storage
            .update_user_login(&user.id, ip_address, user_agent)
            .await;
        info!("Login successful for: {}", username);

        Ok(LoginUser {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            permissions: user.permissions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    fn service() -> (Arc<dyn Storage>, AuthService) {
        let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
        (storage.clone(), AuthService::new(storage))
    }

    #[tokio::test]
    async fn test_seeded_admin_can_log_in() {
        let (storage, auth) = service();

        let user = auth
            .login("36xfinance", "36xfinance", Some("10.0.0.1"), Some("test"))
            .await
            .unwrap();
        assert_eq!(user.role, "admin");

        let history = storage.get_all_login_history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].ip_address, "10.0.0.1");
        assert_eq!(
            storage.get_user(&user.id).await.unwrap().login_count,
            "1"
        );
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user() {
        let (storage, auth) = service();

        assert_eq!(
            auth.login("36xfinance", "nope", None, None).await.unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert_eq!(
            auth.login("ghost", "36xfinance", None, None).await.unwrap_err(),
            AuthError::InvalidCredentials
        );
        assert!(storage.get_all_login_history().await.is_empty());
    }

    #[tokio::test]
    async fn test_disabled_account_is_refused() {
        let (storage, auth) = service();
        let admin = storage.get_user_by_username("36xfinance").await.unwrap();
        storage.update_user_status(&admin.id, false).await;

        assert_eq!(
            auth.login("36xfinance", "36xfinance", None, None)
                .await
                .unwrap_err(),
            AuthError::AccountDisabled
        );
        assert!(storage.get_all_login_history().await.is_empty());
    }
}
