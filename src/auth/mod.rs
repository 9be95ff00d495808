//! Credential checks performed before a login reaches the store.
//!
//! Students and guests are admitted once the login form rules pass. The admin
//! role additionally requires the configured admin credentials, compared in
//! constant time to mitigate timing attacks.

use subtle::ConstantTimeEq;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::validation::validate_credentials;
use crate::models::{Notification, UserRole};

/// Fixed admin credentials standing in for an identity provider.
#[derive(Debug, Clone)]
pub struct SessionManager {
    admin_username: String,
    admin_password: String,
}

impl SessionManager {
    pub fn new(admin_username: impl Into<String>, admin_password: impl Into<String>) -> Self {
        Self {
            admin_username: admin_username.into(),
            admin_password: admin_password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.admin_username, &config.admin_password)
    }

    /// Decide whether `username`/`password` may log in with `role`.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
        role: UserRole,
    ) -> Result<(), AppError> {
        validate_credentials(username, password)?;

        if role == UserRole::Admin {
            // Both comparisons always run.
            let username_ok = constant_time_compare(username, &self.admin_username);
            let password_ok = constant_time_compare(password, &self.admin_password);
            if !(username_ok & password_ok) {
                tracing::warn!(username, "Rejected admin login");
                return Err(AppError::Unauthorized(
                    "Please check your username and password.".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Notification shown when a login is rejected.
pub fn rejection_notification() -> Notification {
    Notification::new("Invalid Credentials")
        .with_description("Please check your username and password.")
        .destructive()
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}
