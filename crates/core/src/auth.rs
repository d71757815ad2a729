//! The console's single admin credential.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@turfbooking.com";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Configured admin login.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
        }
    }
}

impl AdminCredentials {
    /// Check a login attempt. The email comparison ignores case and
    /// surrounding whitespace; the password must match exactly.
    pub fn verify(&self, email: &str, password: &str) -> Result<(), CoreError> {
        let email_ok = email.trim().eq_ignore_ascii_case(self.email.trim());
        if email_ok && password == self.password {
            Ok(())
        } else {
            Err(CoreError::Unauthorized("Invalid credentials".into()))
        }
    }
}

/// Login form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "required"))]
    pub email: String,
    #[validate(length(min = 1, message = "required"))]
    pub password: String,
    /// Bearer token to forward to the marketplace API.
    pub auth_token: Option<String>,
}
