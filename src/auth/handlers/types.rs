/**
 * Authentication Handler Types
 *
 * Request and response bodies for registration and login. Required fields
 * are declared optional and checked by hand so a missing field yields a
 * 400 with a readable message rather than a deserialization rejection.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::PublicUser;
use crate::error::ApiError;

/// Registration request body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl RegisterRequest {
    /// Check required fields, returning `(name, email, password)`
    pub fn validate(self) -> Result<(Option<String>, String, String), ApiError> {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ApiError::validation("Email and password are required."))?;
        let password = self
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ApiError::validation("Email and password are required."))?;

        if !email.contains('@') {
            return Err(ApiError::validation("Invalid email format."));
        }

        Ok((self.name, email, password))
    }
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Check required fields, returning `(email, password)`
    pub fn validate(self) -> Result<(String, String), ApiError> {
        match (self.email, self.password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok((email, password))
            }
            _ => Err(ApiError::validation("Email and password are required.")),
        }
    }
}

/// Registration response: the public user projection
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Login response: user plus bearer token
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: PublicUser,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_requires_email_and_password() {
        let missing = RegisterRequest {
            name: None,
            email: None,
            password: Some("pw".into()),
        };
        assert!(missing.validate().is_err());

        let empty = RegisterRequest {
            name: None,
            email: Some("a@x.com".into()),
            password: Some("".into()),
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_register_rejects_bad_email() {
        let request = RegisterRequest {
            name: None,
            email: Some("not-an-email".into()),
            password: Some("pw1".into()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_name_is_optional() {
        let request = RegisterRequest {
            name: None,
            email: Some("a@x.com".into()),
            password: Some("pw1".into()),
        };
        let (name, email, password) = request.validate().unwrap();
        assert!(name.is_none());
        assert_eq!(email, "a@x.com");
        assert_eq!(password, "pw1");
    }

    #[test]
    fn test_login_requires_both_fields() {
        let request = LoginRequest {
            email: Some("a@x.com".into()),
            password: None,
        };
        assert!(request.validate().is_err());
    }
}
