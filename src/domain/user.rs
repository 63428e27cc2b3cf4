//! User record and signup input validation.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Unique identifier for a user, assigned by the store.
pub type UserId = i64;

/// A registered user.
///
/// The password is only ever held as an irreversible bcrypt hash; the hash is
/// excluded from serialization so it can never leak into a rendered view.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    /// Case-sensitively unique across all users.
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Validated input for creating a user. The password is still plaintext here;
/// hashing happens in the repository, immediately before the INSERT.
#[derive(Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub password: String,
}

// Manual Debug so a plaintext password can't end up in a log line.
impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Raw signup form payload.
#[derive(Debug, Default, Deserialize)]
pub struct SignupForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Raw login form payload. No parse step beyond field presence; empty
/// credentials simply fail verification.
#[derive(Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl NewUser {
    /// Validate a signup form: username and password must be non-empty and
    /// the confirmation must match. Passwords are deliberately not trimmed.
    pub fn parse(form: SignupForm) -> Result<Self, AppError> {
        let username = form.username.as_deref().unwrap_or_default().trim().to_string();
        if username.is_empty() {
            return Err(AppError::Validation("Username is required".into()));
        }

        let password = form.password.unwrap_or_default();
        if password.is_empty() {
            return Err(AppError::Validation("Password is required".into()));
        }
        if password != form.confirm_password.unwrap_or_default() {
            return Err(AppError::Validation("Passwords do not match".into()));
        }

        Ok(Self {
            first_name: form.first_name.unwrap_or_default().trim().to_string(),
            last_name: form.last_name.unwrap_or_default().trim().to_string(),
            username,
            password,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> SignupForm {
        SignupForm {
            first_name: Some("Bob".into()),
            last_name: Some("Jones".into()),
            username: Some("bob".into()),
            password: Some("p1".into()),
            confirm_password: Some("p1".into()),
        }
    }

    #[test]
    fn parse_accepts_matching_passwords() {
        let user = NewUser::parse(form()).unwrap();
        assert_eq!(user.username, "bob");
        assert_eq!(user.password, "p1");
    }

    #[test]
    fn parse_rejects_mismatched_confirmation() {
        let err = NewUser::parse(SignupForm {
            confirm_password: Some("p2".into()),
            ..form()
        })
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn parse_rejects_empty_username_and_password() {
        assert!(NewUser::parse(SignupForm { username: Some("  ".into()), ..form() }).is_err());
        assert!(NewUser::parse(SignupForm { password: None, ..form() }).is_err());
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", NewUser::parse(form()).unwrap());
        assert!(!rendered.contains("p1"));
    }
}
