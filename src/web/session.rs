//! Session state as an explicit capability.
//!
//! Handlers receive a `SessionContext` extractor instead of reaching into
//! ambient session storage. The context exposes exactly the three operations
//! the authentication flow needs.

use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use tower_sessions::Session;

use crate::domain::{AppError, User, UserId};
use crate::infra::db::UserRepository;

const USER_ID_KEY: &str = "user_id";

/// Per-request handle on the browser session.
#[derive(Clone)]
pub struct SessionContext {
    session: Session,
}

impl SessionContext {
    /// The authenticated user's id, or `None` for an anonymous session.
    pub async fn current_user_id(&self) -> Result<Option<UserId>, AppError> {
        self.session
            .get::<UserId>(USER_ID_KEY)
            .await
            .map_err(session_err)
    }

    /// Tag the session with the authenticated user.
    pub async fn set_user(&self, id: UserId) -> Result<(), AppError> {
        self.session
            .insert(USER_ID_KEY, id)
            .await
            .map_err(session_err)
    }

    /// Destroy the session entirely, id included, not merely clear it.
    pub async fn destroy(&self) -> Result<(), AppError> {
        self.session.flush().await.map_err(session_err)
    }

    /// Load the full user record for the session, if authenticated.
    pub async fn current_user(&self, users: &UserRepository) -> Result<Option<User>, AppError> {
        match self.current_user_id().await? {
            Some(id) => users.find_by_id(id),
            None => Ok(None),
        }
    }
}

fn session_err(e: tower_sessions::session::Error) -> AppError {
    AppError::Internal(e.into())
}

impl<S> FromRequestParts<S> for SessionContext
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        Ok(Self { session })
    }
}
