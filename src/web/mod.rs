//! HTTP surface: router, handlers, session capability, and error mapping.

pub mod auth;
pub mod contacts;
pub mod error;
pub mod session;

use axum::Router;
use axum::routing::{get, post};
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::state::AppState;

/// Build the application router with the cookie-session layer applied.
///
/// The literal `/create` segment and the `/{id}/edit`, `/{id}/delete`
/// patterns coexist with the generic `/{id}` route; axum gives literal
/// segments precedence, so numeric-looking paths never shadow them.
pub fn router(state: AppState) -> Router {
    let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);

    Router::new()
        .route("/", get(contacts::index))
        .route("/login", get(auth::login_form).post(auth::login_submit))
        .route("/signup", get(auth::signup_form).post(auth::signup_submit))
        .route("/logout", post(auth::logout))
        .route(
            "/create",
            get(contacts::create_form).post(contacts::create_submit),
        )
        .route("/{id}", get(contacts::view_contact))
        .route(
            "/{id}/edit",
            get(contacts::edit_form).post(contacts::edit_submit),
        )
        .route(
            "/{id}/delete",
            get(contacts::delete_form).post(contacts::delete_submit),
        )
        .layer(session_layer)
        .with_state(state)
}
