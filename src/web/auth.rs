//! Login, signup, and logout handlers.
//!
//! Invalid credentials and signup problems re-render the form with a message;
//! nothing in the failure path discloses which field was wrong or whether a
//! username exists.

use axum::Form;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde_json::json;

use crate::domain::{AppError, LoginForm, NewUser, SignupForm};
use crate::state::AppState;
use crate::views;
use crate::web::session::SessionContext;

pub async fn login_form(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<Response, AppError> {
    let user = session.current_user(&state.db.user_repo()).await?;
    render_login(&json!(user), None)
}

pub async fn login_submit(
    State(state): State<AppState>,
    session: SessionContext,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    match state
        .db
        .user_repo()
        .verify_credentials(&form.username, &form.password)?
    {
        Some(user) => {
            session.set_user(user.id).await?;
            log::info!("User '{}' logged in", user.username);
            Ok(Redirect::to("/").into_response())
        }
        None => {
            log::warn!("Rejected login attempt for username '{}'", form.username);
            render_login(&json!(null), Some("Invalid username or password"))
        }
    }
}

pub async fn signup_form(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<Response, AppError> {
    let user = session.current_user(&state.db.user_repo()).await?;
    render_signup(&json!(user), None)
}

pub async fn signup_submit(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, AppError> {
    let input = match NewUser::parse(form) {
        Ok(input) => input,
        Err(AppError::Validation(msg)) => return render_signup(&json!(null), Some(&msg)),
        Err(e) => return Err(e),
    };

    // No existence pre-check: the store's uniqueness constraint is the
    // source of truth for duplicate usernames.
    match state.db.user_repo().create(&input) {
        Ok(_) => {
            log::info!("User '{}' signed up", input.username);
            Ok(Redirect::to("/login").into_response())
        }
        Err(AppError::Constraint(_)) => render_signup(&json!(null), Some("Username already exists")),
        Err(AppError::Validation(msg)) => render_signup(&json!(null), Some(&msg)),
        Err(e) => Err(e),
    }
}

pub async fn logout(session: SessionContext) -> Result<Response, AppError> {
    session.destroy().await?;
    Ok(Redirect::to("/").into_response())
}

fn render_login(user: &serde_json::Value, error: Option<&str>) -> Result<Response, AppError> {
    let html = views::render(
        "login",
        &json!({"title": "Log in", "user": user, "error": error}),
    )?;
    Ok(Html(html).into_response())
}

fn render_signup(user: &serde_json::Value, error: Option<&str>) -> Result<Response, AppError> {
    let html = views::render(
        "signup",
        &json!({"title": "Sign up", "user": user, "error": error}),
    )?;
    Ok(Html(html).into_response())
}
