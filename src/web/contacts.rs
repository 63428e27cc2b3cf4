//! Contact list, detail, and CRUD form handlers.
//!
//! Reads are open to anonymous sessions; every mutating route (form render
//! and submit alike) requires a logged-in user and redirects to the login
//! page otherwise.

use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde_json::{Value, json};

use crate::domain::{AppError, ContactForm, ContactId, ContactInput};
use crate::state::AppState;
use crate::views;
use crate::web::session::SessionContext;

pub async fn index(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<Response, AppError> {
    let user = session.current_user(&state.db.user_repo()).await?;
    let contacts = state.db.contact_repo().list_all()?;

    let html = views::render(
        "index",
        &json!({"title": "Contacts", "user": user, "contacts": contacts}),
    )?;
    Ok(Html(html).into_response())
}

pub async fn view_contact(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let contact = state
        .db
        .contact_repo()
        .find_by_id(id)?
        .ok_or(AppError::NotFound)?;
    let user = session.current_user(&state.db.user_repo()).await?;

    let title = format!("{} {}", contact.first_name, contact.last_name);
    let html = views::render(
        "contact_detail",
        &json!({"title": title, "user": user, "contact": contact}),
    )?;
    Ok(Html(html).into_response())
}

pub async fn create_form(
    State(state): State<AppState>,
    session: SessionContext,
) -> Result<Response, AppError> {
    let Some(user) = session.current_user(&state.db.user_repo()).await? else {
        return Ok(Redirect::to("/login").into_response());
    };
    render_form(&json!(user), "New contact", "/create", &blank_contact(), None)
}

pub async fn create_submit(
    State(state): State<AppState>,
    session: SessionContext,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let Some(user) = session.current_user(&state.db.user_repo()).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let entered = form_values(&form);
    let input = match ContactInput::parse(form) {
        Ok(input) => input,
        Err(AppError::Validation(msg)) => {
            return render_form(&json!(user), "New contact", "/create", &entered, Some(&msg));
        }
        Err(e) => return Err(e),
    };

    let id = state.db.contact_repo().create(&input)?;
    log::info!("Created contact {id}");
    Ok(Redirect::to("/").into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(user) = session.current_user(&state.db.user_repo()).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let id = parse_id(&id)?;
    let contact = state
        .db
        .contact_repo()
        .find_by_id(id)?
        .ok_or(AppError::NotFound)?;

    render_form(
        &json!(user),
        "Edit contact",
        &format!("/{id}/edit"),
        &json!(contact),
        None,
    )
}

pub async fn edit_submit(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Response, AppError> {
    let Some(user) = session.current_user(&state.db.user_repo()).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let id = parse_id(&id)?;
    let entered = form_values(&form);
    let input = match ContactInput::parse(form) {
        Ok(input) => input,
        Err(AppError::Validation(msg)) => {
            return render_form(
                &json!(user),
                "Edit contact",
                &format!("/{id}/edit"),
                &entered,
                Some(&msg),
            );
        }
        Err(e) => return Err(e),
    };

    // A vanished id makes this a no-op; the redirect target then 404s.
    state.db.contact_repo().update(id, &input)?;
    Ok(Redirect::to(&format!("/{id}")).into_response())
}

pub async fn delete_form(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Some(user) = session.current_user(&state.db.user_repo()).await? else {
        return Ok(Redirect::to("/login").into_response());
    };

    let id = parse_id(&id)?;
    let contact = state
        .db
        .contact_repo()
        .find_by_id(id)?
        .ok_or(AppError::NotFound)?;

    let html = views::render(
        "contact_delete",
        &json!({"title": "Delete contact", "user": user, "contact": contact}),
    )?;
    Ok(Html(html).into_response())
}

pub async fn delete_submit(
    State(state): State<AppState>,
    session: SessionContext,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    if session.current_user_id().await?.is_none() {
        return Ok(Redirect::to("/login").into_response());
    }

    let id = parse_id(&id)?;
    let affected = state.db.contact_repo().delete(id)?;
    if affected > 0 {
        log::info!("Deleted contact {id}");
    }
    Ok(Redirect::to("/").into_response())
}

/// A non-numeric or out-of-range id is not-found, not an error.
fn parse_id(raw: &str) -> Result<ContactId, AppError> {
    raw.parse::<ContactId>().map_err(|_| AppError::NotFound)
}

fn render_form(
    user: &Value,
    title: &str,
    action: &str,
    contact: &Value,
    error: Option<&str>,
) -> Result<Response, AppError> {
    let html = views::render(
        "contact_form",
        &json!({
            "title": title,
            "user": user,
            "action": action,
            "contact": contact,
            "error": error,
        }),
    )?;
    Ok(Html(html).into_response())
}

fn blank_contact() -> Value {
    json!({
        "first_name": "",
        "last_name": "",
        "phone_number": "",
        "email_address": "",
        "street": "",
        "city": "",
        "state": "",
        "zip": "",
        "country": "",
        "contact_by_email": false,
        "contact_by_phone": false,
    })
}

/// Echo submitted values back into the form when validation fails.
fn form_values(form: &ContactForm) -> Value {
    json!({
        "first_name": form.first_name.as_deref().unwrap_or(""),
        "last_name": form.last_name.as_deref().unwrap_or(""),
        "phone_number": form.phone_number.as_deref().unwrap_or(""),
        "email_address": form.email_address.as_deref().unwrap_or(""),
        "street": form.street.as_deref().unwrap_or(""),
        "city": form.city.as_deref().unwrap_or(""),
        "state": form.state.as_deref().unwrap_or(""),
        "zip": form.zip.as_deref().unwrap_or(""),
        "country": form.country.as_deref().unwrap_or(""),
        "contact_by_email": form.contact_by_email.is_some(),
        "contact_by_phone": form.contact_by_phone.is_some(),
    })
}
