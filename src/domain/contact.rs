//! Contact record and its validated form input.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Unique identifier for a contact, assigned by the store.
pub type ContactId = i64;

/// A contact as stored in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identifier; immutable for the lifetime of the row.
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    /// Whether the contact agreed to be reached by email. Stored as 0/1.
    pub contact_by_email: bool,
    /// Whether the contact agreed to be reached by phone. Stored as 0/1.
    pub contact_by_phone: bool,
}

/// Raw contact form payload as submitted by the browser.
///
/// Checkbox fields are absent from the payload when unchecked, so every
/// field is optional here; `ContactInput::parse` is the validation step.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub contact_by_email: Option<String>,
    pub contact_by_phone: Option<String>,
}

/// Validated input for creating or fully overwriting a contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInput {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub contact_by_email: bool,
    pub contact_by_phone: bool,
}

impl ContactInput {
    /// Validate a raw form payload.
    ///
    /// First and last name must be non-empty after trimming. Optional text
    /// fields normalize to `None` when empty. A checkbox counts as set when
    /// the field is present at all, whatever its value.
    pub fn parse(form: ContactForm) -> Result<Self, AppError> {
        let first_name = required(form.first_name, "First name")?;
        let last_name = required(form.last_name, "Last name")?;

        Ok(Self {
            first_name,
            last_name,
            phone_number: optional(form.phone_number),
            email_address: optional(form.email_address),
            street: optional(form.street),
            city: optional(form.city),
            state: optional(form.state),
            zip: optional(form.zip),
            country: optional(form.country),
            contact_by_email: form.contact_by_email.is_some(),
            contact_by_phone: form.contact_by_phone.is_some(),
        })
    }
}

fn required(value: Option<String>, label: &str) -> Result<String, AppError> {
    let trimmed = value.as_deref().unwrap_or_default().trim().to_string();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{label} is required")));
    }
    Ok(trimmed)
}

fn optional(value: Option<String>) -> Option<String> {
    let trimmed = value?.trim().to_string();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first: &str, last: &str) -> ContactForm {
        ContactForm {
            first_name: Some(first.to_string()),
            last_name: Some(last.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn parse_requires_names() {
        assert!(matches!(
            ContactInput::parse(form("", "Lovelace")),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            ContactInput::parse(form("Ada", "   ")),
            Err(AppError::Validation(_))
        ));
        assert!(ContactInput::parse(form("Ada", "Lovelace")).is_ok());
    }

    #[test]
    fn parse_trims_and_normalizes_optionals() {
        let input = ContactInput::parse(ContactForm {
            phone_number: Some("  555-0100 ".into()),
            email_address: Some("   ".into()),
            ..form(" Ada ", " Lovelace ")
        })
        .unwrap();

        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.last_name, "Lovelace");
        assert_eq!(input.phone_number.as_deref(), Some("555-0100"));
        assert_eq!(input.email_address, None);
    }

    #[test]
    fn parse_coerces_checkboxes() {
        let input = ContactInput::parse(ContactForm {
            contact_by_email: Some("on".into()),
            contact_by_phone: None,
            ..form("Ada", "Lovelace")
        })
        .unwrap();

        assert!(input.contact_by_email);
        assert!(!input.contact_by_phone);
    }
}
