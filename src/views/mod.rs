//! Server-rendered HTML views.
//!
//! Templates are compiled into the binary and registered once in a shared
//! Handlebars registry. Strict mode is on, so a context missing a referenced
//! variable fails the render instead of silently emitting nothing.

use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::Value;

static TEMPLATES: Lazy<Handlebars<'static>> = Lazy::new(|| {
    let mut hb = Handlebars::new();
    hb.set_strict_mode(true);

    hb.register_partial("layout", include_str!("layout.hbs"))
        .expect("layout partial failed to parse");

    for (name, template) in [
        ("index", include_str!("index.hbs")),
        ("contact_detail", include_str!("contact_detail.hbs")),
        ("contact_form", include_str!("contact_form.hbs")),
        ("contact_delete", include_str!("contact_delete.hbs")),
        ("login", include_str!("login.hbs")),
        ("signup", include_str!("signup.hbs")),
    ] {
        hb.register_template_string(name, template)
            .unwrap_or_else(|e| panic!("template '{name}' failed to parse: {e}"));
    }
    hb
});

/// Render a view by name.
///
/// Usage:
///     render("login", &json!({"title": "Log in", "user": null, "error": null}))
///
pub fn render(name: &str, ctx: &Value) -> anyhow::Result<String> {
    TEMPLATES
        .render(name, ctx)
        .map_err(|e| anyhow::anyhow!("rendering view '{name}' failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn login_renders_with_and_without_error() {
        let ctx = json!({"title": "Log in", "user": null, "error": null});
        let html = render("login", &ctx).unwrap();
        assert!(html.contains("<form"));

        let ctx = json!({"title": "Log in", "user": null, "error": "Invalid username or password"});
        let html = render("login", &ctx).unwrap();
        assert!(html.contains("Invalid username or password"));
    }

    #[test]
    fn index_lists_contacts() {
        let ctx = json!({
            "title": "Contacts",
            "user": {"id": 1, "first_name": "CMPS", "last_name": "369", "username": "cmps369"},
            "contacts": [{
                "id": 1,
                "first_name": "Ada",
                "last_name": "Lovelace",
                "phone_number": null,
                "email_address": "ada@x.io",
                "street": null,
                "city": null,
                "state": null,
                "zip": null,
                "country": null,
                "contact_by_email": true,
                "contact_by_phone": false
            }]
        });
        let html = render("index", &ctx).unwrap();
        assert!(html.contains("Lovelace"));
        assert!(html.contains("href=\"/1\""));
    }

    #[test]
    fn unknown_view_is_an_error() {
        assert!(render("missing", &json!({})).is_err());
    }
}
