//! Integration tests for the contact database workflow.
//! These tests run the data-access layer against a real database file.

use rolodex::domain::{AppError, ContactForm, ContactInput, NewUser};
use rolodex::infra::db::Database;
use rolodex::infra::db::database::DEFAULT_USERNAME;

fn contact(first: &str, last: &str, email: Option<&str>) -> ContactInput {
    ContactInput::parse(ContactForm {
        first_name: Some(first.to_string()),
        last_name: Some(last.to_string()),
        email_address: email.map(str::to_string),
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_full_contact_lifecycle() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = Database::open_at(dir.path().join("contacts.db"))?;
    let repo = db.contact_repo();

    repo.create(&contact("Charles", "Babbage", None))?;
    repo.create(&contact("Grace", "Hopper", None))?;

    // Create lands sorted among existing entries.
    let id = repo.create(&contact("Ada", "Lovelace", Some("ada@x.io")))?;
    let names: Vec<String> = repo
        .list_all()?
        .into_iter()
        .map(|c| c.last_name)
        .collect();
    assert_eq!(names, vec!["Babbage", "Hopper", "Lovelace"]);

    let found = repo.find_by_id(id)?.expect("contact should exist");
    assert_eq!(found.first_name, "Ada");
    assert_eq!(found.email_address.as_deref(), Some("ada@x.io"));

    repo.delete(id)?;
    assert!(repo.find_by_id(id)?.is_none());
    Ok(())
}

#[test]
fn test_signup_then_login_flow() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let users = db.user_repo();

    users.create(&NewUser {
        first_name: "Bob".into(),
        last_name: "Jones".into(),
        username: "bob".into(),
        password: "p1".into(),
    })?;

    // Signup does not authenticate; login must verify explicitly.
    assert!(users.verify_credentials("bob", "wrong")?.is_none());

    let user = users.verify_credentials("bob", "p1")?.expect("valid login");
    assert_eq!(user.username, "bob");
    assert_eq!(user.first_name, "Bob");
    Ok(())
}

#[test]
fn test_duplicate_signup_leaves_single_row() -> anyhow::Result<()> {
    let db = Database::open_in_memory()?;
    let users = db.user_repo();

    let bob = NewUser {
        first_name: "Bob".into(),
        last_name: "Jones".into(),
        username: "bob".into(),
        password: "p1".into(),
    };
    users.create(&bob)?;
    assert!(matches!(users.create(&bob), Err(AppError::Constraint(_))));

    let conn = db.connection();
    let conn = conn.lock().unwrap();
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    // The default account plus bob, nothing else.
    assert_eq!(count, 2);
    Ok(())
}

#[test]
fn test_reopening_database_provisions_default_user_once() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("contacts.db");

    {
        let db = Database::open_at(path.clone())?;
        assert!(db.user_repo().find_by_username(DEFAULT_USERNAME)?.is_some());
    }

    // Second process start: schema init runs again, account is not recreated.
    let db = Database::open_at(path)?;
    let conn = db.connection();
    let conn = conn.lock().unwrap();
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM users WHERE username = ?1",
        [DEFAULT_USERNAME],
        |row| row.get(0),
    )?;
    assert_eq!(count, 1);
    Ok(())
}
