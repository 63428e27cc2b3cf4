use super::DbConn;
use crate::domain::{AppError, Contact, ContactId, ContactInput};

const COLUMNS: &str = "id, first_name, last_name, phone_number, email_address, \
                       street, city, state, zip, country, contact_by_email, contact_by_phone";

/// Repository for contact operations.
pub struct ContactRepository {
    conn: DbConn,
}

impl ContactRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    /// All contacts ordered by last name then first name, ascending.
    pub fn list_all(&self) -> Result<Vec<Contact>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {COLUMNS} FROM contacts ORDER BY last_name, first_name"
        ))?;

        let rows = stmt.query_map([], row_to_contact)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Absence is `None`, never an error.
    pub fn find_by_id(&self, id: ContactId) -> Result<Option<Contact>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM contacts WHERE id = ?1"))?;
        let mut rows = stmt.query_map([id], row_to_contact)?;

        match rows.next() {
            Some(row) => row.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    /// Insert a new contact and return the store-assigned identifier.
    pub fn create(&self, input: &ContactInput) -> Result<ContactId, AppError> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            r#"
            INSERT INTO contacts
            (first_name, last_name, phone_number, email_address, street, city, state, zip, country, contact_by_email, contact_by_phone)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
            "#,
            rusqlite::params![
                &input.first_name,
                &input.last_name,
                &input.phone_number,
                &input.email_address,
                &input.street,
                &input.city,
                &input.state,
                &input.zip,
                &input.country,
                input.contact_by_email as i64,
                input.contact_by_phone as i64,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Full overwrite of every mutable field. Returns the affected row count;
    /// zero rows (unknown id) is a successful no-op.
    pub fn update(&self, id: ContactId, input: &ContactInput) -> Result<usize, AppError> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute(
            r#"
            UPDATE contacts SET
            first_name = ?1, last_name = ?2, phone_number = ?3, email_address = ?4,
            street = ?5, city = ?6, state = ?7, zip = ?8, country = ?9,
            contact_by_email = ?10, contact_by_phone = ?11
            WHERE id = ?12
            "#,
            rusqlite::params![
                &input.first_name,
                &input.last_name,
                &input.phone_number,
                &input.email_address,
                &input.street,
                &input.city,
                &input.state,
                &input.zip,
                &input.country,
                input.contact_by_email as i64,
                input.contact_by_phone as i64,
                id,
            ],
        )?;
        Ok(affected)
    }

    /// Delete the contact; no-op if absent.
    pub fn delete(&self, id: ContactId) -> Result<usize, AppError> {
        let conn = self.conn.lock().unwrap();
        let affected = conn.execute("DELETE FROM contacts WHERE id = ?1", [id])?;
        Ok(affected)
    }
}

fn row_to_contact(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        phone_number: row.get(3)?,
        email_address: row.get(4)?,
        street: row.get(5)?,
        city: row.get(6)?,
        state: row.get(7)?,
        zip: row.get(8)?,
        country: row.get(9)?,
        contact_by_email: row.get::<_, i64>(10)? != 0,
        contact_by_phone: row.get::<_, i64>(11)? != 0,
    })
}
