use super::DbConn;
use crate::domain::{AppError, NewUser, User, UserId};

const COLUMNS: &str = "id, first_name, last_name, username, password";

/// bcrypt hash verified when a login names an unknown username, so both
/// failure paths cost one comparison and timing does not reveal whether the
/// username exists.
const DUMMY_HASH: &str = "$2b$12$GhvMmNVjRW29ulnudl.LbuAnUtN/LRfe1JsBm1Xu6LE3059z5Tr8m";

/// Repository for user operations.
///
/// Passwords are hashed here, immediately before the INSERT; plaintext never
/// reaches the store or the logs.
pub struct UserRepository {
    conn: DbConn,
}

impl UserRepository {
    pub fn new(conn: DbConn) -> Self {
        Self { conn }
    }

    pub fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM users WHERE username = ?1"))?;
        let mut rows = stmt.query_map([username], row_to_user)?;

        match rows.next() {
            Some(row) => row.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    pub fn find_by_id(&self, id: UserId) -> Result<Option<User>, AppError> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM users WHERE id = ?1"))?;
        let mut rows = stmt.query_map([id], row_to_user)?;

        match rows.next() {
            Some(row) => row.map(Some).map_err(Into::into),
            None => Ok(None),
        }
    }

    /// Hash the password and insert the user, returning the assigned id.
    ///
    /// Username uniqueness is enforced by the store's UNIQUE constraint; a
    /// duplicate surfaces as [`AppError::Constraint`]. Callers doing their
    /// own existence pre-check are only improving the error message.
    pub fn create(&self, user: &NewUser) -> Result<UserId, AppError> {
        if user.username.is_empty() {
            return Err(AppError::Validation("Username is required".into()));
        }
        if user.password.is_empty() {
            return Err(AppError::Validation("Password is required".into()));
        }

        // Hash outside the connection lock; bcrypt is deliberately slow.
        let password_hash =
            bcrypt::hash(&user.password, bcrypt::DEFAULT_COST).map_err(anyhow::Error::from)?;

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO users (first_name, last_name, username, password) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                &user.first_name,
                &user.last_name,
                &user.username,
                &password_hash,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Look up the user and verify the password against the stored hash.
    ///
    /// Returns `None` for an unknown username and for a wrong password alike;
    /// the caller cannot distinguish the two.
    pub fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, AppError> {
        let Some(user) = self.find_by_username(username)? else {
            let _ = bcrypt::verify(password, DUMMY_HASH);
            return Ok(None);
        };

        match bcrypt::verify(password, &user.password_hash) {
            Ok(true) => Ok(Some(user)),
            Ok(false) => Ok(None),
            Err(e) => Err(AppError::Internal(e.into())),
        }
    }
}

fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        username: row.get(3)?,
        password_hash: row.get(4)?,
    })
}
