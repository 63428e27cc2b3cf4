//! SQLite database setup and connection management for Rolodex.
//! Handles database initialization, schema creation, and connection management.

use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::{AppError, NewUser};
use crate::infra::db::repository::{ContactRepository, DbConn, UserRepository};

/// Username of the account provisioned on first schema initialization.
pub const DEFAULT_USERNAME: &str = "cmps369";
const DEFAULT_PASSWORD: &str = "rcnj";

/// How long a statement may wait on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database wrapper that owns the single SQLite connection.
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    /// Create or open the database at the default location.
    pub fn open() -> Result<Self, AppError> {
        Self::open_at(Self::default_path())
    }

    /// Create an in-memory database (useful for testing).
    pub fn open_in_memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        Self::from_connection(conn)
    }

    /// Create or open the database at a specific path.
    pub fn open_at(path: PathBuf) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        }

        let conn = Connection::open(&path)
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        log::info!("Opened contact database at {}", path.display());
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, AppError> {
        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        db.initialize()?;
        Ok(db)
    }

    /// Get the default database path.
    fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("ROLODEX_DB_PATH") {
            return PathBuf::from(path);
        }

        #[cfg(target_os = "macos")]
        {
            if let Some(home) = home::home_dir() {
                return home
                    .join("Library")
                    .join("Application Support")
                    .join("Rolodex")
                    .join("contacts.db");
            }
        }

        #[cfg(target_os = "windows")]
        {
            if let Some(appdata) = std::env::var_os("APPDATA") {
                return PathBuf::from(appdata).join("Rolodex").join("contacts.db");
            }
        }

        #[cfg(target_os = "linux")]
        {
            if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
                return PathBuf::from(xdg).join("rolodex").join("contacts.db");
            }
            if let Some(home) = home::home_dir() {
                return home
                    .join(".local")
                    .join("share")
                    .join("rolodex")
                    .join("contacts.db");
            }
        }

        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(".rolodex")
            .join("contacts.db")
    }

    /// Initialize the schema and the default account.
    ///
    /// Idempotent: tables use create-if-absent semantics and the default
    /// account is only inserted when no user with that username exists yet.
    /// Runs on every open; safe to call again at any point.
    pub fn initialize(&self) -> Result<(), AppError> {
        {
            let conn = self.conn.lock().unwrap();
            conn.busy_timeout(BUSY_TIMEOUT)
                .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;

            conn.execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS contacts (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    phone_number TEXT,
                    email_address TEXT,
                    street TEXT,
                    city TEXT,
                    state TEXT,
                    zip TEXT,
                    country TEXT,
                    contact_by_email INTEGER DEFAULT 0,
                    contact_by_phone INTEGER DEFAULT 0
                );

                CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    username TEXT UNIQUE NOT NULL,
                    password TEXT NOT NULL
                );
                "#,
            )
            .map_err(|e| AppError::StorageUnavailable(e.to_string()))?;
        }

        self.ensure_default_user()
    }

    /// Provision the default account when it does not exist yet.
    fn ensure_default_user(&self) -> Result<(), AppError> {
        let users = self.user_repo();
        if users.find_by_username(DEFAULT_USERNAME)?.is_none() {
            users.create(&NewUser {
                first_name: "CMPS".into(),
                last_name: "369".into(),
                username: DEFAULT_USERNAME.into(),
                password: DEFAULT_PASSWORD.into(),
            })?;
            log::info!("Provisioned default account '{DEFAULT_USERNAME}'");
        }
        Ok(())
    }

    /// Get a reference to the connection.
    pub fn connection(&self) -> DbConn {
        self.conn.clone()
    }

    pub fn contact_repo(&self) -> ContactRepository {
        ContactRepository::new(self.connection())
    }

    pub fn user_repo(&self) -> UserRepository {
        UserRepository::new(self.connection())
    }
}
