//! Repository implementations for data access in Rolodex.
//!
//! Provides database operations for contacts and users. Each repository is
//! constructed with the shared connection handle; every mutation is a single
//! atomic statement.

mod contact;
mod user;

pub use contact::ContactRepository;
pub use user::UserRepository;

use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub type DbConn = Arc<Mutex<Connection>>;
