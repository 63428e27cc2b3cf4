use std::sync::Arc;

use crate::infra::db::Database;

/// Process-wide state handed to every request handler.
///
/// The store handle is constructed once at startup and passed in explicitly;
/// nothing reaches the database through ambient state.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self { db: Arc::new(db) }
    }
}
