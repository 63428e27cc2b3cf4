//! Process configuration.
//!
//! Everything is optional with a sensible default: the listening port comes
//! from `ROLODEX_PORT`, the database location from `ROLODEX_DB_PATH` (the
//! `Database` falls back to a per-user data directory when unset). CLI flags
//! override the environment.

use std::{env, fmt::Display, path::PathBuf, str::FromStr};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Explicit database file location; `None` lets the store pick its
    /// platform default.
    pub db_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: env_or("ROLODEX_PORT", DEFAULT_PORT),
            db_path: env::var("ROLODEX_DB_PATH").ok().map(PathBuf::from),
        }
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(mut self, port: Option<u16>, db_path: Option<PathBuf>) -> Self {
        if let Some(port) = port {
            self.port = port;
        }
        if db_path.is_some() {
            self.db_path = db_path;
        }
        self
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    let Ok(raw) = env::var(key) else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Invalid {key} value {raw:?}: {e}; using default");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_win_over_defaults() {
        let config = Config {
            port: DEFAULT_PORT,
            db_path: None,
        }
        .with_overrides(Some(3000), Some(PathBuf::from("/tmp/contacts.db")));

        assert_eq!(config.port, 3000);
        assert_eq!(config.db_path.as_deref(), Some(std::path::Path::new("/tmp/contacts.db")));
    }

    #[test]
    fn missing_overrides_keep_existing_values() {
        let config = Config {
            port: 3000,
            db_path: Some(PathBuf::from("/tmp/contacts.db")),
        }
        .with_overrides(None, None);

        assert_eq!(config.port, 3000);
        assert!(config.db_path.is_some());
    }
}
