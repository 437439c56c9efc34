//! Store runner configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! A `.env` file in the working directory is read first by the binaries.
//!
//! | Variable             | Default | Meaning                               |
//! |----------------------|---------|---------------------------------------|
//! | `DB_NAME`            | `loja`  | Database file is `<DB_NAME>.db`       |
//! | `DB_PATH`            | -       | Full path, overrides `DB_NAME`        |
//! | `DB_MAX_CONNECTIONS` | `5`     | Pool size                             |
//! | `DB_USER`            | -       | Server credential, unused by SQLite   |
//! | `DB_PASSWORD`        | -       | Server credential, unused by SQLite   |
//! | `DB_HOST`            | -       | Server address, unused by SQLite      |
//! | `DB_PORT`            | -       | Server port, unused by SQLite         |

use std::env;
use std::path::PathBuf;

use store_db::DbConfig;
use tracing::warn;

const DEFAULT_DB_NAME: &str = "loja";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Store runner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database name; the file is `<db_name>.db`
    pub db_name: String,

    /// Explicit database file path
    pub db_path: Option<PathBuf>,

    /// Pool size
    pub max_connections: u32,

    /// Server user (embedded SQLite has no server)
    pub db_user: Option<String>,

    /// Server password
    pub db_password: Option<String>,

    /// Server host
    pub db_host: Option<String>,

    /// Server port
    pub db_port: Option<u16>,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let config = StoreConfig {
            db_name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),

            db_path: get("DB_PATH").map(PathBuf::from),

            max_connections: match get("DB_MAX_CONNECTIONS") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()))?,
                None => DEFAULT_MAX_CONNECTIONS,
            },

            db_user: get("DB_USER"),

            db_password: get("DB_PASSWORD"),

            db_host: get("DB_HOST"),

            db_port: get("DB_PORT")
                .map(|raw| raw.trim().parse::<u16>())
                .transpose()
                .map_err(|_| ConfigError::InvalidValue("DB_PORT".to_string()))?,
        };

        if config.max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        Ok(config)
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.db", self.db_name)))
    }

    /// Names of the server settings that were provided.
    pub fn server_settings(&self) -> Vec<&'static str> {
        let mut set = Vec::new();
        if self.db_user.is_some() {
            set.push("DB_USER");
        }
        if self.db_password.is_some() {
            set.push("DB_PASSWORD");
        }
        if self.db_host.is_some() {
            set.push("DB_HOST");
        }
        if self.db_port.is_some() {
            set.push("DB_PORT");
        }
        set
    }

    /// Builds the pool configuration.
    pub fn to_db_config(&self) -> DbConfig {
        let ignored = self.server_settings();
        if !ignored.is_empty() {
            warn!(
                settings = ?ignored,
                "Server connection settings are ignored by the embedded SQLite database"
            );
        }

        DbConfig::new(self.database_path()).max_connections(self.max_connections)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<StoreConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StoreConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.db_name, "loja");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.database_path(), PathBuf::from("loja.db"));
        assert!(config.server_settings().is_empty());
    }

    #[test]
    fn test_db_name_and_path() {
        let named = load(&[("DB_NAME", "filial")]).unwrap();
        assert_eq!(named.database_path(), PathBuf::from("filial.db"));

        let pathed = load(&[("DB_NAME", "filial"), ("DB_PATH", "/var/lib/store/main.db")]).unwrap();
        assert_eq!(pathed.database_path(), PathBuf::from("/var/lib/store/main.db"));
    }

    #[test]
    fn test_server_settings_are_retained() {
        let config = load(&[
            ("DB_USER", "root"),
            ("DB_PASSWORD", "secret"),
            ("DB_HOST", "localhost"),
            ("DB_PORT", "3306"),
        ])
        .unwrap();

        assert_eq!(config.db_port, Some(3306));
        assert_eq!(config.db_user.as_deref(), Some("root"));
        assert_eq!(
            config.server_settings(),
            ["DB_USER", "DB_PASSWORD", "DB_HOST", "DB_PORT"]
        );
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("DB_PORT", "not-a-port")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for DB_PORT");

        assert!(load(&[("DB_PORT", "70000")]).is_err());
        assert!(load(&[("DB_MAX_CONNECTIONS", "0")]).is_err());
        assert!(load(&[("DB_MAX_CONNECTIONS", "many")]).is_err());
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = load(&[("DB_NAME", "  "), ("DB_PORT", "")]).unwrap();

        assert_eq!(config.db_name, "loja");
        assert_eq!(config.db_port, None);
    }

    #[test]
    fn test_to_db_config() {
        let db = load(&[("DB_MAX_CONNECTIONS", "3")]).unwrap().to_db_config();

        assert_eq!(db.max_connections, 3);
        assert_eq!(db.database_path, PathBuf::from("loja.db"));
    }
}
