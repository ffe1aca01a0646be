//! User configuration for gplan.
//!
//! The configuration is an optional JSON file stored next to the database in
//! the platform data directory:
//!
//! ```json
//! {
//!   "db_path": "/home/me/notes/plan.db",
//!   "default_priority": 3
//! }
//! ```
//!
//! Every field is optional. A missing file is the same as an empty one.

use super::data_storage::DataStorage;
use super::error::Result;
use crate::libs::task::PRIORITY_NONE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "data.db";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Overrides the default database location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Priority given to new tasks when `--priority` is not passed.
    pub default_priority: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            default_priority: PRIORITY_NONE,
        }
    }
}

impl Config {
    /// Reads the config file from the data directory, falling back to defaults.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new()?.get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Writes `config.json` into the data dir. No command calls this; users edit the file by hand.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new()?.get_path(CONFIG_FILE_NAME)?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// The database file to open: the configured override or `<data dir>/data.db`.
    pub fn db_path(&self) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                Ok(path.clone())
            }
            None => DataStorage::new()?.get_path(DB_FILE_NAME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.default_priority, 4);
    }

    #[test]
    fn test_partial_json() {
        let config = Config::from_json(r#"{"default_priority": 2}"#).unwrap();
        assert_eq!(config.default_priority, 2);
        assert!(config.db_path.is_none());
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = Config::from_json("{ nope").unwrap_err();
        assert!(matches!(err, crate::libs::error::DbError::Config(_)));
    }
}
