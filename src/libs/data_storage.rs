//! Platform-specific location of gplan's data directory.
//!
//! On Windows the data lives under `%APPDATA%\gplan`, everywhere else under
//! `$HOME/.local/share/gplan`. A missing environment variable is an
//! initialization error; the directory itself is created on first use.

use super::error::{DbError, Result};
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "gplan";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Result<Self> {
        let base_path = if cfg!(windows) {
            let app_data = var("APPDATA").map_err(|_| DbError::MissingEnv("APPDATA"))?;
            Path::new(&app_data).join(APP_NAME)
        } else {
            let home = var("HOME").map_err(|_| DbError::MissingEnv("HOME"))?;
            Path::new(&home).join(".local").join("share").join(APP_NAME)
        };

        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Joins `file_name` onto the data directory, creating the directory if needed.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}
