//! Store configuration.
//!
//! Defaults match the keys the browser build writes to `localStorage`, so a
//! snapshot exported from there can be read as-is. Every field is optional in
//! TOML; missing ones keep their default.
//!
//! ```toml
//! tasks_key = "dreamyTodoTasks"
//! visited_key = "dreamyTodoVisited"
//! seed_samples = true
//! storage_dir = "/home/me/.local/share/dreamy"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TASKS_KEY: &str = "dreamyTodoTasks";
pub const DEFAULT_VISITED_KEY: &str = "dreamyTodoVisited";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Key of the task snapshot blob.
    pub tasks_key: String,
    /// Key of the first-run flag.
    pub visited_key: String,
    /// Seed sample tasks on first run.
    pub seed_samples: bool,
    /// Directory for `FileStorage`; `None` means the caller picks the storage.
    pub storage_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            tasks_key: DEFAULT_TASKS_KEY.to_string(),
            visited_key: DEFAULT_VISITED_KEY.to_string(),
            seed_samples: true,
            storage_dir: None,
        }
    }
}

impl StoreConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
