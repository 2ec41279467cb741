use crate::DEFAULT_DATABASE_FILENAME;

use serde::Deserialize;

/// Where the SQLite file lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config directory; `Config::validate` rejects
    /// absolute paths and `..` components
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_FILENAME.to_string(),
        }
    }
}
