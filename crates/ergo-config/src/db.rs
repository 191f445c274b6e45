//! Database location configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "ergo.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DbConfig {
    /// Path to the libSQL database file.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}
