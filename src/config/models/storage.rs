//! Artifact storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Where weather artifacts are written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory for `{city_id}_{timestamp}.json` files
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl StorageConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.output_dir != default_output_dir() {
            self.output_dir = other.output_dir;
        }
        self
    }
}
