use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Category assigned to links that arrive without one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Brand color assigned to links that arrive without one.
pub const DEFAULT_COLOR: &str = "#6366f1";

const DEFAULT_APP_NAME: &str = "Linkdeck";

/// Application settings consumed by the import/export pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Application name; its slug prefixes export filenames
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Category sentinel for links imported without a category
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Hex color for links imported without a color
    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            default_category: default_category(),
            default_color: default_color(),
        }
    }
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

impl AppConfig {
    /// Load configuration from a YAML file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: AppConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a YAML file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
