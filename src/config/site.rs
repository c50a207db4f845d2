//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::collection::DisplayOptions;
use crate::host::OptionStore;

/// Option key the membership configuration is stored under
pub const PLUGIN_KEY: &str = "page_collections";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // URL
    pub url: String,
    pub root: String,
    /// Admin area path, relative to root
    pub admin_path: String,

    // Directory
    pub source_dir: String,

    /// Site-wide option blobs keyed by plugin name
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,

    /// Stored display options for the collection box
    #[serde(default)]
    pub display: DisplayOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "My Site".to_string(),
            url: "http://example.com".to_string(),
            root: "/".to_string(),
            admin_path: "admin".to_string(),
            source_dir: "source".to_string(),
            options: HashMap::new(),
            display: DisplayOptions::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

impl OptionStore for SiteConfig {
    fn option(&self, key: &str) -> Option<serde_yaml::Value> {
        self.options.get(key).cloned()
    }
}
