//! Blog configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main blog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    // Directory
    pub data_dir: String,
    pub template_dir: String,
    pub reload_templates: bool,

    // Listing
    pub list_size: usize,
    pub related_count: usize,

    // Content extraction
    pub placeholder_image: String,
    pub title_cutoff: String,
    pub title_separators: Vec<String>,
    pub more_tag: String,
    pub content_stop_phrase: String,

    // Responses
    pub not_found_message: String,

    #[serde(default)]
    pub server: ServerConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            template_dir: "templates".to_string(),
            reload_templates: false,

            list_size: 8,
            related_count: 5,

            placeholder_image: "https://placehold.co/300x200/png".to_string(),
            title_cutoff: "\u{200B}".to_string(),
            title_separators: vec![" | ".to_string(), " \u{2013} ".to_string()],
            more_tag: "<!--more-->".to_string(),
            content_stop_phrase: "If you are searching about".to_string(),

            not_found_message: "Post not found".to_string(),

            server: ServerConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl BlogConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            ip: "localhost".to_string(),
            port: 4000,
        }
    }
}
