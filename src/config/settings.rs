//! Site settings (data/settings.json)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Site-wide settings shared by every rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub site_title: String,
    pub site_description: String,
    pub site_url: String,
    pub mobile_menu: Vec<MenuItem>,
    pub footer_menu: Vec<MenuItem>,

    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_title: "My Blog".to_string(),
            site_description: String::new(),
            site_url: String::new(),
            mobile_menu: vec![MenuItem::new("Home", "/")],
            footer_menu: vec![MenuItem::new("Home", "/")],
            extra: HashMap::new(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }
}

/// A single navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: String,
    pub url: String,
}

impl MenuItem {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}
