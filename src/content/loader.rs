//! Content loader - loads posts and settings from the data directory

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::Post;
use crate::config::Settings;

/// Posts data file name
const POSTS_FILE: &str = "posts.json";

/// Settings data file name
const SETTINGS_FILE: &str = "settings.json";

/// Loads static content from the data directory
pub struct ContentLoader {
    data_dir: PathBuf,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Load all posts from posts.json, keeping file order
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let path = self.data_dir.join(POSTS_FILE);
        if !path.exists() {
            tracing::warn!("No posts file at {:?}, serving an empty blog", path);
            return Ok(Vec::new());
        }

        let content =
            fs::read_to_string(&path).with_context(|| format!("Failed to read {:?}", path))?;
        let posts: Vec<Post> =
            serde_json::from_str(&content).with_context(|| format!("Invalid posts in {:?}", path))?;

        let mut seen = HashSet::new();
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                tracing::warn!("Duplicate slug {:?}, only the first post is reachable", post.slug);
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), path);
        Ok(posts)
    }

    /// Load site settings from settings.json
    pub fn load_settings(&self) -> Result<Settings> {
        let path = self.data_dir.join(SETTINGS_FILE);
        if !path.exists() {
            tracing::warn!("No settings file at {:?}, using defaults", path);
            return Ok(Settings::default());
        }

        Settings::load(&path).with_context(|| format!("Invalid settings in {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_posts_keeps_order() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(POSTS_FILE),
            r#"[
                {"slug": "b", "title": "B", "content": ""},
                {"slug": "a", "title": "A", "content": "<p>a</p>"}
            ]"#,
        )
        .unwrap();

        let posts = ContentLoader::new(dir.path()).load_posts().unwrap();
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }

    #[test]
    fn test_missing_files_fall_back() {
        let dir = TempDir::new().unwrap();
        let loader = ContentLoader::new(dir.path());
        assert!(loader.load_posts().unwrap().is_empty());
        assert_eq!(loader.load_settings().unwrap().site_title, "My Blog");
    }

    #[test]
    fn test_invalid_posts_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(POSTS_FILE), "{not json").unwrap();
        assert!(ContentLoader::new(dir.path()).load_posts().is_err());
    }

    #[test]
    fn test_load_settings() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), r#"{"siteTitle": "Dapur Kita"}"#).unwrap();
        let settings = ContentLoader::new(dir.path()).load_settings().unwrap();
        assert_eq!(settings.site_title, "Dapur Kita");
    }
}
