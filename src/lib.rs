//! postgrid: a small blog server rendering posts from static JSON data
//!
//! Posts and site settings are loaded once at startup into an immutable
//! [`Blog`], which the page renderers and the HTTP router borrow for every
//! request.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod render;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::BlogError;

/// The loaded blog: configuration plus all static content
#[derive(Debug, Clone)]
pub struct Blog {
    /// Blog configuration
    pub config: config::BlogConfig,
    /// Site settings
    pub settings: config::Settings,
    /// All posts, in data file order
    pub posts: Vec<content::Post>,
    /// Page templates
    pub templates: templates::Templates,
    /// Base directory
    pub base_dir: PathBuf,
}

impl Blog {
    /// Load a blog from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::BlogConfig::load(&config_path)?
        } else {
            config::BlogConfig::default()
        };

        let loader = content::ContentLoader::new(base_dir.join(&config.data_dir));
        let settings = loader.load_settings()?;
        let posts = loader.load_posts()?;
        let templates =
            templates::Templates::load(base_dir.join(&config.template_dir), config.reload_templates)?;

        tracing::info!(
            posts = posts.len(),
            site_title = %settings.site_title,
            "blog loaded"
        );

        Ok(Self {
            config,
            settings,
            posts,
            templates,
            base_dir,
        })
    }

    /// Build a blog from in-memory parts, with the built-in templates
    pub fn from_parts(
        config: config::BlogConfig,
        settings: config::Settings,
        posts: Vec<content::Post>,
    ) -> Self {
        Self {
            config,
            settings,
            posts,
            templates: templates::Templates::builtin(),
            base_dir: PathBuf::from("."),
        }
    }

    /// Look up a post by exact slug
    pub fn find_post(&self, slug: &str) -> Option<&content::Post> {
        content::Post::find(&self.posts, slug)
    }
}
