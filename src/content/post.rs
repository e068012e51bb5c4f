//! Post model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A blog post as stored in posts.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Slug (URL-friendly name), unique within the collection
    pub slug: String,

    /// Raw title, possibly with a decorative suffix
    pub title: String,

    /// Raw HTML content
    #[serde(default)]
    pub content: String,

    /// Structured-data script, passed through as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json_ld: Option<String>,

    /// Any other fields from the data file
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Post {
    /// Create a new post with the required fields
    pub fn new(slug: &str, title: &str, content: &str) -> Self {
        Self {
            slug: slug.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            json_ld: None,
            extra: HashMap::new(),
        }
    }

    /// Find a post by exact slug match
    pub fn find<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
        posts.iter().find(|p| p.slug == slug)
    }
}
