//! Page templates and placeholder substitution
//!
//! Templates are plain HTML with `{{NAME}}` placeholders. The built-in set is
//! embedded in the binary; any file with the same name in the template
//! directory replaces it. With `reload` enabled the directory is re-read on
//! every render so template edits show up without a restart.

use anyhow::Result;
use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::BlogError;

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{\s*([A-Za-z0-9_]+)\s*\}\}").unwrap();
}

/// The templates a page can be built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateName {
    /// Shared page shell
    Layout,
    /// Post grid for the list view
    Posts,
    /// Single post body
    Single,
}

impl TemplateName {
    pub const ALL: [TemplateName; 3] = [Self::Layout, Self::Posts, Self::Single];

    /// File name inside the template directory
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Layout => "layout.html",
            Self::Posts => "posts.html",
            Self::Single => "single.html",
        }
    }

    /// Built-in template source
    pub fn builtin(self) -> &'static str {
        match self {
            Self::Layout => include_str!("default/layout.html"),
            Self::Posts => include_str!("default/posts.html"),
            Self::Single => include_str!("default/single.html"),
        }
    }
}

/// Placeholder values for a single render
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    values: IndexMap<String, String>,
}

impl RenderContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a placeholder value, builder style
    pub fn with<V: Into<String>>(mut self, name: &str, value: V) -> Self {
        self.set(name, value);
        self
    }

    /// Set a placeholder value
    pub fn set<V: Into<String>>(&mut self, name: &str, value: V) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Get a placeholder value
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Substitute every known placeholder in `template`
///
/// Unknown placeholders are left as they are. Substituted values are not
/// scanned again, so a post containing `{{SITE_TITLE}}` stays literal.
pub fn substitute(template: &str, context: &RenderContext) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match context.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Template set used by the page renderers
#[derive(Debug, Clone)]
pub struct Templates {
    layout: String,
    posts: String,
    single: String,
    /// Directory re-read on each render, when reloading is on
    reload_dir: Option<PathBuf>,
}

impl Default for Templates {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Templates {
    /// The embedded templates only
    pub fn builtin() -> Self {
        Self {
            layout: TemplateName::Layout.builtin().to_string(),
            posts: TemplateName::Posts.builtin().to_string(),
            single: TemplateName::Single.builtin().to_string(),
            reload_dir: None,
        }
    }

    /// Load templates from `dir`, falling back to the embedded ones
    pub fn load<P: AsRef<Path>>(dir: P, reload: bool) -> Result<Self> {
        let dir = dir.as_ref();
        let mut templates = Self::builtin();

        for name in TemplateName::ALL {
            let path = dir.join(name.file_name());
            if path.is_file() {
                let source = fs::read_to_string(&path)?;
                tracing::debug!("Loaded template override {:?}", path);
                *templates.slot_mut(name) = source;
            }
        }

        if reload {
            tracing::info!("Reloading templates from {:?} on every request", dir);
            templates.reload_dir = Some(dir.to_path_buf());
        }

        Ok(templates)
    }

    /// Source of the named template as loaded at startup
    pub fn source(&self, name: TemplateName) -> &str {
        match name {
            TemplateName::Layout => &self.layout,
            TemplateName::Posts => &self.posts,
            TemplateName::Single => &self.single,
        }
    }

    fn slot_mut(&mut self, name: TemplateName) -> &mut String {
        match name {
            TemplateName::Layout => &mut self.layout,
            TemplateName::Posts => &mut self.posts,
            TemplateName::Single => &mut self.single,
        }
    }

    /// Render the named template with the given context
    pub async fn render(
        &self,
        name: TemplateName,
        context: &RenderContext,
    ) -> Result<String, BlogError> {
        let Some(dir) = &self.reload_dir else {
            return Ok(substitute(self.source(name), context));
        };

        let path = dir.join(name.file_name());
        match tokio::fs::read_to_string(&path).await {
            Ok(source) => Ok(substitute(&source, context)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(substitute(self.source(name), context))
            }
            Err(e) => Err(BlogError::Template {
                name: name.file_name(),
                source: e,
            }),
        }
    }
}
