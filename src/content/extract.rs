//! Text extraction from raw post HTML
//!
//! All functions here are total: a missing marker or image degrades to a
//! fallback value instead of an error.

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::BlogConfig;

lazy_static! {
    static ref IMG_SRC: Regex =
        Regex::new(r#"(?i)<img\b[^>]*?\ssrc\s*=\s*["']([^"']+)["']"#).unwrap();
}

/// Strip decorative suffixes from a post title
///
/// The cutoff sentinel wins over the separators; separators are tried in
/// configured order and the first one present splits the title.
///
/// # Examples
/// ```ignore
/// clean_title("Hello World | MySite", &config) // -> "Hello World"
/// ```
pub fn clean_title(title: &str, config: &BlogConfig) -> String {
    let cutoff = config.title_cutoff.as_str();
    if !cutoff.is_empty() {
        if let Some(idx) = title.find(cutoff) {
            return title[..idx].trim().to_string();
        }
    }

    for sep in config.title_separators.iter().filter(|s| !s.is_empty()) {
        if let Some(idx) = title.find(sep.as_str()) {
            return title[..idx].trim().to_string();
        }
    }

    title.to_string()
}

/// Cut boilerplate off the end of a post body and drop read-more markers
pub fn main_content(html: &str, config: &BlogConfig) -> String {
    let stop = config.content_stop_phrase.as_str();
    let body = match html.find(stop) {
        Some(idx) if !stop.is_empty() => &html[..idx],
        _ => html,
    };

    if config.more_tag.is_empty() {
        body.to_string()
    } else {
        body.replace(config.more_tag.as_str(), "")
    }
}

/// Source URL of the first image, or the placeholder image
pub fn first_image(html: &str, config: &BlogConfig) -> String {
    IMG_SRC
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| config.placeholder_image.clone())
}
