//! SEO metadata for pages

use lazy_static::lazy_static;
use regex::Regex;

use super::html::{strip_html, truncate};
use crate::config::Settings;
use crate::content::Post;

lazy_static! {
    static ref NON_TEXT_BLOCK: Regex =
        Regex::new(r"(?is)<script\b[^>]*>.*?</script\s*>|<style\b[^>]*>.*?</style\s*>").unwrap();
}

/// Maximum length of a generated description
const DESCRIPTION_LENGTH: usize = 160;

/// Metadata placed in the layout's `<head>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub title: String,
    pub description: String,
    pub canonical: String,
}

/// Build page metadata for the list view (`None`) or a single post
///
/// The post's title is used as given, so callers pass a post whose title
/// has already been cleaned.
pub fn generate_meta(settings: &Settings, post: Option<&Post>) -> Meta {
    let base_url = settings.site_url.trim_end_matches('/');

    match post {
        None => Meta {
            title: settings.site_title.clone(),
            description: settings.site_description.clone(),
            canonical: format!("{}/", base_url),
        },
        Some(post) => {
            let text = strip_html(&NON_TEXT_BLOCK.replace_all(&post.content, " "));
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            Meta {
                title: format!("{} - {}", post.title, settings.site_title),
                description: truncate(&text, DESCRIPTION_LENGTH, None),
                canonical: format!("{}/{}", base_url, post.slug),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.site_title = "Dapur Kita".to_string();
        settings.site_description = "Resep harian".to_string();
        settings.site_url = "https://example.com/".to_string();
        settings
    }

    #[test]
    fn test_list_meta() {
        let meta = generate_meta(&settings(), None);
        assert_eq!(meta.title, "Dapur Kita");
        assert_eq!(meta.description, "Resep harian");
        assert_eq!(meta.canonical, "https://example.com/");
    }

    #[test]
    fn test_post_meta() {
        let post = Post::new("soto", "Soto Ayam", "<p>Kuah  kuning\n<b>segar</b></p>");
        let meta = generate_meta(&settings(), Some(&post));
        assert_eq!(meta.title, "Soto Ayam - Dapur Kita");
        assert_eq!(meta.description, "Kuah kuning segar");
        assert_eq!(meta.canonical, "https://example.com/soto");
    }

    #[test]
    fn test_post_meta_skips_scripts_and_styles() {
        let post = Post::new(
            "soto",
            "Soto Ayam",
            "<style>p { color: red }</style><p>Kuah</p><SCRIPT type=\"text/javascript\">track();</SCRIPT><p>kuning</p>",
        );
        let meta = generate_meta(&settings(), Some(&post));
        assert_eq!(meta.description, "Kuah kuning");
    }
}
