//! HTML helper functions

/// Build an image tag that swaps itself for `fallback` if it fails to load
///
/// # Examples
/// ```ignore
/// fallback_image_tag("/a.png", "Soto", Some("post-card-image"), PLACEHOLDER)
/// // -> <img src="/a.png" alt="Soto" class="post-card-image" onerror="...">
/// ```
pub fn fallback_image_tag(src: &str, alt: &str, class: Option<&str>, fallback: &str) -> String {
    let class_attr = class
        .map(|c| format!(r#" class="{}""#, c))
        .unwrap_or_default();

    format!(
        r#"<img src="{}" alt="{}"{} onerror="this.onerror=null;this.src='{}';">"#,
        src, alt, class_attr, fallback
    )
}

/// Generate an anchor tag
pub fn link_to(href: &str, text: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, html_escape(href), html_escape(text))
}

/// Escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Truncate a string to a specified length
pub fn truncate(s: &str, length: usize, omission: Option<&str>) -> String {
    let omission = omission.unwrap_or("...");

    if s.chars().count() <= length {
        s.to_string()
    } else {
        let truncated: String = s
            .chars()
            .take(length.saturating_sub(omission.chars().count()))
            .collect();
        format!("{}{}", truncated.trim_end(), omission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_image_tag() {
        let tag = fallback_image_tag("/a.png", "Soto", Some("card"), "https://placehold.co/300x200/png");
        assert!(tag.starts_with(r#"<img src="/a.png" alt="Soto" class="card""#));
        assert!(tag.contains("this.src='https://placehold.co/300x200/png'"));

        let tag = fallback_image_tag("/a.png", "Soto", None, "/p.png");
        assert!(!tag.contains("class="));
    }

    #[test]
    fn test_link_to_escapes() {
        assert_eq!(link_to("/a?b=1&c=2", "A & B"), r#"<a href="/a?b=1&amp;c=2">A &amp; B</a>"#);
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 8, None), "Hello...");
        assert_eq!(truncate("Hi", 10, None), "Hi");
    }
}
