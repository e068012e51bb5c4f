//! Page renderers for the list and single post views

mod related;

pub use related::related_posts;

use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::content::{clean_title, first_image, main_content, Post};
use crate::error::BlogError;
use crate::helpers::{
    fallback_image_tag, generate_footer_menu, generate_meta, generate_mobile_menu, html_escape,
    Meta,
};
use crate::templates::{RenderContext, TemplateName};
use crate::Blog;

/// Content type of every rendered page
pub const HTML_CONTENT_TYPE: &str = "text/html;charset=UTF-8";

/// A fully rendered HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlPage(pub String);

impl IntoResponse for HtmlPage {
    fn into_response(self) -> Response {
        ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], self.0).into_response()
    }
}

/// Render the home page: a grid of the first `list_size` posts
pub async fn show_post_list(blog: &Blog) -> Result<HtmlPage, BlogError> {
    let items: String = blog
        .posts
        .iter()
        .take(blog.config.list_size)
        .map(|post| post_card(post, blog))
        .collect();

    let context = RenderContext::new().with("POST_GRID_ITEMS", items);
    let page_content = blog.templates.render(TemplateName::Posts, &context).await?;

    let meta = generate_meta(&blog.settings, None);
    render_layout(blog, &meta, page_content, String::new()).await
}

/// Render a single post with related posts
pub async fn show_single_post(blog: &Blog, slug: &str) -> Result<HtmlPage, BlogError> {
    let post = blog
        .find_post(slug)
        .ok_or_else(|| BlogError::PostNotFound(slug.to_string()))?;

    let title = clean_title(&post.title, &blog.config);
    let content = main_content(&post.content, &blog.config);
    let related = related_posts(&blog.posts, slug, &blog.config, &mut rand::thread_rng());

    let meta_post = Post {
        title: title.clone(),
        content: content.clone(),
        ..post.clone()
    };
    let meta = generate_meta(&blog.settings, Some(&meta_post));

    let context = RenderContext::new()
        .with("POST_TITLE", title)
        .with("POST_CONTENT", content)
        .with("RELATED_POSTS", related);
    let page_content = blog.templates.render(TemplateName::Single, &context).await?;

    tracing::debug!(slug = %slug, "rendered post");
    render_layout(blog, &meta, page_content, post.json_ld.clone().unwrap_or_default()).await
}

fn post_card(post: &Post, blog: &Blog) -> String {
    let image = first_image(&post.content, &blog.config);
    let title = clean_title(&post.title, &blog.config);

    format!(
        r#"
<div class="post-card">
    <a href="/{}">
        {}
        <h2 class="post-card-title">{}</h2>
    </a>
</div>
"#,
        post.slug,
        fallback_image_tag(
            &image,
            &title,
            Some("post-card-image"),
            &blog.config.placeholder_image
        ),
        title
    )
}

/// Wrap page content in the shared layout
///
/// Description and canonical URL land inside attributes and are escaped.
async fn render_layout(
    blog: &Blog,
    meta: &Meta,
    page_content: String,
    json_ld: String,
) -> Result<HtmlPage, BlogError> {
    let context = RenderContext::new()
        .with("SEO_TITLE", meta.title.as_str())
        .with("SEO_DESCRIPTION", html_escape(&meta.description))
        .with("CANONICAL_URL", html_escape(&meta.canonical))
        .with("PAGE_CONTENT", page_content)
        .with("SITE_TITLE", blog.settings.site_title.as_str())
        .with("MOBILE_MENU_LINKS", generate_mobile_menu(&blog.settings))
        .with("FOOTER_MENU_LINKS", generate_footer_menu(&blog.settings))
        .with("JSON_LD_SCRIPT", json_ld);

    let html = blog.templates.render(TemplateName::Layout, &context).await?;
    Ok(HtmlPage(html))
}
