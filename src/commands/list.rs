//! List site content

use anyhow::Result;

use crate::content::clean_title;
use crate::Blog;

/// Print every post with its slug and cleaned title
pub fn run(blog: &Blog) -> Result<()> {
    println!("Posts ({}):", blog.posts.len());
    for line in post_lines(blog) {
        println!("  {}", line);
    }
    Ok(())
}

fn post_lines(blog: &Blog) -> Vec<String> {
    blog.posts
        .iter()
        .enumerate()
        .map(|(i, post)| {
            let marker = if i < blog.config.list_size { "*" } else { " " };
            format!(
                "{} {} - {}",
                marker,
                post.slug,
                clean_title(&post.title, &blog.config)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BlogConfig, Settings};
    use crate::content::Post;

    #[test]
    fn test_post_lines_mark_home_page_posts() {
        let mut config = BlogConfig::default();
        config.list_size = 1;
        let posts = vec![
            Post::new("a", "First | Site", ""),
            Post::new("b", "Second", ""),
        ];
        let blog = Blog::from_parts(config, Settings::default(), posts);

        assert_eq!(post_lines(&blog), vec!["* a - First", "  b - Second"]);
    }
}
