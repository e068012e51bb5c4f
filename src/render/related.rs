//! Related posts for the single post view

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::BlogConfig;
use crate::content::{clean_title, first_image, Post};
use crate::helpers::fallback_image_tag;

/// Render up to `related_count` random posts other than `current_slug`
///
/// Every call draws a fresh uniform sample from `rng`; with fewer candidates
/// than requested, all of them are returned in random order.
pub fn related_posts<R: Rng + ?Sized>(
    posts: &[Post],
    current_slug: &str,
    config: &BlogConfig,
    rng: &mut R,
) -> String {
    let mut candidates: Vec<&Post> = posts.iter().filter(|p| p.slug != current_slug).collect();
    let amount = config.related_count.min(candidates.len());
    let (picked, _) = candidates.partial_shuffle(rng, amount);

    picked.iter().map(|post| related_item(post, config)).collect()
}

fn related_item(post: &Post, config: &BlogConfig) -> String {
    let image = first_image(&post.content, config);
    let title = clean_title(&post.title, config);

    format!(
        r#"
<li class="related-post-item">
    {}
    <div><a href="/{}">{}</a></div>
</li>
"#,
        fallback_image_tag(&image, &title, None, &config.placeholder_image),
        post.slug,
        title
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn posts(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| {
                Post::new(
                    &format!("post-{}", i),
                    &format!("Post {} | Site", i),
                    &format!(r#"<img src="/img/{}.png">"#, i),
                )
            })
            .collect()
    }

    fn linked_slugs(html: &str) -> Vec<String> {
        html.split(r#"<a href="/"#)
            .skip(1)
            .map(|rest| rest.split('"').next().unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_excludes_current_and_caps() {
        let config = BlogConfig::default();
        let posts = posts(10);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let html = related_posts(&posts, "post-3", &config, &mut rng);
            let slugs = linked_slugs(&html);
            assert_eq!(slugs.len(), 5);
            assert!(!slugs.contains(&"post-3".to_string()));
            let unique: HashSet<_> = slugs.iter().collect();
            assert_eq!(unique.len(), 5);
        }
    }

    #[test]
    fn test_small_pool() {
        let config = BlogConfig::default();
        let posts = posts(3);
        let mut rng = StdRng::seed_from_u64(1);

        let html = related_posts(&posts, "post-0", &config, &mut rng);
        let mut slugs = linked_slugs(&html);
        slugs.sort();
        assert_eq!(slugs, vec!["post-1", "post-2"]);

        assert_eq!(related_posts(&posts[..1], "post-0", &config, &mut rng), "");
        assert_eq!(related_posts(&[], "post-0", &config, &mut rng), "");
    }

    #[test]
    fn test_unknown_slug_excludes_nothing() {
        let config = BlogConfig::default();
        let posts = posts(4);
        let html = related_posts(&posts, "missing", &config, &mut StdRng::seed_from_u64(3));
        assert_eq!(linked_slugs(&html).len(), 4);
    }

    #[test]
    fn test_item_fragment() {
        let config = BlogConfig::default();
        let posts = vec![
            Post::new("a", "Soto Ayam | Dapur", r#"<img src="/soto.png">"#),
            Post::new("b", "Rendang", "<p>no image</p>"),
        ];
        let mut rng = StdRng::seed_from_u64(0);

        let html = related_posts(&posts, "b", &config, &mut rng);
        assert!(html.contains(r#"<li class="related-post-item">"#));
        assert!(html.contains(r#"<img src="/soto.png" alt="Soto Ayam""#));
        assert!(html.contains(r#"<a href="/a">Soto Ayam</a>"#));
        assert!(html.contains("this.src='https://placehold.co/300x200/png'"));

        let html = related_posts(&posts, "a", &config, &mut rng);
        assert!(html.contains(r#"<img src="https://placehold.co/300x200/png" alt="Rendang""#));
    }

    #[test]
    fn test_order_varies() {
        let config = BlogConfig::default();
        let posts = posts(20);
        let mut rng = StdRng::seed_from_u64(42);

        let first = related_posts(&posts, "post-0", &config, &mut rng);
        let differs = (0..20).any(|_| related_posts(&posts, "post-0", &config, &mut rng) != first);
        assert!(differs);
    }
}
