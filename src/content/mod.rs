//! Content module - posts, loading and HTML extraction

mod extract;
pub mod loader;
mod post;

pub use extract::{clean_title, first_image, main_content};
pub use loader::ContentLoader;
pub use post::Post;
