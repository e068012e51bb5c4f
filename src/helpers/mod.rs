//! Helper functions for page fragments
//!
//! Small HTML builders shared by the page renderers: escaping, image tags,
//! navigation menus and SEO metadata.

mod html;
mod menu;
mod seo;

pub use html::*;
pub use menu::*;
pub use seo::*;
