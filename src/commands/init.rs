//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::templates::TemplateName;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    // Create directory structure
    fs::create_dir_all(target_dir.join("data"))?;
    fs::create_dir_all(target_dir.join("templates"))?;

    // Create default _config.yml
    let config_content = r#"# postgrid configuration

# Directory
data_dir: data
template_dir: templates
reload_templates: false

# Listing
list_size: 8
related_count: 5

# Content extraction
placeholder_image: https://placehold.co/300x200/png
title_cutoff: "\u200B"
title_separators:
  - " | "
  - " – "
more_tag: "<!--more-->"
content_stop_phrase: If you are searching about

# Responses
not_found_message: Post not found

# Server
server:
  ip: localhost
  port: 4000
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    let settings = r#"{
  "siteTitle": "My Blog",
  "siteDescription": "Notes and recipes",
  "siteUrl": "http://localhost:4000",
  "mobileMenu": [
    { "label": "Home", "url": "/" }
  ],
  "footerMenu": [
    { "label": "Home", "url": "/" },
    { "label": "About", "url": "/about" }
  ]
}
"#;

    let posts = r#"[
  {
    "slug": "hello-world",
    "title": "Hello World | My Blog",
    "content": "<p>Welcome to your new blog.</p><!--more--><img src=\"https://placehold.co/600x400/png\"><p>Edit data/posts.json to add posts.</p>"
  },
  {
    "slug": "about",
    "title": "About – My Blog",
    "content": "<p>This blog is served by postgrid.</p>"
  }
]
"#;

    fs::write(target_dir.join("data/settings.json"), settings)?;
    fs::write(target_dir.join("data/posts.json"), posts)?;

    for name in TemplateName::ALL {
        fs::write(
            target_dir.join("templates").join(name.file_name()),
            name.builtin(),
        )?;
    }

    Ok(())
}
