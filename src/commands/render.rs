//! Render a single route without starting the server

use anyhow::{bail, Result};
use axum::body::to_bytes;

use crate::server::handle_request;
use crate::Blog;

/// Largest page body read back from a rendered response
const MAX_BODY: usize = 64 * 1024 * 1024;

/// Render `path` and return the response body, failing on non-2xx status
pub async fn render_path(blog: &Blog, path: &str) -> Result<String> {
    let response = handle_request(blog, path).await;
    let status = response.status();
    let body = to_bytes(response.into_body(), MAX_BODY).await?;
    let body = String::from_utf8(body.to_vec())?;

    if !status.is_success() {
        bail!("{} returned {}: {}", path, status, body);
    }
    Ok(body)
}

/// Render `path` to stdout
pub async fn run(blog: &Blog, path: &str) -> Result<()> {
    let html = render_path(blog, path).await?;
    println!("{}", html);
    Ok(())
}
