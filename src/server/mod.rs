//! HTTP server and request routing
//!
//! ## Routes
//!
//! - `GET /` - post list
//! - `GET /{slug}` or `GET /{anything}/.../{slug}` - single post, keyed by the
//!   last path segment

use anyhow::Result;
use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::render::{show_post_list, show_single_post};
use crate::Blog;

/// A parsed request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The post list
    List,
    /// A single post
    Post { slug: String },
}

impl Route {
    /// Map a URL path to a route
    ///
    /// Only the last non-empty segment matters; `/recipes/soto` and `/soto`
    /// both resolve to the `soto` post. The segment is percent-decoded, so
    /// `/a%2Db` looks up the slug `a-b` rather than the raw `a%2Db`.
    pub fn parse(path: &str) -> Self {
        if path == "/" || path.is_empty() {
            return Self::List;
        }

        match path.split('/').filter(|s| !s.is_empty()).last() {
            Some(segment) => Self::Post {
                slug: percent_decode_str(segment).decode_utf8_lossy().into_owned(),
            },
            None => Self::List,
        }
    }
}

/// Render the response for a request path
pub async fn handle_request(blog: &Blog, path: &str) -> Response {
    let result = match Route::parse(path) {
        Route::List => show_post_list(blog).await,
        Route::Post { slug } => show_single_post(blog, &slug).await,
    };

    match result {
        Ok(page) => page.into_response(),
        Err(e) => e.into_response_with(&blog.config.not_found_message),
    }
}

/// Build the application router
pub fn router(blog: Arc<Blog>) -> Router {
    Router::new()
        .route("/", get(page_handler))
        .route("/*path", get(page_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(blog)
}

async fn page_handler(State(blog): State<Arc<Blog>>, uri: Uri) -> Response {
    handle_request(&blog, uri.path()).await
}

/// Start the blog server
pub async fn start(blog: Blog, ip: &str, port: u16) -> Result<()> {
    let app = router(Arc::new(blog));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
