//! Error types for page rendering.
//!
//! Errors are turned into plain-text responses; the layout is never applied
//! to an error page.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Plain-text content type for error bodies
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Request-time error type
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    /// No post has the requested slug.
    #[error("post not found: {0}")]
    PostNotFound(String),

    /// A template could not be read while reloading from disk.
    #[error("failed to read template {name}: {source}")]
    Template {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl BlogError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Self::PostNotFound(_) => StatusCode::NOT_FOUND,
            Self::Template { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert into a plain-text response, using `not_found` as the 404 body
    pub fn into_response_with(self, not_found: &str) -> Response {
        let status = self.status();
        let body = match &self {
            Self::PostNotFound(slug) => {
                tracing::debug!(slug = %slug, "post not found");
                not_found.to_string()
            }
            Self::Template { .. } => {
                tracing::error!(error = %self, "internal error");
                "Internal server error".to_string()
            }
        };

        (status, [(header::CONTENT_TYPE, TEXT_PLAIN)], body).into_response()
    }
}

impl IntoResponse for BlogError {
    fn into_response(self) -> Response {
        self.into_response_with("Post not found")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_not_found() {
        let err = BlogError::PostNotFound("soto".to_string());
        assert_eq!(err.to_string(), "post not found: soto");
    }

    #[test]
    fn error_into_response_not_found() {
        let response = BlogError::PostNotFound("x".to_string()).into_response_with("Tidak ada");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_PLAIN);
    }

    #[test]
    fn error_into_response_template() {
        let err = BlogError::Template {
            name: "layout.html",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
