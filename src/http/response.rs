//! Response construction.
//!
//! Every response the server produces is plain text with a fixed body and
//! `Content-Type: text/plain`, no charset parameter.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::routing::RouteMatch;

pub const TEXT_PLAIN: &str = "text/plain";

/// A fixed plain-text response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainText {
    pub status: StatusCode,
    pub body: &'static str,
}

impl PlainText {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        Self { status, body }
    }
}

impl From<RouteMatch> for PlainText {
    fn from(matched: RouteMatch) -> Self {
        Self::new(matched.status(), matched.body())
    }
}

impl IntoResponse for PlainText {
    fn into_response(self) -> Response {
        // The header array is applied after the body, overriding the
        // `text/plain; charset=utf-8` that `&str` sets.
        (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN))],
            self.body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn sets_exact_content_type() {
        let response = PlainText::new(StatusCode::NOT_FOUND, "Not Found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_types: Vec<_> = response.headers().get_all(header::CONTENT_TYPE).iter().collect();
        assert_eq!(content_types, vec![&HeaderValue::from_static("text/plain")]);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"Not Found");
    }
}
