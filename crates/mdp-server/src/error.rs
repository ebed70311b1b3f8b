//! Error types for the HTTP server.

use std::net::AddrParseError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No route and no catalog entry for the path.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Host and port do not form a socket address.
    #[error("Invalid listen address: {0}")]
    Address(#[from] AddrParseError),

    /// I/O error while binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            Self::NotFound(path) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Not found",
                    path: Some(path.as_str()),
                }),
            )
                .into_response(),
            Self::Address(_) | Self::Io(_) => {
                let message = self.to_string();
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: &message,
                        path: None,
                    }),
                )
                    .into_response()
            }
        }
    }
}
