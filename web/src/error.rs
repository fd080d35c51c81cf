//! Unified error types for the web frontend
//!
//! This module defines error types for each layer:
//! - `SdkError`: GraphQL client errors
//! - `CursorError`: Pagination cursor decoding errors
//! - `AppError`: Handler errors (rendered through the error page)

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::pages::{render_error_page, ErrorPage};

/// GraphQL client errors
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid token")]
    Unauthorized,

    #[error("GraphQL error: {}", .0.join("; "))]
    Graphql(Vec<String>),

    #[error("Response contained no data")]
    MissingData,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Client configuration error: {0}")]
    Config(String),
}

/// Cursor decoding errors
#[derive(Debug, Error)]
pub enum CursorError {
    #[error("Invalid cursor encoding: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("Invalid cursor payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GraphQL error: {0}")]
    Sdk(#[from] SdkError),

    #[error("Invalid cursor: {0}")]
    Cursor(#[from] CursorError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Sdk(SdkError::Api { status: 404, .. }) => StatusCode::NOT_FOUND,
            AppError::Sdk(_) => StatusCode::BAD_GATEWAY,
            AppError::Cursor(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::Sdk(e) => tracing::error!("GraphQL error: {}", e),
            AppError::Internal(msg) => tracing::error!("Internal error: {}", msg),
            AppError::Cursor(e) => tracing::debug!("Rejected cursor: {}", e),
            AppError::BadRequest(msg) => tracing::debug!("Bad request: {}", msg),
            AppError::NotFound(msg) => tracing::debug!("Not found: {}", msg),
        }

        let page = ErrorPage {
            status_code: Some(status.as_u16()),
        };

        (status, Html(render_error_page(&page))).into_response()
    }
}
