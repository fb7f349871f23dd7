//! Error responses.
//!
//! Absence is rendered as an empty-body 404. The store running out of ids is
//! the one other failure and answers 503. Malformed paths and bodies are
//! rejected by axum extractors before a handler runs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::contacts::ContactId;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("contact {0} not found")]
    ContactNotFound(ContactId),

    #[error("no route for {0}")]
    RouteNotFound(String),

    #[error("contact id space exhausted")]
    IdsExhausted,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::ContactNotFound(_) | ApiError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::IdsExhausted => StatusCode::SERVICE_UNAVAILABLE,
        };
        tracing::debug!(error = %self, status = status.as_u16(), "Request failed");
        status.into_response()
    }
}
