//! Errors raised while installing a mapped header.

use axum::http::header::{InvalidHeaderName, InvalidHeaderValue};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum MapperError {
    /// The configured header name is not a legal HTTP header name.
    #[error("invalid header name {name:?}: {source}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: InvalidHeaderName,
    },

    /// The (transformed) query value cannot be carried in a header.
    #[error("invalid value for header {header:?}: {source}")]
    InvalidHeaderValue {
        header: String,
        #[source]
        source: InvalidHeaderValue,
    },
}

impl IntoResponse for MapperError {
    fn into_response(self) -> Response {
        let status = match &self {
            MapperError::InvalidHeaderName { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            MapperError::InvalidHeaderValue { .. } => StatusCode::BAD_REQUEST,
        };

        tracing::warn!(error = %self, status = %status, "Query header mapping rejected request");
        (status, self.to_string()).into_response()
    }
}
