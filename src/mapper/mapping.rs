//! The query-to-header mapper itself.
//!
//! # Responsibilities
//! - Hold the (query param, header name, transform) triple
//! - Rebuild a request with the mapped header installed
//!
//! # Design Decisions
//! - The request is taken by value and reassembled from its parts, so the
//!   incoming value can never be observed half-modified
//! - Method, URI, version, extensions and body stream carry over untouched
//! - `HeaderMap::insert` drops every prior value of the target header

use std::sync::Arc;

use axum::http::header::{HeaderName, HeaderValue};
use axum::http::Request;
use tower::Layer;

use super::error::MapperError;
use super::layer::{QueryHeaderLayer, QueryHeaderService};
use super::query::query_param;
use super::transform::Transform;

/// Immutable mapping configuration captured by a [`QueryHeaderMapper`].
#[derive(Debug, Clone)]
pub struct MappingConfig {
    /// Query parameter name as it appears in the URL.
    pub query_param: String,

    /// Target request header name.
    pub header_name: String,

    /// Optional rewrite applied to the value before it is installed.
    pub transform: Option<Transform>,
}

/// Copies a query parameter into a request header.
///
/// Cloning is cheap: every clone shares the same configuration.
#[derive(Debug, Clone)]
pub struct QueryHeaderMapper {
    config: Arc<MappingConfig>,
}

/// Build a mapper from a query parameter name, a header name and an
/// optional transform.
///
/// Construction never fails; names are only checked when a request
/// actually carries the parameter.
pub fn query_header_mapper(
    query_param: impl Into<String>,
    header_name: impl Into<String>,
    transform: Option<Transform>,
) -> QueryHeaderMapper {
    QueryHeaderMapper::from_config(MappingConfig {
        query_param: query_param.into(),
        header_name: header_name.into(),
        transform,
    })
}

impl QueryHeaderMapper {
    /// Create a mapper without a transform.
    pub fn new(query_param: impl Into<String>, header_name: impl Into<String>) -> Self {
        query_header_mapper(query_param, header_name, None)
    }

    pub fn from_config(config: MappingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Replace the transform.
    pub fn with_transform<F>(self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let mut config = Arc::unwrap_or_clone(self.config);
        config.transform = Some(Transform::new(f));
        Self::from_config(config)
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Return `request` with the mapped header installed, or unchanged when
    /// the query parameter is absent or empty.
    pub fn apply<B>(&self, request: Request<B>) -> Result<Request<B>, MapperError> {
        let config = &*self.config;

        let Some(value) = query_param(request.uri(), &config.query_param) else {
            return Ok(request);
        };

        let value = match &config.transform {
            Some(transform) => transform.apply(&value),
            None => value,
        };

        let name = HeaderName::from_bytes(config.header_name.as_bytes()).map_err(|source| {
            MapperError::InvalidHeaderName {
                name: config.header_name.clone(),
                source,
            }
        })?;
        let value = HeaderValue::from_str(&value).map_err(|source| {
            MapperError::InvalidHeaderValue {
                header: config.header_name.clone(),
                source,
            }
        })?;

        let (mut parts, body) = request.into_parts();
        parts.headers.insert(name, value);

        tracing::trace!(
            query_param = %config.query_param,
            header = %config.header_name,
            "Mapped query parameter into request header"
        );

        Ok(Request::from_parts(parts, body))
    }

    /// Tower layer applying this mapper in front of an inner service.
    pub fn layer(&self) -> QueryHeaderLayer {
        QueryHeaderLayer::new(self.clone())
    }

    /// Wrap `inner` directly.
    pub fn wrap<S>(&self, inner: S) -> QueryHeaderService<S> {
        self.layer().layer(inner)
    }
}
