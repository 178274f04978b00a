//! Query parameter to request header middleware for axum and tower.
//!
//! ```
//! use query_header_mapper::{query_header_mapper, Transform};
//! use axum::http::Request;
//!
//! let mapper = query_header_mapper("token", "Authorization", Some(Transform::prefix("Bearer ")));
//!
//! let req = Request::builder().uri("/?token=abc123").body(()).unwrap();
//! let req = mapper.apply(req).unwrap();
//! assert_eq!(req.headers()["authorization"], "Bearer abc123");
//! ```

pub mod config;
pub mod http;
pub mod mapper;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use mapper::{
    query_header_mapper, query_header_middleware, MapperError, QueryHeaderLayer, QueryHeaderMapper,
    QueryHeaderService, Transform,
};
