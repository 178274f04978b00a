//! Query-to-header mapping subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → query.rs (read first value of the configured query parameter)
//!     → transform.rs (optional value rewrite, e.g. "Bearer " prefix)
//!     → mapping.rs (rebuild request with the header set)
//!     → middleware.rs / layer.rs (hand the new request to the next stage)
//! ```
//!
//! # Design Decisions
//! - Configuration is immutable once built and shared via Arc
//! - Requests are consumed and rebuilt, never patched in place
//! - Empty query values count as absent
//! - Target header is overwritten, never appended
//! - Names are not validated at construction; bad names fail per request

pub mod error;
pub mod layer;
pub mod mapping;
pub mod middleware;
pub mod query;
pub mod transform;

pub use error::MapperError;
pub use layer::{QueryHeaderLayer, QueryHeaderService};
pub use mapping::{query_header_mapper, MappingConfig, QueryHeaderMapper};
pub use middleware::{apply_mappings, query_header_middleware};
pub use query::query_param;
pub use transform::Transform;
