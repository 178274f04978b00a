//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! mapper / http server events
//!     → tracing macros (structured fields, never header values)
//!     → logging.rs (EnvFilter + fmt layer, pretty or JSON)
//!     → stdout
//! ```

pub mod logging;

pub use logging::init_logging;
