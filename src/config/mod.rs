//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → AppConfig (immutable)
//!     → MappingRule::to_mapper (one QueryHeaderMapper per rule)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Header and query names are passed through unchecked

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AppConfig, ListenerConfig, LogFormat, MappingRule, ObservabilityConfig, TimeoutConfig};
