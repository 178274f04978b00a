//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::mapper::{query_header_mapper, QueryHeaderMapper, Transform};

/// Root configuration for the echo server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Query-to-header rules, applied in order.
    pub mappings: Vec<MappingRule>,
}

impl AppConfig {
    /// Build one mapper per configured rule.
    pub fn mappers(&self) -> Vec<QueryHeaderMapper> {
        self.mappings.iter().map(MappingRule::to_mapper).collect()
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level or `EnvFilter` directive (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format for log lines.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
        }
    }
}

/// A single query parameter to header rule.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct MappingRule {
    /// Query parameter to read.
    pub query_param: String,

    /// Header to set.
    pub header_name: String,

    /// Prepended to the value (e.g., "Bearer ").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Appended to the value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

impl MappingRule {
    pub fn to_mapper(&self) -> QueryHeaderMapper {
        query_header_mapper(
            self.query_param.clone(),
            self.header_name.clone(),
            self.transform(),
        )
    }

    fn transform(&self) -> Option<Transform> {
        let prefix = self.prefix.clone().filter(|p| !p.is_empty());
        let suffix = self.suffix.clone().filter(|s| !s.is_empty());

        match (prefix, suffix) {
            (None, None) => None,
            (Some(prefix), None) => Some(Transform::prefix(prefix)),
            (None, Some(suffix)) => Some(Transform::suffix(suffix)),
            (Some(prefix), Some(suffix)) => {
                Some(Transform::new(move |value| format!("{prefix}{value}{suffix}")))
            }
        }
    }
}
