//! Value transforms applied before a query value becomes a header.

use std::fmt;
use std::sync::Arc;

/// A pure `&str -> String` rewrite of the extracted query value.
#[derive(Clone)]
pub struct Transform(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl Transform {
    /// Wrap an arbitrary function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Prepend a fixed string, e.g. an auth scheme such as `"Bearer "`.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self::new(move |value| format!("{prefix}{value}"))
    }

    /// Append a fixed string.
    pub fn suffix(suffix: impl Into<String>) -> Self {
        let suffix = suffix.into();
        Self::new(move |value| format!("{value}{suffix}"))
    }

    pub fn apply(&self, value: &str) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Transform(..)")
    }
}
