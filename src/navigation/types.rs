//! Navigation identifiers and error definitions.

use std::fmt;

use thiserror::Error;
use uuid::Uuid;

use crate::host::HostError;

/// Route key holding the fallback callback.
pub const FALLBACK_ROUTE: &str = "default";

/// Correlation ID attached to every navigation span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavigationId(pub Uuid);

impl NavigationId {
    /// Generate a fresh random ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NavigationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NavigationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Errors that can occur while navigating.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// The URL handed to `navigate` (or built by `redirect`) did not parse.
    #[error("Invalid URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// Neither the path nor the fallback route is registered.
    #[error("No route registered for '{path}' and no '{fallback}' fallback", fallback = FALLBACK_ROUTE)]
    Unrouted { path: String },

    /// The host environment refused an operation.
    #[error("Host error: {0}")]
    Host(#[from] HostError),

    /// A stored redirect capability outlived its navigator.
    #[error("Navigator no longer exists")]
    Detached,
}

impl NavigationError {
    /// Short label used as a metrics dimension.
    pub fn kind(&self) -> &'static str {
        match self {
            NavigationError::InvalidUrl { .. } => "invalid_url",
            NavigationError::Unrouted { .. } => "unrouted",
            NavigationError::Host(_) => "host",
            NavigationError::Detached => "detached",
        }
    }
}

/// Result type for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;
