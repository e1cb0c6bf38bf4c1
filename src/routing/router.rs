//! Route lookup.
//!
//! # Responsibilities
//! - Store one render callback per exact path
//! - Look up the callback for a path, falling back to `"default"`
//! - Report an explicit no-match when neither exists
//!
//! # Design Decisions
//! - O(1) exact lookup via HashMap, no prefix or pattern matching
//! - Last registration for a path wins
//! - Handlers are cloned out of the table before they run, so a running
//!   callback never holds a borrow of the table

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::navigation::context::NavigationContext;
use crate::navigation::types::FALLBACK_ROUTE;

/// A render callback bound to a route.
pub type RouteHandler = Rc<dyn Fn(NavigationContext)>;

/// Which table entry answered a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteKey {
    /// The path matched exactly.
    Exact(String),
    /// The fallback route answered.
    Fallback,
}

impl RouteKey {
    /// Registered key as written at registration time.
    pub fn as_str(&self) -> &str {
        match self {
            RouteKey::Exact(path) => path,
            RouteKey::Fallback => FALLBACK_ROUTE,
        }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A successful lookup.
#[derive(Clone)]
pub struct ResolvedRoute {
    pub key: RouteKey,
    pub handler: RouteHandler,
}

/// Exact-match mapping from path to render callback.
#[derive(Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, RouteHandler>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `handler` under `path`. Returns true if an earlier handler was replaced.
    pub fn insert(&mut self, path: impl Into<String>, handler: RouteHandler) -> bool {
        self.routes.insert(path.into(), handler).is_some()
    }

    /// Resolve `path` to its handler, or the fallback.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute> {
        if let Some(handler) = self.routes.get(path) {
            return Some(ResolvedRoute {
                key: RouteKey::Exact(path.to_string()),
                handler: handler.clone(),
            });
        }

        self.routes.get(FALLBACK_ROUTE).map(|handler| ResolvedRoute {
            key: RouteKey::Fallback,
            handler: handler.clone(),
        })
    }

    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    pub fn has_fallback(&self) -> bool {
        self.contains(FALLBACK_ROUTE)
    }

    /// Registered keys, sorted for stable output.
    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<String> = self.routes.keys().cloned().collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTable")
            .field("paths", &self.paths())
            .finish()
    }
}
