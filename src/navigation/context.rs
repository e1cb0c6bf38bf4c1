//! Per-navigation context handed to route callbacks.

use std::fmt;
use std::rc::Weak;

use url::Url;

use crate::navigation::navigator::{Inner, Navigator};
use crate::navigation::types::{NavigationError, NavigationResult};

/// Capability to move the application to another route.
///
/// Holds a weak reference so a callback may keep it (e.g. for a form
/// submission that completes later) without keeping the navigator alive.
#[derive(Clone)]
pub struct Redirect {
    navigator: Weak<Inner>,
}

impl Redirect {
    pub(crate) fn new(navigator: Weak<Inner>) -> Self {
        Self { navigator }
    }

    /// Push `origin + path` onto history and navigate to it.
    pub fn to(&self, path: &str) -> NavigationResult<()> {
        let inner = self.navigator.upgrade().ok_or(NavigationError::Detached)?;
        Navigator::from_inner(inner).redirect(path).map(|_| ())
    }
}

impl fmt::Debug for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Redirect")
            .field("attached", &(self.navigator.strong_count() > 0))
            .finish()
    }
}

/// Everything a route callback receives. Built fresh for each navigation.
#[derive(Debug, Clone)]
pub struct NavigationContext {
    /// The URL being navigated to.
    pub url: Url,
    pub redirect: Redirect,
}

impl NavigationContext {
    pub(crate) fn new(url: Url, redirect: Redirect) -> Self {
        Self { url, redirect }
    }

    /// Path component of the URL.
    pub fn path(&self) -> &str {
        self.url.path()
    }
}
