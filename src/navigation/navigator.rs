//! The navigator: soft navigation without page reloads.
//!
//! # Responsibilities
//! - Register route callbacks
//! - Resolve URLs to callbacks and invoke them with a fresh context
//! - Keep host history in step with in-app navigation (redirects, link clicks)
//! - Subscribe to and unsubscribe from host events
//!
//! # Design Decisions
//! - Single-threaded: `Rc` + `RefCell`, no locks, `!Send`
//! - No borrow is held while a callback runs, so callbacks may redirect synchronously
//! - Host handlers hold a weak reference; dropping the last navigator handle unsubscribes
//! - Errors from direct calls are returned; errors from host events are logged
//!
//! # Known Hazard
//! Navigation cannot be cancelled. If a callback starts asynchronous work and a
//! later navigation replaces the view before it completes, the completion still
//! runs against the old view. Callbacks that care must check for staleness themselves.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use url::Url;

use crate::host::{ClickEvent, ClickHandler, ListenerId, NavigationHost, PopHandler};
use crate::navigation::context::{NavigationContext, Redirect};
use crate::navigation::types::{NavigationError, NavigationId, NavigationResult};
use crate::observability::metrics;
use crate::routing::{Interception, LinkInterceptor, RouteKey, RouteTable};

pub(crate) struct Inner {
    host: Rc<dyn NavigationHost>,
    routes: RefCell<RouteTable>,
    interceptor: LinkInterceptor,
    listeners: RefCell<Vec<ListenerId>>,
}

impl Drop for Inner {
    fn drop(&mut self) {
        for id in self.listeners.get_mut().drain(..) {
            self.host.unsubscribe(id);
        }
    }
}

/// Client-side router bound to one navigation host.
///
/// Cloning yields another handle to the same navigator.
#[derive(Clone)]
pub struct Navigator {
    inner: Rc<Inner>,
}

impl Navigator {
    /// Create a navigator with an empty route table.
    pub fn new(host: Rc<dyn NavigationHost>) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                routes: RefCell::new(RouteTable::new()),
                interceptor: LinkInterceptor::new(),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub(crate) fn from_inner(inner: Rc<Inner>) -> Self {
        Self { inner }
    }

    /// Store `callback` for `path`, replacing any earlier one.
    ///
    /// `"default"` registers the fallback used when no path matches.
    pub fn register<F>(&self, path: &str, callback: F) -> &Self
    where
        F: Fn(NavigationContext) + 'static,
    {
        let replaced = self.inner.routes.borrow_mut().insert(path, Rc::new(callback));
        if replaced {
            tracing::debug!(path, "Route callback replaced");
        }
        if self.is_listening() {
            tracing::debug!(path, "Route registered after listen()");
        }
        self
    }

    /// Registered route keys, sorted.
    pub fn routes(&self) -> Vec<String> {
        self.inner.routes.borrow().paths()
    }

    /// True while host subscriptions are installed.
    pub fn is_listening(&self) -> bool {
        !self.inner.listeners.borrow().is_empty()
    }

    /// Parse `url`, resolve its path and invoke the matching callback.
    pub fn navigate(&self, url: &str) -> NavigationResult<RouteKey> {
        let url = parse_url(url).inspect_err(record_error)?;
        self.dispatch(url)
    }

    /// Navigate to `origin + path`, appending one history entry first.
    pub fn redirect(&self, path: &str) -> NavigationResult<RouteKey> {
        let result = self.push_and_dispatch(|location| {
            let origin = location.origin().ascii_serialization();
            parse_url(&format!("{origin}{path}"))
        });
        if let Err(e) = &result {
            tracing::warn!(path, error = %e, "Redirect failed");
        }
        result
    }

    /// Subscribe to host clicks and pops, then render the current location.
    pub fn listen(&self) -> NavigationResult<RouteKey> {
        if self.is_listening() {
            tracing::warn!("listen() called while already listening; events will be handled twice");
        }

        let weak = Rc::downgrade(&self.inner);
        let on_click: ClickHandler = Rc::new(move |event: &mut ClickEvent| {
            if let Some(navigator) = upgrade(&weak) {
                navigator.handle_click(event);
            }
        });

        let weak = Rc::downgrade(&self.inner);
        let on_pop: PopHandler = Rc::new(move || {
            if let Some(navigator) = upgrade(&weak) {
                navigator.handle_pop();
            }
        });

        let click_id = self.inner.host.subscribe_click(on_click)?;
        self.inner.listeners.borrow_mut().push(click_id);
        let pop_id = self.inner.host.subscribe_pop(on_pop)?;
        self.inner.listeners.borrow_mut().push(pop_id);

        tracing::info!(routes = self.inner.routes.borrow().len(), "Navigator listening");

        let location = self.inner.host.current_location()?;
        self.navigate(&location)
    }

    /// Remove every host subscription. Routes are kept.
    pub fn close(&self) {
        let ids: Vec<ListenerId> = self.inner.listeners.borrow_mut().drain(..).collect();
        if ids.is_empty() {
            return;
        }
        for id in ids {
            self.inner.host.unsubscribe(id);
        }
        tracing::info!("Navigator closed");
    }

    fn dispatch(&self, url: Url) -> NavigationResult<RouteKey> {
        let id = NavigationId::new();
        let span = tracing::debug_span!("navigate", navigation_id = %id, path = url.path());
        let _enter = span.enter();

        let resolved = self.inner.routes.borrow().resolve(url.path());
        let Some(resolved) = resolved else {
            let err = NavigationError::Unrouted {
                path: url.path().to_string(),
            };
            tracing::error!(error = %err, "Navigation has no route; register a \"default\" fallback");
            record_error(&err);
            return Err(err);
        };

        tracing::debug!(route = %resolved.key, url = %url, "Dispatching route");
        metrics::record_navigation(resolved.key.as_str());

        let context = NavigationContext::new(url, Redirect::new(Rc::downgrade(&self.inner)));
        (resolved.handler)(context);
        Ok(resolved.key)
    }

    /// Build the target from the current location, push it, then dispatch.
    fn push_and_dispatch<F>(&self, target: F) -> NavigationResult<RouteKey>
    where
        F: FnOnce(&Url) -> NavigationResult<Url>,
    {
        let location = parse_url(&self.inner.host.current_location()?)?;
        let url = target(&location).inspect_err(record_error)?;
        self.inner.host.push_entry(&url).inspect_err(|e| {
            metrics::record_navigation_error("host");
            tracing::error!(error = %e, url = %url, "History push failed");
        })?;
        self.dispatch(url)
    }

    fn handle_click(&self, event: &mut ClickEvent) {
        let decision = self.inner.interceptor.classify(event);
        metrics::record_click(decision.label());

        let Interception::Intercept(href) = decision else {
            tracing::trace!(tag = %event.target.tag, "Click left to host");
            return;
        };

        event.prevent_default();
        let result = self.push_and_dispatch(|location| {
            location.join(&href).map_err(|source| NavigationError::InvalidUrl {
                input: href.clone(),
                source,
            })
        });
        if let Err(e) = result {
            tracing::error!(href = %href, error = %e, "Link navigation failed");
        }
    }

    fn handle_pop(&self) {
        let result = self
            .inner
            .host
            .current_location()
            .map_err(NavigationError::from)
            .and_then(|location| self.navigate(&location));
        if let Err(e) = result {
            tracing::error!(error = %e, "History navigation failed");
        }
    }
}

fn upgrade(weak: &Weak<Inner>) -> Option<Navigator> {
    weak.upgrade().map(Navigator::from_inner)
}

fn parse_url(input: &str) -> NavigationResult<Url> {
    Url::parse(input).map_err(|source| NavigationError::InvalidUrl {
        input: input.to_string(),
        source,
    })
}

fn record_error(err: &NavigationError) {
    metrics::record_navigation_error(err.kind());
}
