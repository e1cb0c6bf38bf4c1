//! In-memory navigation host.
//!
//! # Responsibilities
//! - Hold a browser-like history stack with a cursor
//! - Deliver clicks and back/forward pops to subscribed handlers
//! - Model the browser's native link handling when a click is not intercepted
//!
//! # Design Decisions
//! - Pushing truncates forward history (browser semantics)
//! - Handler lists are cloned before dispatch so handlers may push or unsubscribe
//! - A handler removed mid-dispatch is skipped for the rest of that event
//! - Cross-origin pushes are rejected, as `history.pushState` does
//! - Native loads move the cursor but fire no pop event

use std::cell::{Cell, RefCell};

use url::Url;

use crate::host::event::{ClickEvent, PRIMARY_BUTTON};
use crate::host::{ClickHandler, HostError, ListenerId, NavigationHost, PopHandler};

/// What happened to a click after every handler ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickOutcome {
    /// A handler suppressed native handling.
    pub default_prevented: bool,
    /// URL the host loaded natively (full page load), if any.
    pub native_load: Option<Url>,
}

/// A host backed by plain memory, suitable for tests and simulation.
pub struct MemoryHost {
    entries: RefCell<Vec<Url>>,
    cursor: Cell<usize>,
    pushes: Cell<usize>,
    native_loads: RefCell<Vec<Url>>,
    click_handlers: RefCell<Vec<(ListenerId, ClickHandler)>>,
    pop_handlers: RefCell<Vec<(ListenerId, PopHandler)>>,
    next_id: Cell<u64>,
}

impl MemoryHost {
    /// Create a host whose address bar shows `initial`.
    pub fn new(initial: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(initial)?;
        Ok(Self {
            entries: RefCell::new(vec![url]),
            cursor: Cell::new(0),
            pushes: Cell::new(0),
            native_loads: RefCell::new(Vec::new()),
            click_handlers: RefCell::new(Vec::new()),
            pop_handlers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    /// Current address bar contents.
    pub fn location(&self) -> Url {
        self.entries.borrow()[self.cursor.get()].clone()
    }

    /// All history entries, oldest first.
    pub fn entries(&self) -> Vec<Url> {
        self.entries.borrow().clone()
    }

    /// Number of entries appended through `push_entry`.
    pub fn push_count(&self) -> usize {
        self.pushes.get()
    }

    /// URLs loaded natively because no handler intercepted the click.
    pub fn native_loads(&self) -> Vec<Url> {
        self.native_loads.borrow().clone()
    }

    /// Number of live click and pop subscriptions.
    pub fn listener_count(&self) -> usize {
        self.click_handlers.borrow().len() + self.pop_handlers.borrow().len()
    }

    /// Deliver a click to every subscribed handler.
    pub fn click(&self, mut event: ClickEvent) -> ClickOutcome {
        let handlers = self.click_handlers.borrow().clone();
        for (id, handler) in handlers {
            if is_subscribed(&self.click_handlers, id) {
                handler(&mut event);
            }
        }

        if event.default_prevented() {
            return ClickOutcome {
                default_prevented: true,
                native_load: None,
            };
        }

        // Modified or non-primary clicks open elsewhere; this tab stays put.
        let same_tab = event.button == PRIMARY_BUTTON && !event.modifiers.any();
        let native_load = match (&event.target.href, event.target.is_link() && same_tab) {
            (Some(href), true) => self.location().join(href).ok(),
            _ => None,
        };

        if let Some(url) = &native_load {
            tracing::debug!(url = %url, "Native page load");
            self.append(url.clone());
            self.native_loads.borrow_mut().push(url.clone());
        }

        ClickOutcome {
            default_prevented: false,
            native_load,
        }
    }

    /// Move one entry back. Returns false at the start of history.
    pub fn back(&self) -> bool {
        let cursor = self.cursor.get();
        if cursor == 0 {
            return false;
        }
        self.cursor.set(cursor - 1);
        self.dispatch_pop();
        true
    }

    /// Move one entry forward. Returns false at the end of history.
    pub fn forward(&self) -> bool {
        let cursor = self.cursor.get();
        if cursor + 1 >= self.entries.borrow().len() {
            return false;
        }
        self.cursor.set(cursor + 1);
        self.dispatch_pop();
        true
    }

    fn dispatch_pop(&self) {
        let handlers = self.pop_handlers.borrow().clone();
        for (id, handler) in handlers {
            if is_subscribed(&self.pop_handlers, id) {
                handler();
            }
        }
    }

    fn append(&self, url: Url) {
        let mut entries = self.entries.borrow_mut();
        entries.truncate(self.cursor.get() + 1);
        entries.push(url);
        self.cursor.set(entries.len() - 1);
    }

    fn next_listener_id(&self) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        ListenerId(id)
    }
}

fn is_subscribed<H>(handlers: &RefCell<Vec<(ListenerId, H)>>, id: ListenerId) -> bool {
    handlers.borrow().iter().any(|(l, _)| *l == id)
}

impl NavigationHost for MemoryHost {
    fn current_location(&self) -> Result<String, HostError> {
        Ok(self.location().to_string())
    }

    fn push_entry(&self, url: &Url) -> Result<(), HostError> {
        let location = self.location();
        if url.origin() != location.origin() {
            return Err(HostError::Rejected(format!(
                "cannot push {url} from origin {}",
                location.origin().ascii_serialization()
            )));
        }
        self.append(url.clone());
        self.pushes.set(self.pushes.get() + 1);
        Ok(())
    }

    fn subscribe_click(&self, handler: ClickHandler) -> Result<ListenerId, HostError> {
        let id = self.next_listener_id();
        self.click_handlers.borrow_mut().push((id, handler));
        Ok(id)
    }

    fn subscribe_pop(&self, handler: PopHandler) -> Result<ListenerId, HostError> {
        let id = self.next_listener_id();
        self.pop_handlers.borrow_mut().push((id, handler));
        Ok(id)
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.click_handlers.borrow_mut().retain(|(l, _)| *l != id);
        self.pop_handlers.borrow_mut().retain(|(l, _)| *l != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::event::{ClickTarget, Modifiers};
    use std::rc::Rc;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_push_truncates_forward_history() {
        let host = MemoryHost::new("http://localhost/").unwrap();
        host.push_entry(&url("http://localhost/a")).unwrap();
        host.push_entry(&url("http://localhost/b")).unwrap();
        assert!(host.back());
        assert_eq!(host.location().path(), "/a");

        host.push_entry(&url("http://localhost/c")).unwrap();
        let paths: Vec<String> = host.entries().iter().map(|u| u.path().to_string()).collect();
        assert_eq!(paths, vec!["/", "/a", "/c"]);
        assert!(!host.forward());
        assert_eq!(host.push_count(), 3);
    }

    #[test]
    fn test_back_and_forward_bounds() {
        let host = MemoryHost::new("http://localhost/").unwrap();
        assert!(!host.back());
        assert!(!host.forward());
    }

    #[test]
    fn test_pop_dispatch_and_unsubscribe() {
        let host = MemoryHost::new("http://localhost/").unwrap();
        host.push_entry(&url("http://localhost/a")).unwrap();

        let pops = Rc::new(Cell::new(0));
        let counter = pops.clone();
        let id = host
            .subscribe_pop(Rc::new(move || counter.set(counter.get() + 1)))
            .unwrap();

        host.back();
        assert_eq!(pops.get(), 1);

        host.unsubscribe(id);
        host.forward();
        assert_eq!(pops.get(), 1);
        assert_eq!(host.listener_count(), 0);

        // Unknown IDs are ignored.
        host.unsubscribe(ListenerId(999));
    }

    #[test]
    fn test_unintercepted_link_loads_natively() {
        let host = MemoryHost::new("http://localhost/").unwrap();
        let outcome = host.click(ClickEvent::primary(ClickTarget::link("/about")));
        assert!(!outcome.default_prevented);
        assert_eq!(outcome.native_load, Some(url("http://localhost/about")));
        assert_eq!(host.location().path(), "/about");
        assert_eq!(host.push_count(), 0);
    }

    #[test]
    fn test_modified_click_stays_in_tab() {
        let host = MemoryHost::new("http://localhost/").unwrap();
        let event = ClickEvent::primary(ClickTarget::link("/about")).with_modifiers(Modifiers {
            ctrl: true,
            ..Modifiers::none()
        });
        let outcome = host.click(event);
        assert_eq!(outcome.native_load, None);
        assert_eq!(host.location().path(), "/");
    }

    #[test]
    fn test_prevented_click_does_not_load() {
        let host = MemoryHost::new("http://localhost/").unwrap();
        host.subscribe_click(Rc::new(|event: &mut ClickEvent| event.prevent_default()))
            .unwrap();
        let outcome = host.click(ClickEvent::primary(ClickTarget::link("/about")));
        assert!(outcome.default_prevented);
        assert_eq!(outcome.native_load, None);
        assert!(host.native_loads().is_empty());
    }

    #[test]
    fn test_cross_origin_push_is_rejected() {
        let host = MemoryHost::new("http://localhost/").unwrap();
        let err = host
            .push_entry(&url("http://localhostx.evil.example/"))
            .unwrap_err();
        assert!(matches!(err, HostError::Rejected(_)));
        assert_eq!(host.entries(), vec![url("http://localhost/")]);
        assert_eq!(host.push_count(), 0);

        // Same host on another port is another origin.
        assert!(host.push_entry(&url("http://localhost:9000/")).is_err());
    }

    #[test]
    fn test_handler_removed_mid_dispatch_is_skipped() {
        let host = Rc::new(MemoryHost::new("http://localhost/").unwrap());
        host.push_entry(&url("http://localhost/a")).unwrap();

        let later = Rc::new(Cell::new(None));
        let fired = Rc::new(Cell::new(0));

        let (h, slot) = (host.clone(), later.clone());
        host.subscribe_pop(Rc::new(move || {
            if let Some(id) = slot.get() {
                h.unsubscribe(id);
            }
        }))
        .unwrap();
        let counter = fired.clone();
        let id = host
            .subscribe_pop(Rc::new(move || counter.set(counter.get() + 1)))
            .unwrap();
        later.set(Some(id));

        host.back();
        assert_eq!(fired.get(), 0);
        assert_eq!(host.listener_count(), 1);
    }

    #[test]
    fn test_click_handler_removed_mid_dispatch_is_skipped() {
        let host = Rc::new(MemoryHost::new("http://localhost/").unwrap());
        let later = Rc::new(Cell::new(None));

        let (h, slot) = (host.clone(), later.clone());
        host.subscribe_click(Rc::new(move |_: &mut ClickEvent| {
            if let Some(id) = slot.get() {
                h.unsubscribe(id);
            }
        }))
        .unwrap();
        let id = host
            .subscribe_click(Rc::new(|event: &mut ClickEvent| event.prevent_default()))
            .unwrap();
        later.set(Some(id));

        let outcome = host.click(ClickEvent::primary(ClickTarget::link("/about")));
        assert!(!outcome.default_prevented);
        assert_eq!(outcome.native_load, Some(url("http://localhost/about")));
    }
}
