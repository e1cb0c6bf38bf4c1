//! Browser navigation host (wasm32, `web` feature).
//!
//! # Responsibilities
//! - Read `window.location.href`
//! - Append entries with `history.pushState(null, "", url)`
//! - Translate DOM `click` / `popstate` events into host handler calls
//!
//! # Design Decisions
//! - Listeners are attached to `window`, so every click in the document is seen
//! - The external marker is the `data-external` attribute
//! - Closures are owned by the host and dropped only after being detached

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use url::Url;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Event, HtmlAnchorElement, MouseEvent, Window};

use crate::host::event::{ClickEvent, ClickTarget, Modifiers};
use crate::host::{ClickHandler, HostError, ListenerId, NavigationHost, PopHandler};

const EXTERNAL_ATTRIBUTE: &str = "data-external";

struct Listener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Host backed by the browser's `window`.
pub struct BrowserHost {
    window: Window,
    listeners: RefCell<HashMap<ListenerId, Listener>>,
    next_id: Cell<u64>,
}

impl BrowserHost {
    pub fn new() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or_else(|| HostError::Unavailable("window".to_string()))?;
        Ok(Self {
            window,
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        })
    }

    fn attach(
        &self,
        event: &'static str,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<ListenerId, HostError> {
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_error)?;

        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .insert(id, Listener { event, callback });
        Ok(id)
    }

    fn detach(&self, listener: &Listener) {
        if let Err(e) = self.window.remove_event_listener_with_callback(
            listener.event,
            listener.callback.as_ref().unchecked_ref(),
        ) {
            tracing::warn!(event = listener.event, error = ?e, "Failed to remove listener");
        }
    }
}

impl NavigationHost for BrowserHost {
    fn current_location(&self) -> Result<String, HostError> {
        self.window.location().href().map_err(js_error)
    }

    fn push_entry(&self, url: &Url) -> Result<(), HostError> {
        let history = self.window.history().map_err(js_error)?;
        history
            .push_state_with_url(&JsValue::NULL, "", Some(url.as_str()))
            .map_err(js_error)
    }

    fn subscribe_click(&self, handler: ClickHandler) -> Result<ListenerId, HostError> {
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let modifiers = Modifiers {
                meta: mouse.meta_key(),
                shift: mouse.shift_key(),
                alt: mouse.alt_key(),
                ctrl: mouse.ctrl_key(),
            };
            let mut click = ClickEvent::new(mouse.button(), modifiers, click_target(&event));
            handler(&mut click);
            if click.default_prevented() {
                event.prevent_default();
            }
        });
        self.attach("click", callback)
    }

    fn subscribe_pop(&self, handler: PopHandler) -> Result<ListenerId, HostError> {
        let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| handler());
        self.attach("popstate", callback)
    }

    fn unsubscribe(&self, id: ListenerId) {
        let removed = self.listeners.borrow_mut().remove(&id);
        if let Some(listener) = removed {
            self.detach(&listener);
        }
    }
}

impl Drop for BrowserHost {
    fn drop(&mut self) {
        let listeners: Vec<Listener> = self.listeners.get_mut().drain().map(|(_, l)| l).collect();
        for listener in &listeners {
            self.detach(listener);
        }
    }
}

fn click_target(event: &Event) -> ClickTarget {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return ClickTarget::element("");
    };

    ClickTarget {
        tag: element.tag_name(),
        href: element.dyn_ref::<HtmlAnchorElement>().map(HtmlAnchorElement::href),
        external: element.has_attribute(EXTERNAL_ATTRIBUTE),
    }
}

fn js_error(value: JsValue) -> HostError {
    HostError::Rejected(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
