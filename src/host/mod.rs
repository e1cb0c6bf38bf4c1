//! Navigation host subsystem.
//!
//! # Data Flow
//! ```text
//! Host environment (browser window, in-memory simulator)
//!     → click / pop-state events
//!     → subscribed handlers (installed by Navigator::listen)
//!     → Navigator resolves and dispatches
//!
//! Navigator → host:
//!     current_location()  read the address bar
//!     push_entry(url)     append a history entry, no reload
//! ```
//!
//! # Design Decisions
//! - The host owns the history stack; the navigator only appends and reacts
//! - Subscriptions are identified by `ListenerId`; unknown IDs unsubscribe as a no-op
//! - Handlers are `Rc` closures: everything runs on one event-loop thread

pub mod event;
pub mod memory;
#[cfg(feature = "web")]
pub mod web;

use std::rc::Rc;

use thiserror::Error;
use url::Url;

pub use event::{ClickEvent, ClickTarget, Modifiers};
pub use memory::{ClickOutcome, MemoryHost};
#[cfg(feature = "web")]
pub use web::BrowserHost;

/// Handler invoked for every click the host delivers.
pub type ClickHandler = Rc<dyn Fn(&mut ClickEvent)>;

/// Handler invoked when the host's history pointer moves (back/forward).
pub type PopHandler = Rc<dyn Fn()>;

/// Identifies one subscription on a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Errors raised by a host environment.
#[derive(Debug, Error)]
pub enum HostError {
    /// A host service (window, history, location) is missing.
    #[error("Host service unavailable: {0}")]
    Unavailable(String),

    /// The host rejected the operation.
    #[error("Host rejected operation: {0}")]
    Rejected(String),
}

/// Services the navigator consumes from its environment.
pub trait NavigationHost {
    /// The full URL currently shown in the address bar.
    fn current_location(&self) -> Result<String, HostError>;

    /// Append a history entry for `url` without reloading.
    fn push_entry(&self, url: &Url) -> Result<(), HostError>;

    fn subscribe_click(&self, handler: ClickHandler) -> Result<ListenerId, HostError>;

    fn subscribe_pop(&self, handler: PopHandler) -> Result<ListenerId, HostError>;

    /// Remove a subscription. Unknown IDs are ignored.
    fn unsubscribe(&self, id: ListenerId);
}
