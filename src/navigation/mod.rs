//! Navigation subsystem.
//!
//! # Data Flow
//! ```text
//! Bootstrap:
//!     Navigator::register(path, callback) ...
//!     Navigator::register("default", fallback)
//!     Navigator::listen()
//!         → subscribe click + pop-state on the host
//!         → navigate(current location)
//!
//! navigate(url):
//!     parse → RouteTable lookup → fallback → callback(NavigationContext)
//!
//! redirect(path) / intercepted link click:
//!     origin + path (or href) → host.push_entry → navigate
//!
//! pop-state:
//!     host.current_location → navigate (no push)
//! ```
//!
//! # Design Decisions
//! - Each navigator owns its route table; no global state
//! - Callbacks receive capabilities (URL, redirect), never the navigator itself
//! - A missing route with no fallback is a bootstrap bug and surfaces as an error

pub mod context;
pub mod navigator;
pub mod types;

pub use context::{NavigationContext, Redirect};
pub use navigator::Navigator;
pub use types::{NavigationError, NavigationId, NavigationResult, FALLBACK_ROUTE};
