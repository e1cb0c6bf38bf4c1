//! Client-side navigation for single-page applications.
//!
//! A [`Navigator`] maps exact URL paths to render callbacks, intercepts
//! in-app link clicks and history pops on its [`NavigationHost`], and keeps
//! the host's history in step with what is rendered, without page reloads.

pub mod config;
pub mod host;
pub mod navigation;
pub mod observability;
pub mod routing;
pub mod simulation;
pub mod view;

pub use config::NavigatorConfig;
pub use host::{MemoryHost, NavigationHost};
pub use navigation::{NavigationContext, NavigationError, Navigator, Redirect};
pub use simulation::Simulation;
