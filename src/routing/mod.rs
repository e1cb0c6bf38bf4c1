//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Host click
//!     → matcher.rs (external marker, button, modifiers, link tag)
//!     → Intercept(href) or PassThrough
//!
//! URL path
//!     → router.rs (exact lookup in RouteTable)
//!     → fallback "default" entry if absent
//!     → Return: ResolvedRoute or no match
//! ```
//!
//! # Design Decisions
//! - Routes registered at bootstrap, read on every navigation
//! - Exact string keys, no patterns or parameters
//! - Deterministic: same path always resolves to the same callback

pub mod matcher;
pub mod router;

pub use matcher::{Interception, LinkInterceptor};
pub use router::{ResolvedRoute, RouteHandler, RouteKey, RouteTable};
