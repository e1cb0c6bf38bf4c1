//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! navigation/, routing/, simulation/ produce:
//!     → logging.rs (structured log events, navigation spans)
//!     → metrics.rs (counters)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → whatever metrics recorder the embedding app installs
//! ```
//!
//! # Design Decisions
//! - Every navigation runs inside a span carrying a `navigation_id`
//! - Metrics are cheap (facade calls, no-op without a recorder)

pub mod logging;
pub mod metrics;
