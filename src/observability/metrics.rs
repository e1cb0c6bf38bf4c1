//! Navigation metrics.
//!
//! # Metrics
//! - `navigator_navigations_total` (counter): dispatched navigations by route key
//! - `navigator_navigation_errors_total` (counter): failed navigations by kind
//! - `navigator_clicks_total` (counter): host clicks by interception decision
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; without an installed recorder every call is a no-op
//! - No exporter: the embedding application decides where metrics go

/// Record a dispatched navigation.
pub fn record_navigation(route: &str) {
    ::metrics::counter!("navigator_navigations_total", "route" => route.to_string()).increment(1);
}

/// Record a failed navigation.
pub fn record_navigation_error(kind: &'static str) {
    ::metrics::counter!("navigator_navigation_errors_total", "kind" => kind).increment(1);
}

/// Record a click and whether it was intercepted.
pub fn record_click(decision: &'static str) {
    ::metrics::counter!("navigator_clicks_total", "decision" => decision).increment(1);
}
