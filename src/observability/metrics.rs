//! Router metrics.
//!
//! # Metrics
//! - `router_resolutions_total` (counter): resolutions by outcome (`hit`, `miss`)
//! - `router_registrations_total` (counter): templates registered, by `replaced`
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host process installs an
//!   exporter if it wants one
//! - With no recorder installed every call is a no-op

use metrics::counter;

/// Record the outcome of one path resolution.
pub fn record_resolution(hit: bool) {
    let outcome = if hit { "hit" } else { "miss" };
    counter!("router_resolutions_total", "outcome" => outcome).increment(1);
}

/// Record one template registration.
pub fn record_registration(replaced: bool) {
    let replaced = if replaced { "true" } else { "false" };
    counter!("router_registrations_total", "replaced" => replaced).increment(1);
}
