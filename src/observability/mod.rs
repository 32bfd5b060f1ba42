//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! routing + config produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (resolution and registration counters)
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted messages
//! - Metrics are cheap (atomic increments) and optional

pub mod logging;
pub mod metrics;
