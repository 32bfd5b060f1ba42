//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Registration (startup):
//!     Template (segments or "a/{id}/b" pattern)
//!     → template.rs (validate, expand to edge keys)
//!     → trie.rs (create nodes lazily, attach factory)
//!     → Router frozen, optionally published via SharedRouter
//!
//! Resolution (per request):
//!     path
//!     → strip separators at both ends
//!     → node.rs advance() once per character, filling Captures
//!     → terminal factory(captures) → resource, or RouteNotFound
//! ```
//!
//! # Design Decisions
//! - Routes registered once, immutable while being searched
//! - No backtracking: a dynamic segment is entered on the first character
//!   after a separator and held until the next separator
//! - Deterministic: same trie and input always give the same outcome
//! - Explicit RouteNotFound rather than a silent default

pub mod captures;
pub mod node;
pub mod router;
pub mod table;
pub mod template;
pub mod trie;
pub mod types;

pub use captures::Captures;
pub use node::{EdgeKey, NodeId, NodeKind, DYNAMIC_MARKER, SEPARATOR};
pub use router::{Router, SharedRouter};
pub use table::{build_router, RouteHit};
pub use template::{Segment, Template};
pub use trie::{Factory, RouteMatch, Trie, TrieSnapshot};
pub use types::{RoutingError, RoutingResult};
