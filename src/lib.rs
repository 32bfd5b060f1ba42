//! Character-level path routing trie.
//!
//! Templates such as `customers/{id}/orders/{oid}` are registered once with a
//! factory; request paths are then resolved to the resource that factory
//! builds from the captured dynamic segments.
//!
//! ```
//! use trie_router::routing::Router;
//!
//! let mut router = Router::new();
//! router.register_pattern("customers/{id}", |c| format!("customer {}", c[0])).unwrap();
//!
//! assert_eq!(router.resolve("/customers/33245/").unwrap(), "customer 33245");
//! assert!(router.resolve("/unknown").unwrap_err().is_not_found());
//! ```

pub mod config;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use routing::{Router, RoutingError, SharedRouter, Template};
