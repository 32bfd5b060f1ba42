//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! routes file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → routing::table::build_router → Router
//!
//! On change:
//!     watcher.rs detects change
//!     → loader.rs loads + validates
//!     → new Router built
//!     → SharedRouter::replace (atomic swap)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ObservabilityConfig, RouteConfig, RouterConfig, TemplateSource};
pub use validation::{validate_config, ValidationError};
pub use watcher::ConfigWatcher;
