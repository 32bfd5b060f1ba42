//! Route registration and resolution.
//!
//! # Responsibilities
//! - Register templates with their resource factories
//! - Resolve request paths to resources or an explicit `RouteNotFound`
//! - Log and count both operations
//!
//! # Design Decisions
//! - Registration needs `&mut self`; resolution needs only `&self`, so a
//!   built router can be shared across threads without locks
//! - Rebuilding at runtime means building a new router and swapping it into
//!   a [`SharedRouter`]; a router being searched is never mutated

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::observability::metrics;
use crate::routing::captures::Captures;
use crate::routing::node::SEPARATOR;
use crate::routing::template::Template;
use crate::routing::trie::{RouteMatch, Trie, TrieSnapshot};
use crate::routing::types::RoutingResult;

/// Path router producing resources of type `R`.
#[derive(Debug)]
pub struct Router<R> {
    trie: Trie<R>,
}

impl<R> Default for Router<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Router<R> {
    pub fn new() -> Self {
        Self::with_separator(SEPARATOR)
    }

    pub fn with_separator(separator: char) -> Self {
        Self {
            trie: Trie::with_separator(separator),
        }
    }

    pub fn separator(&self) -> char {
        self.trie.separator()
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Register a template. Registering the same template twice keeps the
    /// last factory.
    pub fn register<F>(&mut self, template: Template, factory: F) -> RoutingResult<()>
    where
        F: Fn(&Captures) -> R + Send + Sync + 'static,
    {
        let rendered = template.to_string();
        match self.trie.insert(template, factory) {
            Ok(outcome) => {
                if outcome.replaced {
                    tracing::warn!(template = %rendered, "Template registered again, replacing factory");
                } else {
                    tracing::debug!(
                        template = %rendered,
                        nodes_created = outcome.nodes_created,
                        "Template registered"
                    );
                }
                metrics::record_registration(outcome.replaced);
                Ok(())
            }
            Err(e) => {
                tracing::debug!(template = %rendered, error = %e, "Template rejected");
                Err(e)
            }
        }
    }

    /// Parse a brace pattern with this router's separator and register it.
    pub fn register_pattern<F>(&mut self, pattern: &str, factory: F) -> RoutingResult<()>
    where
        F: Fn(&Captures) -> R + Send + Sync + 'static,
    {
        let template = Template::parse(pattern, self.separator())?;
        self.register(template, factory)
    }

    /// Match `path` without building the resource.
    pub fn lookup(&self, path: &str) -> RoutingResult<RouteMatch<'_, R>> {
        self.trie.lookup(path)
    }

    /// Resolve `path` to a resource.
    pub fn resolve(&self, path: &str) -> RoutingResult<R> {
        match self.trie.lookup(path) {
            Ok(matched) => {
                tracing::debug!(
                    path = %path,
                    template = %matched.template(),
                    captures = matched.captures().len(),
                    "Route matched"
                );
                metrics::record_resolution(true);
                Ok(matched.resolve())
            }
            Err(e) => {
                tracing::debug!(path = %path, "No route matched");
                metrics::record_resolution(false);
                Err(e)
            }
        }
    }

    pub fn templates(&self) -> impl Iterator<Item = &Template> + '_ {
        self.trie.templates()
    }

    pub fn snapshot(&self) -> TrieSnapshot {
        self.trie.snapshot()
    }
}

/// A router handle whose contents can be replaced atomically.
///
/// Readers take a cheap snapshot with [`SharedRouter::load`]; writers build a
/// complete new [`Router`] and publish it with [`SharedRouter::replace`].
#[derive(Debug)]
pub struct SharedRouter<R> {
    inner: Arc<ArcSwap<Router<R>>>,
}

impl<R> Clone for SharedRouter<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R> SharedRouter<R> {
    pub fn new(router: Router<R>) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(router)),
        }
    }

    /// Current router. Stays valid even if a replacement is published later.
    pub fn load(&self) -> Arc<Router<R>> {
        self.inner.load_full()
    }

    /// Publish a new router, returning the one it replaced.
    pub fn replace(&self, router: Router<R>) -> Arc<Router<R>> {
        let routes = router.len();
        let previous = self.inner.swap(Arc::new(router));
        tracing::info!(
            routes,
            previous_routes = previous.len(),
            "Router replaced"
        );
        previous
    }

    pub fn resolve(&self, path: &str) -> RoutingResult<R> {
        self.inner.load().resolve(path)
    }
}
