//! Character-level routing trie.
//!
//! # Responsibilities
//! - Store registered templates as paths of single-character edges
//! - Resolve a concrete path to the route registered at its terminal node
//! - Collect dynamic segments into [`Captures`] along the way
//!
//! # Design Decisions
//! - Arena of nodes indexed by [`NodeId`]; nodes are never removed
//! - Templates are validated before any node is created
//! - Resolution never backtracks: one `advance` per input character
//! - A path that ends on a node without a route is a miss, not an error

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::routing::captures::Captures;
use crate::routing::node::{EdgeKey, Node, NodeId, NodeKind, SEPARATOR};
use crate::routing::template::Template;
use crate::routing::types::{RoutingError, RoutingResult};

/// Builds a resource from the captures of a matched path.
pub type Factory<R> = Arc<dyn Fn(&Captures) -> R + Send + Sync>;

/// A registered template and the factory attached to its terminal node.
pub struct Route<R> {
    template: Template,
    factory: Factory<R>,
}

impl<R> Route<R> {
    pub fn template(&self) -> &Template {
        &self.template
    }
}

impl<R> Clone for Route<R> {
    fn clone(&self) -> Self {
        Self {
            template: self.template.clone(),
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<R> fmt::Debug for Route<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("template", &self.template.to_string())
            .finish()
    }
}

/// Successful lookup: the matched route plus the captured segments.
#[derive(Debug)]
pub struct RouteMatch<'a, R> {
    route: &'a Route<R>,
    captures: Captures,
}

impl<'a, R> RouteMatch<'a, R> {
    pub fn template(&self) -> &'a Template {
        &self.route.template
    }

    pub fn captures(&self) -> &Captures {
        &self.captures
    }

    /// Invoke the route's factory with the captures.
    pub fn resolve(self) -> R {
        (self.route.factory)(&self.captures)
    }
}

/// Outcome of one `insert`, used for logging by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    pub terminal: NodeId,
    pub nodes_created: usize,
    pub replaced: bool,
}

/// Routing trie mapping templates to factories producing `R`.
#[derive(Clone)]
pub struct Trie<R> {
    nodes: Vec<Node<Route<R>>>,
    separator: char,
    routes: usize,
}

impl<R> fmt::Debug for Trie<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("separator", &self.separator)
            .field("nodes_len", &self.nodes.len())
            .field("routes", &self.routes)
            .finish()
    }
}

impl<R> Default for Trie<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Trie<R> {
    pub fn new() -> Self {
        Self::with_separator(SEPARATOR)
    }

    pub fn with_separator(separator: char) -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Literal)],
            separator,
            routes: 0,
        }
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Number of distinct registered templates.
    pub fn len(&self) -> usize {
        self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes == 0
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<Route<R>>> {
        self.nodes.get(id.0)
    }

    /// Register `template`, attaching `factory` to its terminal node.
    ///
    /// Registering the same template again replaces the previous factory.
    pub fn insert<F>(&mut self, template: Template, factory: F) -> RoutingResult<InsertOutcome>
    where
        F: Fn(&Captures) -> R + Send + Sync + 'static,
    {
        template.validate(self.separator)?;

        let mut current = NodeId::ROOT;
        let mut nodes_created = 0;
        let units: Vec<EdgeKey> = template.units(self.separator).collect();

        for key in units {
            current = match self.nodes[current.0].child(key) {
                Some(next) => next,
                None => {
                    let next = NodeId(self.nodes.len());
                    self.nodes.push(Node::new(NodeKind::for_key(key)));
                    self.nodes[current.0].add_child(key, next);
                    nodes_created += 1;
                    self.warn_if_shadowed(current, &template);
                    next
                }
            };
        }

        let replaced = self.nodes[current.0]
            .set_terminal(Route {
                template,
                factory: Arc::new(factory),
            })
            .is_some();
        if !replaced {
            self.routes += 1;
        }

        Ok(InsertOutcome {
            terminal: current,
            nodes_created,
            replaced,
        })
    }

    fn warn_if_shadowed(&self, id: NodeId, template: &Template) {
        let node = &self.nodes[id.0];
        if node.kind() != NodeKind::SeparatorBranch || node.child(EdgeKey::Dynamic).is_none() {
            return;
        }
        if node.children().any(|(key, _)| key != EdgeKey::Dynamic) {
            tracing::warn!(
                template = %template,
                node = id.index(),
                "Literal branch shares a separator with a dynamic segment and will never match"
            );
        }
    }

    /// Walk `path` and return the matched route without invoking its factory.
    pub fn lookup(&self, path: &str) -> RoutingResult<RouteMatch<'_, R>> {
        let mut current = NodeId::ROOT;
        let mut captures = Captures::new();

        for ch in path.trim_matches(self.separator).chars() {
            current = self.nodes[current.0]
                .advance(current, ch, self.separator, &mut captures)
                .ok_or_else(|| RoutingError::not_found(path))?;
        }

        match self.nodes[current.0].terminal() {
            Some(route) => Ok(RouteMatch { route, captures }),
            None => Err(RoutingError::not_found(path)),
        }
    }

    /// Resolve `path` to a resource built by the matching route's factory.
    pub fn search(&self, path: &str) -> RoutingResult<R> {
        self.lookup(path).map(RouteMatch::resolve)
    }

    /// Registered templates in node order.
    pub fn templates(&self) -> impl Iterator<Item = &Template> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| node.terminal().map(Route::template))
    }

    /// Serializable view of the arena for debugging.
    pub fn snapshot(&self) -> TrieSnapshot {
        let nodes = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| NodeSnapshot {
                id: NodeId(index),
                kind: node.kind(),
                children: node
                    .children()
                    .map(|(key, child)| (key.label(self.separator), child))
                    .collect(),
                template: node.terminal().map(|route| route.template.to_string()),
            })
            .collect();

        TrieSnapshot {
            separator: self.separator,
            routes: self.routes,
            nodes,
        }
    }
}

/// Debug dump of a trie.
#[derive(Debug, Clone, Serialize)]
pub struct TrieSnapshot {
    pub separator: char,
    pub routes: usize,
    pub nodes: Vec<NodeSnapshot>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub kind: NodeKind,
    pub children: BTreeMap<String, NodeId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}
