//! Trie node model.
//!
//! # Node Kinds
//! - `Literal`: exact character match (the default, and the root)
//! - `SeparatorBranch`: reached through a separator edge; commits to a capture
//!   when it has a dynamic child
//! - `DynamicCapture`: self-loops on every non-separator character, growing
//!   the current capture
//!
//! # Design Decisions
//! - Kinds are a tagged enum dispatched in one `advance` function
//! - Nodes live in an arena and refer to children by `NodeId`
//! - Children are kept in a `BTreeMap` so dumps are deterministic

use std::collections::BTreeMap;

use serde::Serialize;

use crate::routing::captures::Captures;

/// Default path delimiter.
pub const SEPARATOR: char = '/';

/// Reserved token that marks a dynamic segment in external template encodings.
pub const DYNAMIC_MARKER: &str = "dynamic";

/// Key of an edge between two nodes.
///
/// The separator character is always keyed as [`EdgeKey::Separator`], never as
/// a literal, so the sentinels never collide with literal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EdgeKey {
    Separator,
    Dynamic,
    Literal(char),
}

impl EdgeKey {
    /// Key for an input character under the given separator.
    pub fn for_char(ch: char, separator: char) -> Self {
        if ch == separator {
            Self::Separator
        } else {
            Self::Literal(ch)
        }
    }

    /// Printable form used in trie dumps.
    pub fn label(&self, separator: char) -> String {
        match self {
            Self::Separator => separator.to_string(),
            Self::Dynamic => format!("{{{DYNAMIC_MARKER}}}"),
            Self::Literal(ch) => ch.to_string(),
        }
    }
}

/// Traversal behaviour of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Literal,
    SeparatorBranch,
    DynamicCapture,
}

impl NodeKind {
    /// Kind of the node created at the end of an edge keyed `key`.
    pub fn for_key(key: EdgeKey) -> Self {
        match key {
            EdgeKey::Dynamic => Self::DynamicCapture,
            EdgeKey::Separator => Self::SeparatorBranch,
            EdgeKey::Literal(_) => Self::Literal,
        }
    }
}

/// Index of a node in the trie arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A single trie node. `T` is the payload stored on terminal nodes.
#[derive(Debug, Clone)]
pub struct Node<T> {
    kind: NodeKind,
    children: BTreeMap<EdgeKey, NodeId>,
    terminal: Option<T>,
}

impl<T> Node<T> {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: BTreeMap::new(),
            terminal: None,
        }
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn child(&self, key: EdgeKey) -> Option<NodeId> {
        self.children.get(&key).copied()
    }

    pub fn children(&self) -> impl Iterator<Item = (EdgeKey, NodeId)> + '_ {
        self.children.iter().map(|(key, id)| (*key, *id))
    }

    pub fn terminal(&self) -> Option<&T> {
        self.terminal.as_ref()
    }

    pub(crate) fn add_child(&mut self, key: EdgeKey, id: NodeId) {
        self.children.insert(key, id);
    }

    /// Attach a terminal payload, returning the one it replaced.
    pub(crate) fn set_terminal(&mut self, value: T) -> Option<T> {
        self.terminal.replace(value)
    }

    /// Consume one input character from this node (whose own id is `this`).
    ///
    /// Returns the next node, or `None` when the character cannot be matched.
    pub fn advance(
        &self,
        this: NodeId,
        ch: char,
        separator: char,
        captures: &mut Captures,
    ) -> Option<NodeId> {
        match self.kind {
            NodeKind::Literal => self.child(EdgeKey::for_char(ch, separator)),
            NodeKind::SeparatorBranch => match self.child(EdgeKey::Dynamic) {
                // Speculative: the first character after a separator always
                // opens a capture when a dynamic branch exists.
                Some(dynamic) => {
                    captures.open(ch);
                    Some(dynamic)
                }
                None => self.child(EdgeKey::for_char(ch, separator)),
            },
            NodeKind::DynamicCapture => {
                if ch == separator {
                    self.child(EdgeKey::Separator)
                } else {
                    captures.extend(ch);
                    Some(this)
                }
            }
        }
    }
}
