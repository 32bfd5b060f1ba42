//! Captured dynamic segments.

use std::ops::Deref;

use serde::Serialize;

/// Ordered list of substrings captured by dynamic segments, left to right.
///
/// Built fresh for every resolution. Entries are only ever appended to:
/// [`Captures::open`] starts a new entry and [`Captures::extend`] grows the
/// most recent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Captures(Vec<String>);

impl Captures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new capture seeded with `ch`.
    pub fn open(&mut self, ch: char) {
        self.0.push(ch.to_string());
    }

    /// Append `ch` to the current capture.
    pub fn extend(&mut self, ch: char) {
        match self.0.last_mut() {
            Some(last) => last.push(ch),
            None => self.open(ch),
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl Deref for Captures {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for Captures {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl IntoIterator for Captures {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
