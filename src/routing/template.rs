//! Path templates.
//!
//! A template is an ordered list of segments: literal text, which contributes
//! one trie edge per character, and placeholders, which contribute a single
//! dynamic edge. Templates can be written as brace patterns
//! (`customers/{id}/orders`) or as segment lists in configuration
//! (`["customers/", ["dynamic"], "/orders"]`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::node::{EdgeKey, DYNAMIC_MARKER, SEPARATOR};
use crate::routing::types::{RoutingError, RoutingResult};

/// One component of a template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawSegment", into = "RawSegment")]
pub enum Segment {
    Literal(String),
    /// A dynamic segment. The name is for display only and never affects
    /// matching.
    Placeholder { name: Option<String> },
}

impl Segment {
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    pub fn placeholder() -> Self {
        Self::Placeholder { name: None }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Placeholder {
            name: Some(name.into()),
        }
    }
}

/// External encoding: a string is literal text, `["dynamic"]` is a placeholder.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
enum RawSegment {
    Text(String),
    Marker(Vec<String>),
}

impl TryFrom<RawSegment> for Segment {
    type Error = String;

    fn try_from(raw: RawSegment) -> Result<Self, Self::Error> {
        match raw {
            RawSegment::Text(text) => Ok(Segment::Literal(text)),
            RawSegment::Marker(marker) => match marker.as_slice() {
                [token] if token == DYNAMIC_MARKER => Ok(Segment::placeholder()),
                _ => Err(format!(
                    "segment marker must be [\"{DYNAMIC_MARKER}\"], got {marker:?}"
                )),
            },
        }
    }
}

impl From<Segment> for RawSegment {
    fn from(segment: Segment) -> Self {
        match segment {
            Segment::Literal(text) => RawSegment::Text(text),
            Segment::Placeholder { .. } => RawSegment::Marker(vec![DYNAMIC_MARKER.to_string()]),
        }
    }
}

/// An ordered sequence of segments registered as one route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Parse a brace pattern such as `customers/{id}/orders/{oid}`.
    ///
    /// Separators at either end are stripped, matching how paths are
    /// normalised before resolution. The result is validated.
    pub fn parse(pattern: &str, separator: char) -> RoutingResult<Self> {
        let trimmed = pattern.trim_matches(separator);
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = trimmed.chars();

        while let Some(ch) = chars.next() {
            match ch {
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => {
                                return Err(RoutingError::invalid(pattern, "nested `{` in placeholder"))
                            }
                            Some(c) if c == separator => {
                                return Err(RoutingError::invalid(
                                    pattern,
                                    "placeholder name contains the separator",
                                ))
                            }
                            Some(c) => name.push(c),
                            None => return Err(RoutingError::invalid(pattern, "unclosed `{`")),
                        }
                    }
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let name = name.trim();
                    segments.push(if name.is_empty() {
                        Segment::placeholder()
                    } else {
                        Segment::named(name)
                    });
                }
                '}' => return Err(RoutingError::invalid(pattern, "unmatched `}`")),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let template = Self::new(segments);
        template.validate(separator)?;
        Ok(template)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholder_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Placeholder { .. }))
            .count()
    }

    /// Placeholder names in order; unnamed placeholders become `param{i}`.
    pub fn param_names(&self) -> Vec<String> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Placeholder { name } => Some(name.clone()),
                Segment::Literal(_) => None,
            })
            .enumerate()
            .map(|(i, name)| name.unwrap_or_else(|| format!("param{i}")))
            .collect()
    }

    /// Edge keys this template contributes, in insertion order.
    pub fn units(&self, separator: char) -> impl Iterator<Item = EdgeKey> + '_ {
        self.segments.iter().flat_map(move |segment| {
            let keys: Vec<EdgeKey> = match segment {
                Segment::Literal(text) => text
                    .chars()
                    .map(|ch| EdgeKey::for_char(ch, separator))
                    .collect(),
                Segment::Placeholder { .. } => vec![EdgeKey::Dynamic],
            };
            keys
        })
    }

    /// Reject templates that would be empty or partly unreachable.
    pub fn validate(&self, separator: char) -> RoutingResult<()> {
        let units: Vec<EdgeKey> = self.units(separator).collect();

        match (units.first(), units.last()) {
            (None, _) | (_, None) => {
                return Err(RoutingError::invalid(self, "template is empty"));
            }
            (Some(EdgeKey::Separator), _) => {
                return Err(RoutingError::invalid(self, "template starts with the separator"));
            }
            (_, Some(EdgeKey::Separator)) => {
                return Err(RoutingError::invalid(self, "template ends with the separator"));
            }
            _ => {}
        }

        for (i, unit) in units.iter().enumerate() {
            if *unit != EdgeKey::Dynamic {
                continue;
            }
            if i == 0 || units[i - 1] != EdgeKey::Separator {
                return Err(RoutingError::invalid(
                    self,
                    "placeholder must directly follow the separator",
                ));
            }
            if matches!(units.get(i + 1), Some(next) if *next != EdgeKey::Separator) {
                return Err(RoutingError::invalid(
                    self,
                    "placeholder must be followed by the separator or the end of the template",
                ));
            }
        }
        Ok(())
    }
}

impl FromIterator<Segment> for Template {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromStr for Template {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, SEPARATOR)
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => f.write_str(text)?,
                Segment::Placeholder { name: Some(name) } => write!(f, "{{{name}}}")?,
                Segment::Placeholder { name: None } => f.write_str("{}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pattern() {
        let template = Template::parse("/customers/{id}/orders/{oid}/", SEPARATOR).unwrap();
        assert_eq!(
            template.segments(),
            &[
                Segment::literal("customers/"),
                Segment::named("id"),
                Segment::literal("/orders/"),
                Segment::named("oid"),
            ]
        );
        assert_eq!(template.placeholder_count(), 2);
        assert_eq!(template.to_string(), "customers/{id}/orders/{oid}");
    }

    #[test]
    fn test_param_names_fill_unnamed() {
        let template: Template = "a/{}/b/{oid}".parse().unwrap();
        assert_eq!(template.param_names(), vec!["param0", "oid"]);
    }

    #[test]
    fn test_parse_rejects_unbalanced_braces() {
        assert!(Template::parse("customers/{id", SEPARATOR).is_err());
        assert!(Template::parse("customers/id}", SEPARATOR).is_err());
        assert!(Template::parse("customers/{{id}}", SEPARATOR).is_err());
        assert!(Template::parse("customers/{a/b}", SEPARATOR).is_err());
    }

    #[test]
    fn test_units() {
        let template = Template::new(vec![Segment::literal("c/"), Segment::placeholder()]);
        let units: Vec<EdgeKey> = template.units(SEPARATOR).collect();
        assert_eq!(
            units,
            vec![EdgeKey::Literal('c'), EdgeKey::Separator, EdgeKey::Dynamic]
        );
    }

    #[test]
    fn test_validate_rejects_empty() {
        let err = Template::new(vec![]).validate(SEPARATOR).unwrap_err();
        assert!(err.to_string().contains("empty"));

        let only_empty = Template::new(vec![Segment::literal("")]);
        assert!(only_empty.validate(SEPARATOR).is_err());
        assert!(Template::parse("/", SEPARATOR).is_err());
    }

    #[test]
    fn test_validate_rejects_edge_separators() {
        let leading = Template::new(vec![Segment::literal("/customers")]);
        assert!(leading.validate(SEPARATOR).is_err());

        let trailing = Template::new(vec![Segment::literal("customers/")]);
        assert!(trailing.validate(SEPARATOR).is_err());
    }

    #[test]
    fn test_validate_rejects_unreachable_placeholders() {
        // Not preceded by a separator.
        let glued = Template::new(vec![Segment::literal("customers"), Segment::placeholder()]);
        assert!(glued.validate(SEPARATOR).is_err());

        // Placeholder first.
        let first = Template::new(vec![Segment::placeholder()]);
        assert!(first.validate(SEPARATOR).is_err());

        // Followed by literal text.
        let suffixed = Template::new(vec![
            Segment::literal("a/"),
            Segment::placeholder(),
            Segment::literal(".json"),
        ]);
        assert!(suffixed.validate(SEPARATOR).is_err());

        // Two in a row.
        let doubled = Template::new(vec![
            Segment::literal("a/"),
            Segment::placeholder(),
            Segment::placeholder(),
        ]);
        assert!(doubled.validate(SEPARATOR).is_err());
    }

    #[test]
    fn test_segment_list_deserialize() {
        let segments: Vec<Segment> =
            serde_json::from_str(r#"["customers/", ["dynamic"], "/orders"]"#).unwrap();
        assert_eq!(
            segments,
            vec![
                Segment::literal("customers/"),
                Segment::placeholder(),
                Segment::literal("/orders"),
            ]
        );

        let bad: Result<Vec<Segment>, _> = serde_json::from_str(r#"["a/", ["wild"]]"#);
        assert!(bad.is_err());
    }
}
