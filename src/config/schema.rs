//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML files.

use serde::{Deserialize, Serialize};

use crate::routing::{RoutingResult, Segment, Template, SEPARATOR};

/// Root configuration for the router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Path delimiter (default `/`).
    pub separator: char,

    /// Route definitions, registered in order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            separator: SEPARATOR,
            routes: Vec::new(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// A named template.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Route identifier, reported with every resolution.
    pub name: String,

    /// Template as a brace pattern or an explicit segment list.
    pub template: TemplateSource,
}

/// Either `"customers/{id}"` or `["customers/", ["dynamic"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TemplateSource {
    Pattern(String),
    Segments(Vec<Segment>),
}

impl TemplateSource {
    /// Build and validate the template under `separator`.
    pub fn to_template(&self, separator: char) -> RoutingResult<Template> {
        match self {
            Self::Pattern(pattern) => Template::parse(pattern, separator),
            Self::Segments(segments) => {
                let template = Template::new(segments.clone());
                template.validate(separator)?;
                Ok(template)
            }
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
