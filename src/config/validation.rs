//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Every route template parses and is reachable
//! - Route names are present and unique
//! - No two routes register the same template
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: RouterConfig → Result<(), Vec<ValidationError>>

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::routing::{EdgeKey, RoutingError};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("separator `{0}` is reserved for template syntax")]
    ReservedSeparator(char),

    #[error("route #{index} has an empty name")]
    EmptyRouteName { index: usize },

    #[error("route name `{0}` is used more than once")]
    DuplicateRouteName(String),

    #[error("route `{route}`: {source}")]
    InvalidTemplate {
        route: String,
        #[source]
        source: RoutingError,
    },

    #[error("routes `{first}` and `{second}` register the same template")]
    DuplicateTemplate { first: String, second: String },
}

/// Validate `config`, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if matches!(config.separator, '{' | '}') {
        errors.push(ValidationError::ReservedSeparator(config.separator));
        return Err(errors);
    }

    let mut names = HashSet::new();
    let mut shapes: HashMap<Vec<EdgeKey>, &str> = HashMap::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyRouteName { index });
        } else if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateRouteName(route.name.clone()));
        }

        match route.template.to_template(config.separator) {
            Ok(template) => {
                let shape: Vec<EdgeKey> = template.units(config.separator).collect();
                if let Some(first) = shapes.insert(shape, &route.name) {
                    errors.push(ValidationError::DuplicateTemplate {
                        first: first.to_string(),
                        second: route.name.clone(),
                    });
                }
            }
            Err(source) => errors.push(ValidationError::InvalidTemplate {
                route: route.name.clone(),
                source,
            }),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
