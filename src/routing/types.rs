//! Routing error definitions.

use thiserror::Error;

/// Errors produced while registering templates or resolving paths.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingError {
    /// The template is malformed and was rejected before touching the trie.
    #[error("invalid template `{template}`: {reason}")]
    InvalidTemplate { template: String, reason: String },

    /// No registered template matches the path.
    #[error("no route matches path `{path}`")]
    RouteNotFound { path: String },
}

impl RoutingError {
    pub(crate) fn invalid(template: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidTemplate {
            template: template.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_found(path: impl Into<String>) -> Self {
        Self::RouteNotFound { path: path.into() }
    }

    /// True for the expected resolution miss (as opposed to a caller error).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RouteNotFound { .. })
    }
}

/// Result type for routing operations.
pub type RoutingResult<T> = Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RoutingError::not_found("/unknown");
        assert_eq!(err.to_string(), "no route matches path `/unknown`");
        assert!(err.is_not_found());

        let err = RoutingError::invalid("customers/{id", "unclosed `{`");
        assert!(err.to_string().contains("customers/{id"));
        assert!(err.to_string().contains("unclosed"));
        assert!(!err.is_not_found());
    }
}
