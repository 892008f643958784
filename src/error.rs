//! Error types for template parsing and formatting
//!
//! Every failure is terminal and reported synchronously to the caller:
//! the engine performs no I/O, so there is no transient or retryable
//! class of error. [`Error::MissingVariables`] carries *every* absent
//! name (in template discovery order), not just the first, so callers
//! can surface a single actionable message to the end user.

use thiserror::Error;

/// Result type alias for template operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by template construction, partial binding, and formatting
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The template string contains unparseable placeholder syntax:
    /// an empty placeholder (`{}`), an unclosed `{`, or a stray `}`
    /// that is not part of a `}}` escape.
    #[error("malformed template at byte {position}: {reason}")]
    MalformedTemplate {
        /// Byte offset of the offending character in the template string
        position: usize,
        /// Human-readable description of what was wrong
        reason: String,
    },

    /// An explicitly supplied input-variable list disagrees with the
    /// placeholders actually present in the template string.
    #[error("declared input variables {expected:?} do not match template placeholders {parsed:?}")]
    VariableMismatch {
        /// The variable names the caller declared
        expected: Vec<String>,
        /// The variable names parsed out of the template
        parsed: Vec<String>,
    },

    /// A partial binding referenced a variable the template never declares.
    #[error("unknown variable in partial binding: {name}")]
    UnknownVariable {
        /// The undeclared variable name
        name: String,
    },

    /// One or more required variables were absent at format time.
    /// Names appear in template discovery order.
    #[error("missing required input variables: {}", .names.join(", "))]
    MissingVariables {
        /// Every required name absent from the formatting request
        names: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_missing_variables_lists_every_name() {
        let err = Error::MissingVariables {
            names: vec!["city".to_string(), "weather".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "missing required input variables: city, weather"
        );
    }

    #[test]
    fn test_malformed_template_reports_position() {
        let err = Error::MalformedTemplate {
            position: 7,
            reason: "empty placeholder".to_string(),
        };
        assert!(err.to_string().contains("byte 7"));
        assert!(err.to_string().contains("empty placeholder"));
    }

    #[test]
    fn test_variable_mismatch_shows_both_sides() {
        let err = Error::VariableMismatch {
            expected: vec!["text".to_string()],
            parsed: vec!["topic".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("text"));
        assert!(msg.contains("topic"));
    }
}
