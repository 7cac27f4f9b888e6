//! Error types for validation and setup failures
//!
//! Two error families live here: [`ValidationError`] for per-field rule
//! failures (expected, recoverable, surfaced through the UI presenter), and
//! [`ConfigError`] for setup-time problems that must prevent interactive use.
//!
//! `ValidationError` string fields use `Cow<'static, str>` for
//! zero-allocation in the common case of static codes and messages.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A rule failure for a single field.
///
/// Carries a stable `code` for programmatic handling, a human-readable
/// `message` (the text handed to the UI presenter), and optional parameters
/// describing the failed constraint.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::core::ValidationError;
///
/// let error = ValidationError::new("min", "Please enter at least 6 characters")
///     .with_param("min", "6")
///     .with_param("actual", "3");
/// assert_eq!(error.param("min"), Some("6"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Stable error code, e.g. `"required"`, `"email"`, `"min"`.
    pub code: Cow<'static, str>,

    /// Human-readable message shown next to the field.
    pub message: Cow<'static, str>,

    /// Constraint parameters as ordered key-value pairs (typically 0-2).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error from a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a constraint parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Returns the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the message handed to the presenter.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.params.is_empty() {
            write!(f, " (")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Setup-time configuration errors.
///
/// Returned by `FormBuilder::build` when rule specs reference unknown rules,
/// carry malformed tokens, or resolve to rules missing required parameters.
/// These are fatal: a form with a broken pipeline must never reach
/// interactive use.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A rule spec referenced a rule name with no built-in or registered
    /// implementation.
    #[error("unknown rule '{name}' in spec '{token}'")]
    UnknownRule { name: String, token: String },

    /// A rule spec token did not match the `name(:param)*` grammar.
    #[error("malformed rule spec token '{token}'")]
    MalformedSpec { token: String },

    /// A rule was declared without a parameter it requires. This also covers
    /// a `#selector` reference that matched no input and was dropped during
    /// resolution.
    #[error("rule '{rule}' is missing required parameter '{param}'")]
    MissingParam {
        rule: &'static str,
        param: &'static str,
    },

    /// A rule parameter was present but unusable.
    #[error("invalid parameter '{value}' for rule '{rule}': {reason}")]
    InvalidParam {
        rule: &'static str,
        value: String,
        reason: String,
    },
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("required", "Please enter a value");
        assert_eq!(error.code(), "required");
        assert_eq!(error.message(), "Please enter a value");
    }

    #[test]
    fn test_error_params() {
        let error = ValidationError::new("min", "Too short")
            .with_param("min", "6")
            .with_param("actual", "2");
        assert_eq!(error.param("min"), Some("6"));
        assert_eq!(error.param("actual"), Some("2"));
        assert_eq!(error.param("missing"), None);
    }

    #[test]
    fn test_display_includes_params() {
        let error = ValidationError::new("min", "Too short").with_param("min", "6");
        assert_eq!(error.to_string(), "min: Too short (min=6)");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "Please enter a value");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::UnknownRule {
            name: "maxx".into(),
            token: "maxx:10".into(),
        };
        assert_eq!(error.to_string(), "unknown rule 'maxx' in spec 'maxx:10'");
    }
}
