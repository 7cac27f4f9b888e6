//! Required-value rule

use std::borrow::Cow;

use crate::core::{FieldValue, Rule, ValidationError};

const DEFAULT_MESSAGE: &str = "Please enter a value";

/// Validates that a value is present.
///
/// Text passes when it is non-empty after trimming surrounding whitespace.
/// A boolean flag passes only when `true` — an explicit `false` is treated
/// as absent rather than leaning on truthiness coercion. A missing value
/// (e.g. no checked option in a group) always fails.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::rules::required;
///
/// let rule = required();
/// assert!(rule.check(&"hello".into()).is_ok());
/// assert!(rule.check(&"   ".into()).is_err());
/// assert!(rule.check(&false.into()).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Required {
    message: Option<Cow<'static, str>>,
}

impl Required {
    /// Creates the rule with the default message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the failure message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn error(&self) -> ValidationError {
        match &self.message {
            Some(message) => ValidationError::new("required", message.clone()),
            None => ValidationError::new("required", DEFAULT_MESSAGE),
        }
    }
}

impl Rule for Required {
    fn name(&self) -> &str {
        "required"
    }

    fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let present = match value {
            FieldValue::Text(s) => !s.trim().is_empty(),
            FieldValue::Flag(b) => *b,
            FieldValue::Missing => false,
        };
        if present { Ok(()) } else { Err(self.error()) }
    }
}

/// Creates a required-value rule.
#[must_use]
pub fn required() -> Required {
    Required::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldValue::from("hello"), true)]
    #[case(FieldValue::from("  padded  "), true)]
    #[case(FieldValue::from("0"), true)]
    #[case(FieldValue::from(""), false)]
    #[case(FieldValue::from("   "), false)]
    #[case(FieldValue::Flag(true), true)]
    #[case(FieldValue::Flag(false), false)]
    #[case(FieldValue::Missing, false)]
    fn test_presence_table(#[case] value: FieldValue, #[case] expected_ok: bool) {
        assert_eq!(required().check(&value).is_ok(), expected_ok);
    }

    #[test]
    fn test_default_message() {
        let err = required().check(&FieldValue::Missing).unwrap_err();
        assert_eq!(err.message(), "Please enter a value");
        assert_eq!(err.code(), "required");
    }

    #[test]
    fn test_message_override() {
        let rule = required().with_message("Name is mandatory");
        let err = rule.check(&FieldValue::Missing).unwrap_err();
        assert_eq!(err.message(), "Name is mandatory");
    }
}
