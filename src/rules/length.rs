//! Minimum-length rule
//!
//! Length is measured in Unicode scalar values (chars), so multi-byte text
//! counts the way a user would count it.

use std::borrow::Cow;

use crate::core::{FieldValue, Rule, ValidationError};

/// Validates that a text value has at least a minimum length.
///
/// Non-text values fail: they have no length to measure.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::rules::min_length;
///
/// let rule = min_length(6);
/// assert!(rule.check(&"secret".into()).is_ok());
/// assert!(rule.check(&"short".into()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct MinLength {
    /// Minimum required length (inclusive).
    min: usize,
    message: Option<Cow<'static, str>>,
}

impl MinLength {
    /// Creates a minimum length rule.
    #[must_use]
    pub fn new(min: usize) -> Self {
        Self { min, message: None }
    }

    /// Overrides the failure message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    fn error(&self) -> ValidationError {
        let message = match &self.message {
            Some(message) => message.clone(),
            None => format!("Please enter at least {} characters", self.min).into(),
        };
        ValidationError::new("min", message).with_param("min", self.min.to_string())
    }
}

impl Rule for MinLength {
    fn name(&self) -> &str {
        "min"
    }

    fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match value.as_text() {
            Some(text) => {
                let len = text.chars().count();
                if len >= self.min {
                    Ok(())
                } else {
                    Err(self.error().with_param("actual", len.to_string()))
                }
            }
            // No text, no length to report.
            None => Err(self.error()),
        }
    }
}

/// Creates a minimum length rule.
#[must_use]
pub fn min_length(min: usize) -> MinLength {
    MinLength::new(min)
}
