//! Email-shape rule

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::{FieldValue, Rule, ValidationError};

const DEFAULT_MESSAGE: &str = "Please enter a valid email";

/// `local@domain.tld`: word segments separated by single dots or hyphens,
/// with one or more 2-3 character TLD groups.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$")
        .expect("email pattern is a valid regex")
});

/// Validates that a value matches a standard email shape.
///
/// Non-text values fail: there is no email to speak of in an unchecked
/// group or a boolean flag.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::rules::email;
///
/// let rule = email();
/// assert!(rule.check(&"user@example.com".into()).is_ok());
/// assert!(rule.check(&"not-an-email".into()).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Email {
    message: Option<Cow<'static, str>>,
}

impl Email {
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
            Some(message) => ValidationError::new("email", message.clone()),
            None => ValidationError::new("email", DEFAULT_MESSAGE),
        }
    }
}

impl Rule for Email {
    fn name(&self) -> &str {
        "email"
    }

    fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match value.as_text() {
            Some(text) if EMAIL_PATTERN.is_match(text) => Ok(()),
            _ => Err(self.error()),
        }
    }
}

/// Creates an email-shape rule.
#[must_use]
pub fn email() -> Email {
    Email::new()
}
