//! Cross-field confirmation rule

use std::borrow::Cow;

use crate::core::{FieldValue, Rule, ValidationError, ValueRef};

const DEFAULT_MESSAGE: &str = "Please enter the same confirmation value";

/// Validates that a value equals another input's *current* value.
///
/// The referenced value is read through a [`ValueRef`] on every check, so
/// editing the referenced field (e.g. the password while confirming it)
/// changes the verdict on the next run without re-parsing anything.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::core::ValueRef;
/// use formcheck::rules::confirmation;
///
/// let rule = confirmation(ValueRef::new("#password", || "secret".to_owned()));
/// assert!(rule.check(&"secret".into()).is_ok());
/// assert!(rule.check(&"wrong".into()).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Confirmation {
    other: ValueRef,
    message: Option<Cow<'static, str>>,
}

impl Confirmation {
    /// Creates a confirmation rule against the referenced input.
    #[must_use]
    pub fn new(other: ValueRef) -> Self {
        Self {
            other,
            message: None,
        }
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
            None => DEFAULT_MESSAGE.into(),
        };
        ValidationError::new("confirmation", message)
            .with_param("other", self.other.selector().to_owned())
    }
}

impl Rule for Confirmation {
    fn name(&self) -> &str {
        "confirmation"
    }

    fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
        match value.as_text() {
            Some(text) if text == self.other.get() => Ok(()),
            _ => Err(self.error()),
        }
    }
}

/// Creates a confirmation rule against the referenced input.
#[must_use]
pub fn confirmation(other: ValueRef) -> Confirmation {
    Confirmation::new(other)
}
