//! The core rule trait
//!
//! Every validation rule, built-in or custom, implements [`Rule`]: inspect a
//! field's current value and either accept it or produce a
//! [`ValidationError`] carrying the message for the presenter. Rules are
//! resolved once at setup and shared immutably as [`SharedRule`]s.

use std::fmt::Debug;
use std::sync::Arc;

use crate::core::{FieldValue, ValidationError};

/// A resolved, executable validation rule.
///
/// # Contract
///
/// * `check` must be pure with respect to the field value: same value (and
///   same referenced-field values) in, same verdict out. No caching across
///   calls — referenced inputs may change between invocations.
/// * `Ok(())` means the value passed; an error carries the message shown to
///   the user.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::core::{FieldValue, Rule, ValidationError};
///
/// #[derive(Debug)]
/// struct Uppercase;
///
/// impl Rule for Uppercase {
///     fn name(&self) -> &str {
///         "uppercase"
///     }
///
///     fn check(&self, value: &FieldValue) -> Result<(), ValidationError> {
///         match value.as_text() {
///             Some(s) if s.chars().all(char::is_uppercase) => Ok(()),
///             _ => Err(ValidationError::new("uppercase", "Use capital letters only")),
///         }
///     }
/// }
/// ```
pub trait Rule: Debug + Send + Sync {
    /// The rule's spec name, e.g. `"required"` or `"min"`.
    fn name(&self) -> &str;

    /// Checks a field value against this rule.
    fn check(&self, value: &FieldValue) -> Result<(), ValidationError>;
}

/// A rule shared by a field's pipeline.
pub type SharedRule = Arc<dyn Rule>;
