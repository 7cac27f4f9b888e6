//! Convenience re-exports for the common path
//!
//! ```rust,ignore
//! use formcheck::prelude::*;
//! ```

pub use crate::core::{ConfigError, FieldValue, Rule, SharedRule, ValidationError, ValueRef};
pub use crate::form::{
    Field, FieldKind, FileRef, Form, FormBuilder, FormUi, Input, InputHandle, NoopUi, Payload,
    PayloadValue, SubmitOutcome,
};
pub use crate::registry::{RefResolver, RuleParam, RuleRegistry};
pub use crate::rules::{
    Confirmation, Email, MinLength, Required, confirmation, email, min_length, required,
};
