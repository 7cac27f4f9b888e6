//! Core types: field values, the rule trait, and error families

mod error;
mod rule;
mod value;

pub use error::{ConfigError, ValidationError};
pub use rule::{Rule, SharedRule};
pub use value::{FieldValue, ValueRef};
