//! # formcheck
//!
//! A declarative form-validation engine. Inputs declare compact rule
//! specs like `required|min:6|confirmation:#password`; the builder parses
//! them into ordered, deduplicated rule pipelines, resolves cross-field
//! `#selector` references lazily against live input state, and assembles
//! a [`Form`] that validates per field (short-circuiting at the first
//! failure) and per submission (never short-circuiting across fields)
//! before producing a typed, insertion-ordered payload.
//!
//! ## Quick Start
//!
//! ```rust
//! use formcheck::prelude::*;
//!
//! # fn main() -> Result<(), ConfigError> {
//! let form = Form::builder()
//!     .input(Input::text("email").rules("required|email"))
//!     .input(Input::text("password").id("password").rules("required|min:6"))
//!     .input(Input::text("password2").rules("required|confirmation:#password"))
//!     .build()?;
//!
//! form.set_value("email", "user@example.com");
//! form.set_value("password", "hunter42");
//! form.set_value("password2", "hunter42");
//!
//! assert!(form.submit().is_valid());
//! # Ok(())
//! # }
//! ```
//!
//! ## Design
//!
//! - **Fail fast on configuration.** Unknown rule names and malformed
//!   specs abort [`FormBuilder::build`] with a [`ConfigError`]; they never
//!   surface as runtime surprises.
//! - **Lazy references.** `confirmation:#password` captures a [`ValueRef`]
//!   that re-reads the referenced input on every check, so validation
//!   always sees the value as it is now.
//! - **Presenter at arm's length.** The engine's only side effects are the
//!   [`FormUi`] callbacks; rendering lives entirely outside the crate.
//! - **Open catalog.** The built-in rules (`required`, `email`, `min`,
//!   `confirmation`) extend through [`RuleRegistry`] factories.

pub mod core;
pub mod form;
pub mod parser;
pub mod prelude;
pub mod registry;
pub mod rules;

pub use crate::core::{ConfigError, FieldValue, Rule, SharedRule, ValidationError, ValueRef};
pub use crate::form::{Form, FormBuilder, FormUi, Input, Payload, SubmitOutcome};
pub use crate::registry::RuleRegistry;
