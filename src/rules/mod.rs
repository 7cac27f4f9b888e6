//! Built-in rule library
//!
//! The closed catalog of rules the rule-spec grammar can name: `required`,
//! `email`, `min:n`, and `confirmation:#selector`. Each rule ships a
//! default message and a `with_message` override. Custom rules join the
//! catalog through [`RuleRegistry::register`](crate::registry::RuleRegistry::register).

mod confirmation;
mod email;
mod length;
mod required;

pub use confirmation::{Confirmation, confirmation};
pub use email::{Email, email};
pub use length::{MinLength, min_length};
pub use required::{Required, required};
