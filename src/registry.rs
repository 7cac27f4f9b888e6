//! Rule registry and parameter resolution
//!
//! The registry turns parsed [`RuleToken`]s into executable [`SharedRule`]s.
//! The built-in catalog (`required`, `email`, `min`, `confirmation`) is a
//! closed match on the rule name; consumers extend the catalog by
//! registering custom factories. Unknown names fail fast at build time with
//! [`ConfigError::UnknownRule`] — never at validation time.
//!
//! Parameter resolution also lives here: a parameter starting with `#` is a
//! cross-field reference and resolves to a lazy [`ValueRef`]. A reference
//! that matches no input is dropped with a diagnostic, preserving the
//! shape of the original behavior; if the rule then lacks a parameter it
//! requires, the build fails with [`ConfigError::MissingParam`] instead of
//! running a half-configured rule.

use std::collections::HashMap;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{ConfigError, SharedRule, ValueRef};
use crate::parser::RuleToken;
use crate::rules::{confirmation, email, min_length, required};

// ============================================================================
// RULE PARAMS
// ============================================================================

/// A resolved rule parameter: a literal string or a lazy cross-field
/// reference.
#[derive(Debug, Clone)]
pub enum RuleParam {
    /// A literal parameter, e.g. the `6` of `min:6`.
    Literal(String),
    /// A reference parameter, e.g. the `#pwd2` of `confirmation:#pwd2`,
    /// re-read at every validation.
    Reference(ValueRef),
}

impl RuleParam {
    /// Returns the literal text, if this is a literal parameter.
    #[must_use]
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            RuleParam::Literal(s) => Some(s),
            RuleParam::Reference(_) => None,
        }
    }

    /// Returns the value reference, if this is a reference parameter.
    #[must_use]
    pub fn as_reference(&self) -> Option<&ValueRef> {
        match self {
            RuleParam::Reference(r) => Some(r),
            RuleParam::Literal(_) => None,
        }
    }
}

/// Resolves `#selector` reference parameters against the live form.
///
/// Implemented by the form builder over its input handles; abstracted as a
/// trait so parameter resolution never touches a global lookup.
pub trait RefResolver {
    /// Resolves a selector (without the leading `#`) to a live value
    /// reference, or `None` when no input matches.
    fn value_ref(&self, id: &str) -> Option<ValueRef>;
}

/// Resolves a token's raw parameters into [`RuleParam`]s.
///
/// Unresolvable references are dropped with a warning rather than aborting
/// the build; the registry decides afterwards whether the rule can live
/// without them.
pub fn resolve_params(token: &RuleToken, refs: &dyn RefResolver) -> SmallVec<[RuleParam; 2]> {
    let mut params = SmallVec::new();
    for raw in &token.params {
        if let Some(id) = raw.strip_prefix('#') {
            match refs.value_ref(id) {
                Some(value_ref) => params.push(RuleParam::Reference(value_ref)),
                None => {
                    warn!(
                        rule = token.name.as_str(),
                        selector = raw.as_str(),
                        "reference parameter matches no input; dropping it"
                    );
                }
            }
        } else {
            params.push(RuleParam::Literal(raw.clone()));
        }
    }
    params
}

// ============================================================================
// RULE REGISTRY
// ============================================================================

/// A factory building a rule from its resolved parameters.
pub type RuleFactory = dyn Fn(&[RuleParam]) -> Result<SharedRule, ConfigError> + Send + Sync;

/// Maps rule names to executable rules.
///
/// Built-in names are matched directly; custom names go through registered
/// factories.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::registry::RuleRegistry;
///
/// let mut registry = RuleRegistry::new();
/// registry.register("uppercase", |_params| Ok(Arc::new(Uppercase)));
/// ```
#[derive(Clone, Default)]
pub struct RuleRegistry {
    custom: HashMap<String, Arc<RuleFactory>>,
}

impl RuleRegistry {
    /// Creates a registry with only the built-in catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom rule factory under a spec name.
    ///
    /// Registering a built-in name has no effect: the built-in catalog is
    /// matched first.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: impl Fn(&[RuleParam]) -> Result<SharedRule, ConfigError> + Send + Sync + 'static,
    ) {
        let name = name.into();
        debug!(rule = name.as_str(), "registering custom rule factory");
        self.custom.insert(name, Arc::new(factory));
    }

    /// Returns true if the name resolves to a built-in or custom rule.
    #[must_use]
    pub fn knows(&self, name: &str) -> bool {
        matches!(name, "required" | "email" | "min" | "confirmation")
            || self.custom.contains_key(name)
    }

    /// Builds the executable rule for a parsed token.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::UnknownRule`] for a name with no implementation.
    /// * [`ConfigError::MissingParam`] / [`ConfigError::InvalidParam`] when
    ///   the parameters do not fit the rule.
    pub fn build(&self, token: &RuleToken, params: &[RuleParam]) -> Result<SharedRule, ConfigError> {
        let rule: SharedRule = match token.name.as_str() {
            "required" => {
                check_arity(token, params, 0);
                Arc::new(required())
            }
            "email" => {
                check_arity(token, params, 0);
                Arc::new(email())
            }
            "min" => {
                check_arity(token, params, 1);
                let raw = params.first().ok_or(ConfigError::MissingParam {
                    rule: "min",
                    param: "n",
                })?;
                let literal = raw.as_literal().ok_or_else(|| ConfigError::InvalidParam {
                    rule: "min",
                    value: describe_param(raw),
                    reason: "expected a number, not a reference".to_owned(),
                })?;
                let min = literal
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidParam {
                        rule: "min",
                        value: literal.to_owned(),
                        reason: "not a non-negative integer".to_owned(),
                    })?;
                Arc::new(min_length(min))
            }
            "confirmation" => {
                check_arity(token, params, 1);
                let raw = params.first().ok_or(ConfigError::MissingParam {
                    rule: "confirmation",
                    param: "#selector",
                })?;
                let other = raw.as_reference().ok_or_else(|| ConfigError::InvalidParam {
                    rule: "confirmation",
                    value: describe_param(raw),
                    reason: "expected a #selector reference".to_owned(),
                })?;
                Arc::new(confirmation(other.clone()))
            }
            name => match self.custom.get(name) {
                Some(factory) => factory(params)?,
                None => {
                    return Err(ConfigError::UnknownRule {
                        name: name.to_owned(),
                        token: token.raw().to_owned(),
                    });
                }
            },
        };
        Ok(rule)
    }
}

fn check_arity(token: &RuleToken, params: &[RuleParam], expected: usize) {
    if params.len() > expected {
        debug!(
            token = token.raw(),
            expected,
            actual = params.len(),
            "ignoring surplus rule parameters"
        );
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("custom", &self.custom.keys().collect::<Vec<_>>())
            .finish()
    }
}

fn describe_param(param: &RuleParam) -> String {
    match param {
        RuleParam::Literal(s) => s.clone(),
        RuleParam::Reference(r) => r.selector().to_owned(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
