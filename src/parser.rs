//! Rule-spec tokenizer
//!
//! Rule specs are compact strings declared per input, e.g.
//! `required|min:6|confirmation:#pwd2`. Grammar per token:
//! `name (':' param)*` — every `:`-segment after the name is one parameter.
//! A field composed of several same-named inputs contributes all of its
//! inputs' spec strings to one flat sequence.
//!
//! Pipeline: flatten on `|` across all spec strings, deduplicate by exact
//! raw token preserving first-occurrence order, then split each token into
//! name and parameters. Malformed tokens fail fast with
//! [`ConfigError::MalformedSpec`] instead of producing a broken pipeline.

use std::collections::HashSet;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::ConfigError;

// ============================================================================
// RULE TOKEN
// ============================================================================

/// One parsed rule-spec token: a rule name with its raw parameter strings.
///
/// Parameters are kept as raw text here; reference resolution (`#selector`)
/// and typed parsing happen later in the registry, which knows each rule's
/// arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleToken {
    raw: String,
    /// The rule name, e.g. `"min"`.
    pub name: String,
    /// Raw parameter segments in declared order, e.g. `["6"]`.
    pub params: SmallVec<[String; 2]>,
}

impl RuleToken {
    /// Parses a single token like `min:6` or `required`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MalformedSpec`] when the token or its rule name is
    /// empty.
    pub fn parse(token: &str) -> Result<Self, ConfigError> {
        let mut segments = token.split(':');
        let name = segments.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(ConfigError::MalformedSpec {
                token: token.to_owned(),
            });
        }

        let params: SmallVec<[String; 2]> = segments.map(str::to_owned).collect();
        Ok(Self {
            raw: token.to_owned(),
            name: name.to_owned(),
            params,
        })
    }

    /// The raw token as declared, used for dedup and error reporting.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

// ============================================================================
// SPEC LIST PARSING
// ============================================================================

/// Parses all rule-spec strings declared for one field into an ordered,
/// deduplicated token list.
///
/// Duplicate raw tokens keep their first occurrence, so `required|required`
/// behaves as a single `required` and execution order stays the declared
/// order.
///
/// # Errors
///
/// [`ConfigError::MalformedSpec`] for any empty or nameless token, such as
/// the one produced by `required||min:3`.
pub fn parse_rule_list<'a, I>(raw_specs: I) -> Result<Vec<RuleToken>, ConfigError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut tokens = Vec::new();

    for raw_spec in raw_specs {
        for token in raw_spec.split('|') {
            if !seen.insert(token.to_owned()) {
                debug!(token, "dropping duplicate rule token");
                continue;
            }
            tokens.push(RuleToken::parse(token)?);
        }
    }

    Ok(tokens)
}

// ============================================================================
// TESTS
// ============================================================================
