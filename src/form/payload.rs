//! Submission payload
//!
//! On successful validation the form folds its non-disabled inputs, in
//! registration order, into one insertion-ordered mapping from field name
//! to a kind-typed value. This payload is the sole output handed to the
//! submission collaborator.

use indexmap::IndexMap;
use serde::Serialize;

use crate::form::input::{FieldKind, FileRef, InputHandle};

// ============================================================================
// PAYLOAD VALUE
// ============================================================================

/// A payload entry, typed by the originating field's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PayloadValue {
    /// Plain value: text inputs, and the checked radio option (empty string
    /// when no option is checked).
    Text(String),
    /// Checked values of a checkbox group; empty when nothing is checked.
    List(Vec<String>),
    /// Selected files of a file input.
    Files(Vec<FileRef>),
}

// ============================================================================
// PAYLOAD
// ============================================================================

/// The keyed data mapping built from a fully valid form.
///
/// Preserves field registration order and serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload {
    entries: IndexMap<String, PayloadValue>,
}

impl Payload {
    /// Looks up a field's entry.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PayloadValue> {
        self.entries.get(name)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the payload has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serializes the payload to a JSON value.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Builds the payload from non-disabled inputs in registration order.
pub(crate) fn build_payload(inputs: &[InputHandle]) -> Payload {
    let mut entries: IndexMap<String, PayloadValue> = IndexMap::new();

    for input in inputs {
        if input.disabled() {
            continue;
        }
        let name = input.name().to_owned();
        match input.kind() {
            FieldKind::Checkbox => {
                let entry = entries
                    .entry(name)
                    .or_insert_with(|| PayloadValue::List(Vec::new()));
                if input.checked() {
                    match entry {
                        PayloadValue::List(values) => values.push(input.value()),
                        // A non-list entry under this name gets replaced by a
                        // fresh single-element list.
                        other => *other = PayloadValue::List(vec![input.value()]),
                    }
                }
            }
            FieldKind::Radio => {
                if input.checked() {
                    entries.insert(name, PayloadValue::Text(input.value()));
                } else {
                    entries
                        .entry(name)
                        .or_insert_with(|| PayloadValue::Text(String::new()));
                }
            }
            FieldKind::File => {
                entries.insert(name, PayloadValue::Files(input.files()));
            }
            FieldKind::Text | FieldKind::Other => {
                entries.insert(name, PayloadValue::Text(input.value()));
            }
        }
    }

    Payload { entries }
}

// ============================================================================
// TESTS
// ============================================================================
