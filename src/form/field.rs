//! Field descriptors and value extraction
//!
//! A field is the unit of validation: all inputs sharing one name, the
//! field's kind, and its resolved rule pipeline.

use crate::core::{FieldValue, SharedRule};
use crate::form::input::{FieldKind, InputHandle};

/// One named form field with its resolved rule pipeline.
#[derive(Debug, Clone)]
pub struct Field {
    name: String,
    kind: FieldKind,
    inputs: Vec<InputHandle>,
    rules: Vec<SharedRule>,
}

impl Field {
    pub(crate) fn new(
        name: String,
        kind: FieldKind,
        inputs: Vec<InputHandle>,
        rules: Vec<SharedRule>,
    ) -> Self {
        Self {
            name,
            kind,
            inputs,
            rules,
        }
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field kind (taken from its first input).
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The inputs sharing this field's name, in registration order.
    #[must_use]
    pub fn inputs(&self) -> &[InputHandle] {
        &self.inputs
    }

    /// The resolved rule pipeline, in declared order after dedup.
    #[must_use]
    pub fn rules(&self) -> &[SharedRule] {
        &self.rules
    }

    /// Extracts the value this field's rules run against.
    ///
    /// Checkbox and radio groups yield the checked option's value, or
    /// [`FieldValue::Missing`] when nothing is checked. Every other kind
    /// yields the first input's text value.
    #[must_use]
    pub fn current_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Checkbox | FieldKind::Radio => self
                .inputs
                .iter()
                .find(|input| input.checked())
                .map(|input| FieldValue::Text(input.value()))
                .unwrap_or(FieldValue::Missing),
            _ => self
                .inputs
                .first()
                .map(|input| FieldValue::Text(input.value()))
                .unwrap_or(FieldValue::Missing),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
