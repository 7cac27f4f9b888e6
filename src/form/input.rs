//! Form input model
//!
//! [`Input`] is the declarative description a consumer hands to the builder:
//! name, kind, optional id, rule spec, and initial state. The builder turns
//! each one into an [`InputHandle`], a shared live view of the input's
//! state. Handles use interior mutability so cross-field [`ValueRef`]s and
//! the consumer observe the same current values — the core itself only ever
//! reads them.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::ValueRef;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The kind of a form field, driving value extraction and payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Free-text input (also covers passwords, selects, textareas).
    #[default]
    Text,
    /// Multi-select option group sharing a name.
    Checkbox,
    /// Exclusive option group sharing a name.
    Radio,
    /// File picker; carries opaque [`FileRef`]s.
    File,
    /// Anything else; treated like text.
    Other,
}

/// An opaque handle to a selected file. The engine never reads file
/// contents; handles pass through to the payload untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// File name as presented by the picker.
    pub name: String,
    /// File size in bytes.
    pub size: u64,
}

impl FileRef {
    /// Creates a file handle.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

// ============================================================================
// INPUT DECLARATION
// ============================================================================

/// Declarative description of one form input, consumed by the builder.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::form::Input;
///
/// let password = Input::text("password").id("password").rules("required|min:6");
/// let confirm = Input::text("password2").rules("required|confirmation:#password");
/// let red = Input::checkbox("color", "red").checked(true);
/// ```
#[derive(Debug, Clone)]
pub struct Input {
    pub(crate) name: String,
    pub(crate) id: Option<String>,
    pub(crate) kind: FieldKind,
    pub(crate) rules: Option<String>,
    pub(crate) value: String,
    pub(crate) checked: bool,
    pub(crate) disabled: bool,
    pub(crate) files: Vec<FileRef>,
}

impl Input {
    /// Creates an input of the given kind.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            id: None,
            kind,
            rules: None,
            value: String::new(),
            checked: false,
            disabled: false,
            files: Vec::new(),
        }
    }

    /// Creates a text input.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Creates one checkbox option of a (possibly multi-option) group.
    pub fn checkbox(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Checkbox).value(value)
    }

    /// Creates one radio option of an exclusive group.
    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Radio).value(value)
    }

    /// Creates a file input.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::File)
    }

    /// Sets the id this input can be referenced by (`#id` in rule specs).
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Declares the input's rule spec, e.g. `"required|min:6"`.
    #[must_use]
    pub fn rules(mut self, spec: impl Into<String>) -> Self {
        self.rules = Some(spec.into());
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the initial checked state (checkbox/radio options).
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Administratively disables the input, excluding it from the payload.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the initial selected files.
    #[must_use]
    pub fn files(mut self, files: Vec<FileRef>) -> Self {
        self.files = files;
        self
    }
}

// ============================================================================
// INPUT HANDLE
// ============================================================================

#[derive(Debug)]
struct InputState {
    value: String,
    checked: bool,
    disabled: bool,
    files: Vec<FileRef>,
}

/// A shared live view of one input's state.
///
/// Cloning a handle shares the underlying state; this is what lets a
/// [`ValueRef`] captured at setup read the value the input holds *now*.
#[derive(Debug, Clone)]
pub struct InputHandle {
    name: Arc<str>,
    id: Option<Arc<str>>,
    kind: FieldKind,
    rules: Option<Arc<str>>,
    state: Arc<RwLock<InputState>>,
}

impl InputHandle {
    pub(crate) fn from_declaration(input: Input) -> Self {
        Self {
            name: input.name.into(),
            id: input.id.map(Into::into),
            kind: input.kind,
            rules: input.rules.map(Into::into),
            state: Arc::new(RwLock::new(InputState {
                value: input.value,
                checked: input.checked,
                disabled: input.disabled,
                files: input.files,
            })),
        }
    }

    /// The input's field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The input's referenceable id, if declared.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The input's kind.
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// The raw rule spec declared on this input, if any.
    #[must_use]
    pub fn rules_spec(&self) -> Option<&str> {
        self.rules.as_deref()
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> String {
        self.state.read().value.clone()
    }

    /// Updates the value.
    pub fn set_value(&self, value: impl Into<String>) {
        self.state.write().value = value.into();
    }

    /// The current checked state.
    #[must_use]
    pub fn checked(&self) -> bool {
        self.state.read().checked
    }

    /// Updates the checked state. Radio-group exclusivity is the form's
    /// concern, not the handle's — prefer `Form::set_checked`.
    pub fn set_checked(&self, checked: bool) {
        self.state.write().checked = checked;
    }

    /// Whether the input is administratively disabled.
    #[must_use]
    pub fn disabled(&self) -> bool {
        self.state.read().disabled
    }

    /// Updates the disabled state.
    pub fn set_disabled(&self, disabled: bool) {
        self.state.write().disabled = disabled;
    }

    /// The currently selected files.
    #[must_use]
    pub fn files(&self) -> Vec<FileRef> {
        self.state.read().files.clone()
    }

    /// Replaces the selected files.
    pub fn set_files(&self, files: Vec<FileRef>) {
        self.state.write().files = files;
    }

    /// Creates a lazy reference reading this input's live value.
    pub(crate) fn value_ref(&self, selector: &str) -> ValueRef {
        let handle = self.clone();
        ValueRef::new(selector, move || handle.value())
    }
}

// ============================================================================
// TESTS
// ============================================================================
