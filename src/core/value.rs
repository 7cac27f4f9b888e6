//! Field values and lazy cross-field references

use std::fmt;
use std::sync::Arc;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The value a field presents to its rule pipeline.
///
/// Text inputs yield [`FieldValue::Text`]. Grouped exclusive/multi selections
/// (checkbox, radio) yield the checked option's value as `Text`, or
/// [`FieldValue::Missing`] when nothing is checked. [`FieldValue::Flag`]
/// covers boolean-like inputs so `required` can reject an explicit `false`
/// instead of relying on truthiness coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A plain text value.
    Text(String),
    /// A boolean value.
    Flag(bool),
    /// No value is present (e.g. no option in the group is checked).
    Missing,
}

impl FieldValue {
    /// Returns the text content, if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if no value is present.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

// ============================================================================
// VALUE REF
// ============================================================================

/// A deferred read of another input's live value.
///
/// Cross-field rules like `confirmation:#password` must compare against the
/// referenced input's value *at validation time*, not its value when the
/// form was built. A `ValueRef` therefore stores a reader closure and
/// re-invokes it on every [`get`](ValueRef::get); it never caches the value.
#[derive(Clone)]
pub struct ValueRef {
    selector: String,
    read: Arc<dyn Fn() -> String + Send + Sync>,
}

impl ValueRef {
    /// Creates a reference from the selector it was resolved from and a
    /// reader closure returning the referenced input's current value.
    pub fn new(
        selector: impl Into<String>,
        read: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            selector: selector.into(),
            read: Arc::new(read),
        }
    }

    /// The selector this reference was resolved from, e.g. `#password`.
    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Reads the referenced input's current value.
    #[must_use]
    pub fn get(&self) -> String {
        (self.read)()
    }
}

impl fmt::Debug for ValueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRef")
            .field("selector", &self.selector)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_as_text() {
        assert_eq!(FieldValue::from("abc").as_text(), Some("abc"));
        assert_eq!(FieldValue::Flag(true).as_text(), None);
        assert_eq!(FieldValue::Missing.as_text(), None);
    }

    #[test]
    fn test_value_ref_reads_live_value() {
        let shared = Arc::new(Mutex::new(String::from("first")));
        let source = Arc::clone(&shared);
        let value_ref = ValueRef::new("#other", move || source.lock().unwrap().clone());

        assert_eq!(value_ref.get(), "first");
        *shared.lock().unwrap() = String::from("second");
        assert_eq!(value_ref.get(), "second");
    }

    #[test]
    fn test_value_ref_selector() {
        let value_ref = ValueRef::new("#pwd", String::new);
        assert_eq!(value_ref.selector(), "#pwd");
    }
}
