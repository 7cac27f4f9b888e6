//! Per-field validation run
//!
//! The engine is deliberately small: extract the field's current value
//! once, run its pipeline in order, stop at the first failing rule. The
//! only side effects are the two presenter callbacks — everything visual
//! happens outside the core.

use tracing::debug;

use crate::form::FormUi;
use crate::form::field::Field;

/// Runs a field's rule pipeline against its current value.
///
/// The first failing rule reports through `ui.mark_invalid` and ends the
/// run; later rules are skipped. If every rule passes — including the
/// trivially-valid empty pipeline — the field reports through
/// `ui.mark_valid`.
///
/// Validity is recomputed from scratch on every call; nothing is cached,
/// since the field's own value or a referenced field may have changed.
pub fn validate_field(field: &Field, ui: &dyn FormUi) -> bool {
    let value = field.current_value();

    for rule in field.rules() {
        if let Err(error) = rule.check(&value) {
            debug!(
                field = field.name(),
                rule = rule.name(),
                code = error.code(),
                "field failed validation"
            );
            ui.mark_invalid(field.name(), error.message());
            return false;
        }
    }

    ui.mark_valid(field.name());
    true
}

// ============================================================================
// TESTS
// ============================================================================
