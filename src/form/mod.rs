//! Form assembly, validation, and submission
//!
//! The form is the aggregate: it owns the input handles, the per-field
//! rule pipelines resolved at build time, and the two collaborators a
//! consumer can inject — a [`FormUi`] presenter receiving validity
//! callbacks and an optional submission callback receiving the payload.
//!
//! Everything configurable flows in through [`FormBuilder`]; after
//! [`FormBuilder::build`] succeeds the form's rule pipelines are fixed and
//! only input state changes.

mod engine;
mod field;
mod input;
mod payload;

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;

use crate::core::{ConfigError, ValueRef};
use crate::parser::parse_rule_list;
use crate::registry::{RefResolver, RuleRegistry, resolve_params};

pub use engine::validate_field;
pub use field::Field;
pub use input::{FieldKind, FileRef, Input, InputHandle};
pub use payload::{Payload, PayloadValue};

// ============================================================================
// PRESENTER
// ============================================================================

/// Receives per-field validity outcomes.
///
/// The engine reports exactly one callback per validated field per run:
/// `mark_invalid` with the first failing rule's message, or `mark_valid`.
pub trait FormUi {
    /// The field failed; `message` is the first failing rule's message.
    fn mark_invalid(&self, field: &str, message: &str);

    /// The field passed its whole pipeline (or has no rules).
    fn mark_valid(&self, field: &str);
}

/// A presenter that ignores every callback. Used when none is injected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopUi;

impl FormUi for NoopUi {
    fn mark_invalid(&self, _field: &str, _message: &str) {}

    fn mark_valid(&self, _field: &str) {}
}

// ============================================================================
// SUBMIT OUTCOME
// ============================================================================

/// Result of a submission attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Every field was valid and the submission callback received the
    /// payload, returned here for inspection.
    Submitted(Payload),
    /// Every field was valid but no callback was configured; the caller
    /// should fall through to its default submission path.
    DefaultSubmission,
    /// At least one field was invalid; nothing was submitted.
    Rejected,
}

impl SubmitOutcome {
    /// Returns true unless the submission was rejected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !matches!(self, SubmitOutcome::Rejected)
    }
}

// ============================================================================
// FORM BUILDER
// ============================================================================

type SubmitCallback = Box<dyn Fn(&Payload)>;

/// Builder assembling a [`Form`] from input declarations.
///
/// # Examples
///
/// ```rust,ignore
/// use formcheck::form::{Form, Input};
///
/// let form = Form::builder()
///     .input(Input::text("email").rules("required|email"))
///     .input(Input::text("password").id("password").rules("required|min:6"))
///     .input(Input::text("password2").rules("required|confirmation:#password"))
///     .on_submit(|payload| println!("{payload:?}"))
///     .build()?;
/// # Ok::<(), formcheck::core::ConfigError>(())
/// ```
#[derive(Default)]
pub struct FormBuilder {
    inputs: Vec<Input>,
    registry: RuleRegistry,
    ui: Option<Box<dyn FormUi>>,
    on_submit: Option<SubmitCallback>,
}

/// Resolves `#selector` parameters against the built input handles by id.
struct HandleResolver {
    by_id: HashMap<String, InputHandle>,
}

impl RefResolver for HandleResolver {
    fn value_ref(&self, id: &str) -> Option<ValueRef> {
        self.by_id
            .get(id)
            .map(|handle| handle.value_ref(&format!("#{id}")))
    }
}

impl FormBuilder {
    /// Creates an empty builder with the built-in rule catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one input declaration. Registration order is payload order.
    #[must_use]
    pub fn input(mut self, input: Input) -> Self {
        self.inputs.push(input);
        self
    }

    /// Adds several input declarations at once.
    #[must_use]
    pub fn inputs(mut self, inputs: impl IntoIterator<Item = Input>) -> Self {
        self.inputs.extend(inputs);
        self
    }

    /// Registers a custom rule factory usable from rule specs.
    #[must_use]
    pub fn rule(
        mut self,
        name: impl Into<String>,
        factory: impl Fn(&[crate::registry::RuleParam]) -> Result<crate::core::SharedRule, ConfigError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        self.registry.register(name, factory);
        self
    }

    /// Injects the presenter receiving validity callbacks.
    #[must_use]
    pub fn ui(mut self, ui: impl FormUi + 'static) -> Self {
        self.ui = Some(Box::new(ui));
        self
    }

    /// Injects the submission callback receiving the payload when every
    /// field is valid.
    #[must_use]
    pub fn on_submit(mut self, callback: impl Fn(&Payload) + 'static) -> Self {
        self.on_submit = Some(Box::new(callback));
        self
    }

    /// Resolves every declared rule spec and assembles the form.
    ///
    /// Same-named inputs fold into one field whose kind is the first
    /// input's kind and whose pipeline is the ordered, deduplicated union
    /// of their specs.
    ///
    /// # Errors
    ///
    /// Fails fast on the first misconfigured spec:
    /// [`ConfigError::UnknownRule`], [`ConfigError::MalformedSpec`],
    /// [`ConfigError::MissingParam`], or [`ConfigError::InvalidParam`].
    pub fn build(self) -> Result<Form, ConfigError> {
        let handles: Vec<InputHandle> = self
            .inputs
            .into_iter()
            .map(InputHandle::from_declaration)
            .collect();

        // First declaration wins when two inputs claim the same id.
        let mut by_id: HashMap<String, InputHandle> = HashMap::new();
        for handle in &handles {
            if let Some(id) = handle.id() {
                by_id.entry(id.to_owned()).or_insert_with(|| handle.clone());
            }
        }
        let resolver = HandleResolver { by_id };

        let mut groups: IndexMap<String, Vec<InputHandle>> = IndexMap::new();
        for handle in &handles {
            groups
                .entry(handle.name().to_owned())
                .or_default()
                .push(handle.clone());
        }

        let mut fields = Vec::with_capacity(groups.len());
        for (name, group) in groups {
            let kind = group[0].kind();
            let specs: Vec<&str> = group.iter().filter_map(InputHandle::rules_spec).collect();
            let tokens = parse_rule_list(specs)?;

            let mut rules = Vec::with_capacity(tokens.len());
            for token in &tokens {
                let params = resolve_params(token, &resolver);
                rules.push(self.registry.build(token, &params)?);
            }

            debug!(
                field = name.as_str(),
                rules = rules.len(),
                "resolved field pipeline"
            );
            fields.push(Field::new(name, kind, group, rules));
        }

        Ok(Form {
            inputs: handles,
            fields,
            ui: self.ui.unwrap_or_else(|| Box::new(NoopUi)),
            on_submit: self.on_submit,
        })
    }
}

impl std::fmt::Debug for FormBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBuilder")
            .field("inputs", &self.inputs.len())
            .field("registry", &self.registry)
            .field("ui", &self.ui.is_some())
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

// ============================================================================
// FORM
// ============================================================================

/// A built form: live input handles, resolved per-field pipelines, and the
/// injected collaborators.
pub struct Form {
    inputs: Vec<InputHandle>,
    fields: Vec<Field>,
    ui: Box<dyn FormUi>,
    on_submit: Option<SubmitCallback>,
}

impl Form {
    /// Starts a builder.
    #[must_use]
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// The form's fields in registration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Looks up an input handle by its declared id.
    #[must_use]
    pub fn input_by_id(&self, id: &str) -> Option<&InputHandle> {
        self.inputs.iter().find(|input| input.id() == Some(id))
    }

    /// Validates one field against its current value, reporting through
    /// the presenter. Returns `None` for an unknown field name.
    pub fn validate_field(&self, name: &str) -> Option<bool> {
        self.field(name)
            .map(|field| engine::validate_field(field, self.ui.as_ref()))
    }

    /// Clears any validation marking on a field by reporting it valid,
    /// without running its rules. Returns false for an unknown field name.
    pub fn clear_field(&self, name: &str) -> bool {
        match self.field(name) {
            Some(field) => {
                self.ui.mark_valid(field.name());
                true
            }
            None => false,
        }
    }

    /// Updates a field's text value on its first input. Returns false for
    /// an unknown field name.
    pub fn set_value(&self, name: &str, value: impl Into<String>) -> bool {
        match self.field(name).and_then(|field| field.inputs().first()) {
            Some(input) => {
                input.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Updates the checked state of one option in a checkbox or radio
    /// group, identified by its declared value. Checking a radio option
    /// unchecks its siblings. Returns false when the field or option does
    /// not exist.
    pub fn set_checked(&self, name: &str, option_value: &str, checked: bool) -> bool {
        let Some(field) = self.field(name) else {
            return false;
        };
        let Some(target) = field
            .inputs()
            .iter()
            .find(|input| input.value() == option_value)
        else {
            return false;
        };

        if checked && field.kind() == FieldKind::Radio {
            for sibling in field.inputs() {
                sibling.set_checked(false);
            }
        }
        target.set_checked(checked);
        true
    }

    /// Validates every field, then submits.
    ///
    /// All fields are always validated — an early failure never hides
    /// later fields' outcomes from the presenter. On success the payload
    /// goes to the submission callback if one was configured; otherwise
    /// the caller gets [`SubmitOutcome::DefaultSubmission`].
    pub fn submit(&self) -> SubmitOutcome {
        let mut all_valid = true;
        for field in &self.fields {
            all_valid &= engine::validate_field(field, self.ui.as_ref());
        }
        if !all_valid {
            debug!("submission rejected by validation");
            return SubmitOutcome::Rejected;
        }

        match &self.on_submit {
            Some(callback) => {
                let data = payload::build_payload(&self.inputs);
                debug!(fields = data.len(), "submitting payload to callback");
                callback(&data);
                SubmitOutcome::Submitted(data)
            }
            None => SubmitOutcome::DefaultSubmission,
        }
    }
}

impl std::fmt::Debug for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Form")
            .field("inputs", &self.inputs)
            .field("fields", &self.fields.iter().map(Field::name).collect::<Vec<_>>())
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
