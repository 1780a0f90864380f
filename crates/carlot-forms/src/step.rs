//! Step definitions and the step validator.

use crate::error::ErrorMap;
use crate::model::{FieldName, FormModel};
use crate::validation::Validator;
use crate::widgets::{Widget, WidgetAttrs};

/// A rule that may read any field of the form, not just its own.
pub type CrossFieldCheck<F> = Box<dyn Fn(&F) -> Result<(), String> + Send + Sync>;

/// Definition of a form field within a step.
pub struct FieldDef<F: FormModel> {
    /// Field key.
    pub field: F::Field,
    /// Field label.
    pub label: String,
    /// Whether the field is marked as required in the UI.
    pub required: bool,
    /// Whether the submit action stays disabled until the field is ticked.
    pub gates_submit: bool,
    /// The widget to render.
    pub widget: Box<dyn Widget>,
    /// Help text.
    pub help_text: Option<String>,
    /// Validators applied to the field's own value.
    pub validators: Vec<Box<dyn Validator>>,
    /// Checks that read other fields of the form.
    pub checks: Vec<CrossFieldCheck<F>>,
    /// Widget attributes.
    pub attrs: WidgetAttrs,
}

impl<F: FormModel> std::fmt::Debug for FieldDef<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldDef")
            .field("field", &self.field)
            .field("label", &self.label)
            .field("required", &self.required)
            .field("gates_submit", &self.gates_submit)
            .field("help_text", &self.help_text)
            .field("validators", &self.validators.len())
            .field("checks", &self.checks.len())
            .finish_non_exhaustive()
    }
}

impl<F: FormModel> FieldDef<F> {
    /// Creates a new field definition.
    pub fn new(field: F::Field, label: impl Into<String>, widget: impl Widget + 'static) -> Self {
        Self {
            field,
            label: label.into(),
            required: false,
            gates_submit: false,
            widget: Box::new(widget),
            help_text: None,
            validators: Vec::new(),
            checks: Vec::new(),
            attrs: WidgetAttrs::new(),
        }
    }

    /// Makes the field required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Keeps submit disabled until the field holds `true`.
    #[must_use]
    pub fn gates_submit(mut self) -> Self {
        self.gates_submit = true;
        self
    }

    /// Sets help text.
    #[must_use]
    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Adds a validator.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Adds a cross-field check.
    #[must_use]
    pub fn check(
        mut self,
        check: impl Fn(&F) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Sets a widget attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Runs the field's rules against the form and returns the first failure.
    ///
    /// Value validators run before cross-field checks, each in the order
    /// they were added.
    pub fn evaluate(&self, form: &F) -> Option<String> {
        let value = form.value(self.field);
        self.validators
            .iter()
            .find_map(|v| v.validate(&value).err())
            .or_else(|| self.checks.iter().find_map(|check| check(form).err()))
    }
}

/// One page of a multi-step form.
pub struct StepDefinition<F: FormModel> {
    /// Position of the step, starting at 1.
    pub index: usize,
    /// Label shown in the step header.
    pub label: String,
    /// Fields shown on this step, in display order.
    pub fields: Vec<FieldDef<F>>,
}

impl<F: FormModel> std::fmt::Debug for StepDefinition<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepDefinition")
            .field("index", &self.index)
            .field("label", &self.label)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<F: FormModel> StepDefinition<F> {
    /// Creates an empty step.
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            index,
            label: label.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the step.
    #[must_use]
    pub fn field(mut self, field: FieldDef<F>) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns whether the field belongs to this step.
    pub fn contains(&self, field: F::Field) -> bool {
        self.fields.iter().any(|def| def.field == field)
    }

    /// Returns the definition of a field on this step.
    pub fn get(&self, field: F::Field) -> Option<&FieldDef<F>> {
        self.fields.iter().find(|def| def.field == field)
    }
}

/// Validates one step. An empty map means the step is valid.
pub fn validate_step<F: FormModel>(step: &StepDefinition<F>, form: &F) -> ErrorMap<F::Field> {
    let mut errors = ErrorMap::new();
    collect_step(step, form, &mut errors);
    errors
}

/// Validates every step, returning the union of failures in step order.
pub fn validate_all<F: FormModel>(steps: &[StepDefinition<F>], form: &F) -> ErrorMap<F::Field> {
    let mut errors = ErrorMap::new();
    for step in steps {
        collect_step(step, form, &mut errors);
    }
    errors
}

fn collect_step<F: FormModel>(step: &StepDefinition<F>, form: &F, errors: &mut ErrorMap<F::Field>) {
    for def in &step.fields {
        if let Some(message) = def.evaluate(form) {
            tracing::trace!(field = def.field.name(), step = step.index, %message, "field invalid");
            errors.insert(def.field, message);
        }
    }
}
