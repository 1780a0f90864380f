//! Text field types.

use chrono::{Datelike, Utc};

use crate::model::FormModel;
use crate::step::FieldDef;
use crate::validation::{
    EmailValidator, MaxLengthValidator, MinLengthValidator, NumberValidator, RangeValidator,
    RequiredValidator,
};
use crate::widgets::{BootstrapTextInput, BootstrapTextarea};

/// Oldest model year accepted by [`year_field`].
pub const MIN_MODEL_YEAR: i32 = 1950;

/// Minimum phone number length, counted in raw characters.
pub const MIN_PHONE_LENGTH: usize = 10;

/// Creates a text field with an optional maximum length.
pub fn text_field<F: FormModel>(
    field: F::Field,
    label: &str,
    max_length: Option<usize>,
    required: bool,
) -> FieldDef<F> {
    let mut def = FieldDef::new(field, label, BootstrapTextInput::new());

    if required {
        def = def.required().validator(RequiredValidator::new());
    }

    if let Some(max) = max_length {
        def = def.validator(MaxLengthValidator::new(max));
    }

    def
}

/// Creates a multi-line text field.
pub fn textarea_field<F: FormModel>(
    field: F::Field,
    label: &str,
    rows: usize,
    required: bool,
) -> FieldDef<F> {
    let mut def = FieldDef::new(field, label, BootstrapTextarea::new(rows));

    if required {
        def = def.required().validator(RequiredValidator::new());
    }

    def
}

/// Creates a required email field.
pub fn email_field<F: FormModel>(field: F::Field, label: &str) -> FieldDef<F> {
    FieldDef::new(field, label, BootstrapTextInput::email())
        .required()
        .validator(RequiredValidator::with_message("Email is required."))
        .validator(EmailValidator::new())
}

/// Creates a required phone field of at least ten characters.
pub fn phone_field<F: FormModel>(field: F::Field, label: &str) -> FieldDef<F> {
    FieldDef::new(field, label, BootstrapTextInput::tel())
        .required()
        .validator(RequiredValidator::with_message("Phone number is required."))
        .validator(MinLengthValidator::with_message(
            MIN_PHONE_LENGTH,
            format!("Phone number must be at least {MIN_PHONE_LENGTH} characters."),
        ))
}

/// Creates an optional numeric field. Empty input is valid.
pub fn number_field<F: FormModel>(field: F::Field, label: &str) -> FieldDef<F> {
    FieldDef::new(field, label, BootstrapTextInput::number()).validator(NumberValidator::new())
}

/// Creates a required model year field, between 1950 and next year.
pub fn year_field<F: FormModel>(field: F::Field, label: &str) -> FieldDef<F> {
    let max = Utc::now().year() + 1;
    FieldDef::new(field, label, BootstrapTextInput::number())
        .required()
        .validator(RequiredValidator::new())
        .validator(RangeValidator::with_message(
            Some(f64::from(MIN_MODEL_YEAR)),
            Some(f64::from(max)),
            format!("Enter a model year between {MIN_MODEL_YEAR} and {max}."),
        ))
}

/// Creates a file upload field.
///
/// The field's value is the number of attached files; rules on it are
/// expressed with [`FieldDef::check`].
pub fn file_field<F: FormModel>(field: F::Field, label: &str, accept: &str) -> FieldDef<F> {
    FieldDef::new(field, label, BootstrapTextInput::file())
        .attr("accept", accept)
        .attr("multiple", "multiple")
}
