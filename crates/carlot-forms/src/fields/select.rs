//! Select field types.

use crate::model::FormModel;
use crate::step::FieldDef;
use crate::validation::{ChoiceValidator, RequiredValidator};
use crate::widgets::{BootstrapRadioSelect, BootstrapSelect};

/// Creates a choice field (select/dropdown).
pub fn choice_field<F: FormModel>(
    field: F::Field,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> FieldDef<F> {
    let allowed = ChoiceValidator::new(choices.iter().map(|(value, _)| *value));
    let mut widget = BootstrapSelect::new(choices);
    if required {
        widget = widget.blank_label("Select...");
    }

    let mut def = FieldDef::new(field, label, widget);

    if required {
        def = def
            .required()
            .validator(RequiredValidator::with_message("Please choose an option."));
    }

    def.validator(allowed)
}

/// Creates a radio button group.
pub fn radio_field<F: FormModel>(
    field: F::Field,
    label: &str,
    choices: Vec<(&str, &str)>,
    required: bool,
) -> FieldDef<F> {
    let allowed = ChoiceValidator::new(choices.iter().map(|(value, _)| *value));
    let mut def = FieldDef::new(field, label, BootstrapRadioSelect::new(choices));

    if required {
        def = def
            .required()
            .validator(RequiredValidator::with_message("Please choose an option."));
    }

    def.validator(allowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Sample, SampleField};

    #[test]
    fn test_choice_field() {
        let choices = vec![("good", "Good"), ("fair", "Fair")];
        let def = choice_field::<Sample>(SampleField::Note, "Condition", choices, true);
        assert!(def.required);
        assert_eq!(
            def.evaluate(&Sample::default()),
            Some("Please choose an option.".to_string())
        );
    }

    #[test]
    fn test_choice_field_rejects_unlisted_value() {
        let choices = vec![("good", "Good"), ("fair", "Fair")];
        let def = choice_field::<Sample>(SampleField::Note, "Condition", choices, true);
        let mut form = Sample {
            note: "mint".into(),
            ..Sample::default()
        };
        assert_eq!(def.evaluate(&form), Some("Select a valid choice.".to_string()));
        form.note = "fair".into();
        assert_eq!(def.evaluate(&form), None);
    }

    #[test]
    fn test_radio_field_optional() {
        let choices = vec![("a", "A"), ("b", "B")];
        let def = radio_field::<Sample>(SampleField::Note, "Pick", choices, false);
        assert!(!def.required);
        assert_eq!(def.evaluate(&Sample::default()), None);

        let form = Sample {
            note: "c".into(),
            ..Sample::default()
        };
        assert_eq!(def.evaluate(&form), Some("Select a valid choice.".to_string()));
    }
}
