//! Checkbox field types.

use crate::model::FormModel;
use crate::step::FieldDef;
use crate::validation::AcceptedValidator;
use crate::widgets::BootstrapCheckbox;

/// Creates a consent checkbox that must be ticked before submission.
pub fn consent_field<F: FormModel>(field: F::Field, label: &str) -> FieldDef<F> {
    FieldDef::new(field, label, BootstrapCheckbox::new().label(label))
        .required()
        .gates_submit()
        .validator(AcceptedValidator::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Sample, SampleField};

    #[test]
    fn test_consent_field() {
        let def = consent_field::<Sample>(SampleField::Agreed, "I agree");
        assert!(def.gates_submit);
        let mut form = Sample::default();
        assert!(def.evaluate(&form).is_some());
        form.agreed = true;
        assert_eq!(def.evaluate(&form), None);
    }
}
