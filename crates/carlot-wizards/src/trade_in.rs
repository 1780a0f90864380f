//! Trade-in request: the vehicle offered, its condition and the owner.

use carlot_forms::fields::{choice_field, email_field, number_field, phone_field, text_field};
use carlot_forms::{FieldName, FormModel, Result, StepDefinition, Value};
use serde::Serialize;

/// Longest accepted VIN.
pub const VIN_LENGTH: usize = 17;

/// Condition choices, best first.
pub const CONDITIONS: [(&str, &str); 4] = [
    ("excellent", "Excellent"),
    ("good", "Good"),
    ("fair", "Fair"),
    ("poor", "Poor"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeInField {
    Make,
    Model,
    Vin,
    Mileage,
    Condition,
    FirstName,
    LastName,
    Email,
    Phone,
}

impl FieldName for TradeInField {
    fn all() -> &'static [Self] {
        &[
            Self::Make,
            Self::Model,
            Self::Vin,
            Self::Mileage,
            Self::Condition,
            Self::FirstName,
            Self::LastName,
            Self::Email,
            Self::Phone,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Make => "make",
            Self::Model => "model",
            Self::Vin => "vin",
            Self::Mileage => "mileage",
            Self::Condition => "condition",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// The trade-in modal's data, posted as JSON to `/api/trade-ins`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeInForm {
    pub make: String,
    pub model: String,
    pub vin: String,
    pub mileage: String,
    pub condition: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Default for TradeInForm {
    fn default() -> Self {
        Self {
            make: String::new(),
            model: String::new(),
            vin: String::new(),
            mileage: String::new(),
            condition: "good".to_string(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}

impl TradeInForm {
    fn slot(&mut self, field: TradeInField) -> &mut String {
        match field {
            TradeInField::Make => &mut self.make,
            TradeInField::Model => &mut self.model,
            TradeInField::Vin => &mut self.vin,
            TradeInField::Mileage => &mut self.mileage,
            TradeInField::Condition => &mut self.condition,
            TradeInField::FirstName => &mut self.first_name,
            TradeInField::LastName => &mut self.last_name,
            TradeInField::Email => &mut self.email,
            TradeInField::Phone => &mut self.phone,
        }
    }
}

impl FormModel for TradeInForm {
    type Field = TradeInField;

    const NAME: &'static str = "trade_in";
    const ENDPOINT: &'static str = "/api/trade-ins";

    fn value(&self, field: TradeInField) -> Value {
        let text = match field {
            TradeInField::Make => &self.make,
            TradeInField::Model => &self.model,
            TradeInField::Vin => &self.vin,
            TradeInField::Mileage => &self.mileage,
            TradeInField::Condition => &self.condition,
            TradeInField::FirstName => &self.first_name,
            TradeInField::LastName => &self.last_name,
            TradeInField::Email => &self.email,
            TradeInField::Phone => &self.phone,
        };
        Value::from(text)
    }

    fn set(&mut self, field: TradeInField, value: Value) -> Result<()> {
        *self.slot(field) = value.into_text(field.name())?;
        Ok(())
    }

    fn steps() -> Vec<StepDefinition<Self>> {
        vec![
            StepDefinition::new(1, "Vehicle")
                .field(text_field(TradeInField::Make, "Make", None, true))
                .field(text_field(TradeInField::Model, "Model", None, true))
                .field(
                    text_field(TradeInField::Vin, "VIN", Some(VIN_LENGTH), true)
                        .help_text("17 characters, found on the registration document"),
                ),
            StepDefinition::new(2, "Condition")
                .field(number_field(TradeInField::Mileage, "Mileage (km)"))
                .field(choice_field(
                    TradeInField::Condition,
                    "Condition",
                    CONDITIONS.to_vec(),
                    true,
                )),
            StepDefinition::new(3, "Contact")
                .field(text_field(TradeInField::FirstName, "First name", None, true))
                .field(text_field(TradeInField::LastName, "Last name", None, true))
                .field(email_field(TradeInField::Email, "Email"))
                .field(phone_field(TradeInField::Phone, "Phone")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_forms::{AuthSession, StepChange, Wizard};

    #[test]
    fn test_nine_fields_over_three_steps() {
        let steps = TradeInForm::steps();
        assert_eq!(steps.len(), 3);
        let total: usize = steps.iter().map(|s| s.fields.len()).sum();
        assert_eq!(total, TradeInField::all().len());
        assert_eq!(total, 9);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in TradeInField::all() {
            assert_eq!(TradeInField::from_name(field.name()), Some(*field));
        }
        assert_eq!(TradeInField::from_name("first_name"), None);
    }

    #[test]
    fn test_defaults_pass_condition_step() {
        let form = TradeInForm::default();
        assert_eq!(form.condition, "good");
        let steps = TradeInForm::steps();
        assert!(carlot_forms::validate_step(&steps[1], &form).is_empty());
    }

    #[test]
    fn test_unknown_condition_rejected() {
        let mut form = TradeInForm {
            condition: "mint".into(),
            ..TradeInForm::default()
        };
        let errors = carlot_forms::validate_step(&TradeInForm::steps()[1], &form);
        assert_eq!(
            errors.get(TradeInField::Condition),
            Some("Select a valid choice.")
        );

        form.condition = "fair".into();
        assert!(carlot_forms::validate_step(&TradeInForm::steps()[1], &form).is_empty());
    }

    #[test]
    fn test_vin_too_long() {
        let mut wizard = Wizard::<TradeInForm>::new(AuthSession::default()).unwrap();
        wizard.on_change(TradeInField::Make, "Toyota").unwrap();
        wizard.on_change(TradeInField::Model, "Corolla").unwrap();
        wizard
            .on_change(TradeInField::Vin, "JT1234567890123456")
            .unwrap();
        assert_eq!(wizard.next(), StepChange::Blocked(TradeInField::Vin));

        wizard.on_change(TradeInField::Vin, "JT123456").unwrap();
        assert_eq!(wizard.next(), StepChange::Moved(2));
    }

    #[test]
    fn test_mileage_must_be_numeric() {
        let mut form = TradeInForm::default();
        form.set(TradeInField::Mileage, Value::from("lots")).unwrap();
        let errors = carlot_forms::validate_step(&TradeInForm::steps()[1], &form);
        assert!(errors.contains(TradeInField::Mileage));

        form.set(TradeInField::Mileage, Value::from(84_000_i64)).unwrap();
        let errors = carlot_forms::validate_step(&TradeInForm::steps()[1], &form);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_serializes_camel_case() {
        let form = TradeInForm {
            first_name: "Jane".into(),
            ..TradeInForm::default()
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["condition"], "good");
        assert_eq!(json.as_object().unwrap().len(), 9);
    }

    #[test]
    fn test_checkbox_value_rejected() {
        let mut form = TradeInForm::default();
        assert!(form.set(TradeInField::Make, Value::from(true)).is_err());
    }
}
