//! Multi-step insurance quotation.

use carlot_forms::fields::{
    choice_field, consent_field, email_field, number_field, phone_field, radio_field, text_field,
    year_field,
};
use carlot_forms::{FieldName, FormModel, Result, StepDefinition, Value};
use serde::Serialize;

pub const VEHICLE_TYPES: [(&str, &str); 4] = [
    ("car", "Car"),
    ("motorcycle", "Motorcycle"),
    ("van", "Van"),
    ("truck", "Truck"),
];

pub const COVERAGE_TYPES: [(&str, &str); 3] = [
    ("third_party", "Third party"),
    ("third_party_fire_theft", "Third party, fire and theft"),
    ("comprehensive", "Comprehensive"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuotationField {
    VehicleType,
    Make,
    Model,
    Year,
    VehicleValue,
    FullName,
    Email,
    Phone,
    LicenceYears,
    CoverageType,
    Consent,
}

impl FieldName for QuotationField {
    fn all() -> &'static [Self] {
        &[
            Self::VehicleType,
            Self::Make,
            Self::Model,
            Self::Year,
            Self::VehicleValue,
            Self::FullName,
            Self::Email,
            Self::Phone,
            Self::LicenceYears,
            Self::CoverageType,
            Self::Consent,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::VehicleType => "vehicleType",
            Self::Make => "make",
            Self::Model => "model",
            Self::Year => "year",
            Self::VehicleValue => "vehicleValue",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::LicenceYears => "licenceYears",
            Self::CoverageType => "coverageType",
            Self::Consent => "consent",
        }
    }
}

/// Quotation request posted to `/api/insurance/quotes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationForm {
    pub vehicle_type: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub vehicle_value: String,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub licence_years: String,
    pub coverage_type: String,
    pub consent: bool,
}

impl QuotationForm {
    fn text(&self, field: QuotationField) -> Option<&String> {
        match field {
            QuotationField::VehicleType => Some(&self.vehicle_type),
            QuotationField::Make => Some(&self.make),
            QuotationField::Model => Some(&self.model),
            QuotationField::Year => Some(&self.year),
            QuotationField::VehicleValue => Some(&self.vehicle_value),
            QuotationField::FullName => Some(&self.full_name),
            QuotationField::Email => Some(&self.email),
            QuotationField::Phone => Some(&self.phone),
            QuotationField::LicenceYears => Some(&self.licence_years),
            QuotationField::CoverageType => Some(&self.coverage_type),
            QuotationField::Consent => None,
        }
    }
}

/// Comprehensive cover is priced on the vehicle's value.
fn value_needed_for_cover(form: &QuotationForm) -> std::result::Result<(), String> {
    if form.coverage_type == "comprehensive" && form.vehicle_value.trim().is_empty() {
        return Err("Comprehensive cover needs the vehicle value (step 1).".to_string());
    }
    Ok(())
}

impl FormModel for QuotationForm {
    type Field = QuotationField;

    const NAME: &'static str = "insurance_quote";
    const ENDPOINT: &'static str = "/api/insurance/quotes";

    fn value(&self, field: QuotationField) -> Value {
        self.text(field)
            .map_or(Value::Bool(self.consent), Value::from)
    }

    fn set(&mut self, field: QuotationField, value: Value) -> Result<()> {
        let name = field.name();
        match field {
            QuotationField::VehicleType => self.vehicle_type = value.into_text(name)?,
            QuotationField::Make => self.make = value.into_text(name)?,
            QuotationField::Model => self.model = value.into_text(name)?,
            QuotationField::Year => self.year = value.into_text(name)?,
            QuotationField::VehicleValue => self.vehicle_value = value.into_text(name)?,
            QuotationField::FullName => self.full_name = value.into_text(name)?,
            QuotationField::Email => self.email = value.into_text(name)?,
            QuotationField::Phone => self.phone = value.into_text(name)?,
            QuotationField::LicenceYears => self.licence_years = value.into_text(name)?,
            QuotationField::CoverageType => self.coverage_type = value.into_text(name)?,
            QuotationField::Consent => self.consent = value.into_bool(name)?,
        }
        Ok(())
    }

    fn steps() -> Vec<StepDefinition<Self>> {
        vec![
            StepDefinition::new(1, "Vehicle")
                .field(choice_field(
                    QuotationField::VehicleType,
                    "Vehicle type",
                    VEHICLE_TYPES.to_vec(),
                    true,
                ))
                .field(text_field(QuotationField::Make, "Make", None, true))
                .field(text_field(QuotationField::Model, "Model", None, true))
                .field(year_field(QuotationField::Year, "Year"))
                .field(
                    number_field(QuotationField::VehicleValue, "Vehicle value")
                        .help_text("Required for comprehensive cover"),
                ),
            StepDefinition::new(2, "Driver")
                .field(text_field(QuotationField::FullName, "Full name", None, true))
                .field(email_field(QuotationField::Email, "Email"))
                .field(phone_field(QuotationField::Phone, "Phone"))
                .field(number_field(
                    QuotationField::LicenceYears,
                    "Years holding a licence",
                )),
            StepDefinition::new(3, "Coverage")
                .field(
                    radio_field(
                        QuotationField::CoverageType,
                        "Coverage",
                        COVERAGE_TYPES.to_vec(),
                        true,
                    )
                    .check(value_needed_for_cover),
                )
                .field(consent_field(
                    QuotationField::Consent,
                    "I agree to be contacted about this quotation",
                )),
        ]
    }
}
