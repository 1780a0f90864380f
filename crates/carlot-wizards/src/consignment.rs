//! Consignment: a seller hands a vehicle to the dealer to sell on their behalf.
//!
//! Field names use the nested `vehicle[...]` / `seller[...]` form the backend
//! expects in its multipart body.

use std::path::Path;

use carlot_forms::fields::{
    email_field, file_field, number_field, phone_field, text_field, textarea_field, year_field,
};
use carlot_forms::{Attachment, FieldName, FormError, FormModel, Result, StepDefinition, Value, Wizard};
use serde::Serialize;
use tracing::debug;

/// Photo types offered by the file picker.
pub const PHOTO_ACCEPT: &str = "image/jpeg,image/png,image/webp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConsignmentField {
    Make,
    Model,
    Year,
    Mileage,
    AskingPrice,
    Description,
    Photos,
    SellerName,
    SellerEmail,
    SellerPhone,
}

impl FieldName for ConsignmentField {
    fn all() -> &'static [Self] {
        &[
            Self::Make,
            Self::Model,
            Self::Year,
            Self::Mileage,
            Self::AskingPrice,
            Self::Description,
            Self::Photos,
            Self::SellerName,
            Self::SellerEmail,
            Self::SellerPhone,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Make => "vehicle[make]",
            Self::Model => "vehicle[model]",
            Self::Year => "vehicle[year]",
            Self::Mileage => "vehicle[mileage]",
            Self::AskingPrice => "vehicle[askingPrice]",
            Self::Description => "vehicle[description]",
            Self::Photos => "vehicle[photos]",
            Self::SellerName => "seller[name]",
            Self::SellerEmail => "seller[email]",
            Self::SellerPhone => "seller[phone]",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    pub asking_price: String,
    pub description: String,
    #[serde(skip)]
    pub photos: Vec<Attachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SellerDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Consignment request posted as `multipart/form-data` to `/api/consignments`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsignmentForm {
    pub vehicle: VehicleDetails,
    pub seller: SellerDetails,
}

impl ConsignmentForm {
    fn slot(&mut self, field: ConsignmentField) -> Option<&mut String> {
        match field {
            ConsignmentField::Make => Some(&mut self.vehicle.make),
            ConsignmentField::Model => Some(&mut self.vehicle.model),
            ConsignmentField::Year => Some(&mut self.vehicle.year),
            ConsignmentField::Mileage => Some(&mut self.vehicle.mileage),
            ConsignmentField::AskingPrice => Some(&mut self.vehicle.asking_price),
            ConsignmentField::Description => Some(&mut self.vehicle.description),
            ConsignmentField::SellerName => Some(&mut self.seller.name),
            ConsignmentField::SellerEmail => Some(&mut self.seller.email),
            ConsignmentField::SellerPhone => Some(&mut self.seller.phone),
            ConsignmentField::Photos => None,
        }
    }
}

fn has_photo(form: &ConsignmentForm) -> std::result::Result<(), String> {
    if form.vehicle.photos.is_empty() {
        Err("Add at least one photo of the vehicle.".to_string())
    } else {
        Ok(())
    }
}

impl FormModel for ConsignmentForm {
    type Field = ConsignmentField;

    const NAME: &'static str = "consignment";
    const ENDPOINT: &'static str = "/api/consignments";

    fn value(&self, field: ConsignmentField) -> Value {
        let text = match field {
            ConsignmentField::Make => &self.vehicle.make,
            ConsignmentField::Model => &self.vehicle.model,
            ConsignmentField::Year => &self.vehicle.year,
            ConsignmentField::Mileage => &self.vehicle.mileage,
            ConsignmentField::AskingPrice => &self.vehicle.asking_price,
            ConsignmentField::Description => &self.vehicle.description,
            ConsignmentField::SellerName => &self.seller.name,
            ConsignmentField::SellerEmail => &self.seller.email,
            ConsignmentField::SellerPhone => &self.seller.phone,
            ConsignmentField::Photos => return Value::from(self.vehicle.photos.len()),
        };
        Value::from(text)
    }

    fn set(&mut self, field: ConsignmentField, value: Value) -> Result<()> {
        let Some(slot) = self.slot(field) else {
            return Err(FormError::InvalidValue {
                field: field.name().to_string(),
                message: "photos are attached as files, not values".to_string(),
            });
        };
        *slot = value.into_text(field.name())?;
        Ok(())
    }

    fn steps() -> Vec<StepDefinition<Self>> {
        vec![
            StepDefinition::new(1, "Vehicle")
                .field(text_field(ConsignmentField::Make, "Make", None, true))
                .field(text_field(ConsignmentField::Model, "Model", None, true))
                .field(year_field(ConsignmentField::Year, "Year"))
                .field(number_field(ConsignmentField::Mileage, "Mileage (km)"))
                .field(number_field(ConsignmentField::AskingPrice, "Asking price"))
                .field(textarea_field(
                    ConsignmentField::Description,
                    "Description",
                    4,
                    false,
                ))
                .field(
                    file_field(ConsignmentField::Photos, "Photos", PHOTO_ACCEPT)
                        .required()
                        .check(has_photo),
                ),
            StepDefinition::new(2, "Seller")
                .field(text_field(ConsignmentField::SellerName, "Name", None, true))
                .field(email_field(ConsignmentField::SellerEmail, "Email"))
                .field(phone_field(ConsignmentField::SellerPhone, "Phone")),
        ]
    }

    fn attachments(&self) -> Vec<(&'static str, &Attachment)> {
        let name = ConsignmentField::Photos.name();
        self.vehicle.photos.iter().map(|p| (name, p)).collect()
    }
}

/// Reads photos from disk and attaches them to the form.
pub async fn attach_photos<P: AsRef<Path>>(
    wizard: &mut Wizard<ConsignmentForm>,
    paths: &[P],
) -> crate::Result<()> {
    let mut photos = Vec::with_capacity(paths.len());
    for path in paths {
        photos.push(carlot_client::load_attachment(path).await?);
    }

    debug!(count = photos.len(), "attaching photos");
    wizard.update(ConsignmentField::Photos, |form| {
        form.vehicle.photos.extend(photos);
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use carlot_forms::{AuthSession, Payload, StepChange};

    fn photo() -> Attachment {
        Attachment::new("front.jpg", "image/jpeg", b"jpeg".to_vec())
    }

    fn filled() -> ConsignmentForm {
        ConsignmentForm {
            vehicle: VehicleDetails {
                make: "Honda".into(),
                model: "Civic".into(),
                year: "2017".into(),
                mileage: "92000".into(),
                asking_price: "11500".into(),
                description: "One owner".into(),
                photos: vec![photo()],
            },
            seller: SellerDetails {
                name: "Sam Perera".into(),
                email: "sam@example.com".into(),
                phone: "0712345678".into(),
            },
        }
    }

    #[test]
    fn test_photo_required() {
        let form = ConsignmentForm {
            vehicle: VehicleDetails {
                photos: Vec::new(),
                ..filled().vehicle
            },
            ..filled()
        };
        let mut wizard = Wizard::with_form(AuthSession::default(), form).unwrap();
        assert_eq!(wizard.next(), StepChange::Blocked(ConsignmentField::Photos));

        wizard
            .update(ConsignmentField::Photos, |f| f.vehicle.photos.push(photo()))
            .unwrap();
        assert!(wizard.errors().is_empty());
        assert_eq!(wizard.next(), StepChange::Moved(2));
    }

    #[test]
    fn test_photos_cannot_be_set_as_text() {
        let mut form = ConsignmentForm::default();
        assert!(form
            .set(ConsignmentField::Photos, Value::from("front.jpg"))
            .is_err());
        assert_eq!(form.value(ConsignmentField::Photos), Value::from(0.0));
    }

    #[test]
    fn test_encodes_nested_multipart() {
        let payload = carlot_forms::submit::encode(&filled()).unwrap();
        assert_eq!(payload.content_type(), "multipart/form-data");
        assert_eq!(payload.text("vehicle[make]"), Some("Honda".to_string()));
        assert_eq!(payload.text("vehicle[askingPrice]"), Some("11500".to_string()));
        assert_eq!(payload.text("seller[name]"), Some("Sam Perera".to_string()));

        let Payload::Multipart(parts) = payload else {
            panic!("expected multipart");
        };
        assert!(parts.iter().any(|p| p.name() == "vehicle[photos][0]"));
    }

    #[test]
    fn test_field_names_match_payload_keys() {
        let payload = carlot_forms::submit::encode(&filled()).unwrap();
        for field in ConsignmentField::all() {
            if *field != ConsignmentField::Photos {
                assert!(payload.text(field.name()).is_some(), "{}", field.name());
            }
        }
    }

    #[tokio::test]
    async fn test_attach_photos_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("side.webp");
        std::fs::write(&path, b"webp").unwrap();

        let mut wizard = Wizard::<ConsignmentForm>::new(AuthSession::default()).unwrap();
        attach_photos(&mut wizard, &[&path]).await.unwrap();

        let photos = &wizard.form().vehicle.photos;
        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0].content_type, "image/webp");
    }
}
