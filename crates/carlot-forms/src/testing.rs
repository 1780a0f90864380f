//! Small forms and submitters shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use serde::Serialize;
use tokio::sync::Notify;

use crate::error::{FormError, Result};
use crate::fields::{consent_field, email_field, phone_field, text_field};
use crate::model::{FieldName, FormModel};
use crate::step::StepDefinition;
use crate::submit::{
    Attachment, BoxFuture, SubmitError, SubmitRequest, SubmitResponse, Submitter,
};
use crate::value::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleField {
    Name,
    Email,
    Phone,
    Note,
    Agreed,
}

impl FieldName for SampleField {
    fn all() -> &'static [Self] {
        &[
            Self::Name,
            Self::Email,
            Self::Phone,
            Self::Note,
            Self::Agreed,
        ]
    }

    fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Note => "note",
            Self::Agreed => "agreed",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SampleMeta {
    pub source: String,
    pub tags: Vec<String>,
}

impl Default for SampleMeta {
    fn default() -> Self {
        Self {
            source: "web".to_string(),
            tags: vec!["sample".to_string()],
        }
    }
}

/// Three steps: contact, details, confirmation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Sample {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub note: String,
    pub agreed: bool,
    pub meta: SampleMeta,
    #[serde(skip)]
    pub photos: Vec<Attachment>,
}

impl Sample {
    /// A form that passes every step.
    pub fn valid() -> Self {
        Self {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            phone: "0771234567".into(),
            agreed: true,
            ..Self::default()
        }
    }
}

impl FormModel for Sample {
    type Field = SampleField;

    const NAME: &'static str = "sample";
    const ENDPOINT: &'static str = "/api/samples";

    fn value(&self, field: SampleField) -> Value {
        match field {
            SampleField::Name => Value::from(&self.name),
            SampleField::Email => Value::from(&self.email),
            SampleField::Phone => Value::from(&self.phone),
            SampleField::Note => Value::from(&self.note),
            SampleField::Agreed => Value::from(self.agreed),
        }
    }

    fn set(&mut self, field: SampleField, value: Value) -> Result<()> {
        let name = field.name();
        match field {
            SampleField::Name => self.name = value.into_text(name)?,
            SampleField::Email => self.email = value.into_text(name)?,
            SampleField::Phone => self.phone = value.into_text(name)?,
            SampleField::Note => self.note = value.into_text(name)?,
            SampleField::Agreed => self.agreed = value.into_bool(name)?,
        }
        Ok(())
    }

    fn steps() -> Vec<StepDefinition<Self>> {
        vec![
            StepDefinition::new(1, "Contact")
                .field(text_field(SampleField::Name, "Name", None, true))
                .field(email_field(SampleField::Email, "Email")),
            StepDefinition::new(2, "Details")
                .field(phone_field(SampleField::Phone, "Phone"))
                .field(text_field(SampleField::Note, "Note", Some(20), false)),
            StepDefinition::new(3, "Confirm")
                .field(consent_field(SampleField::Agreed, "I agree")),
        ]
    }

    fn attachments(&self) -> Vec<(&'static str, &Attachment)> {
        self.photos.iter().map(|p| ("photos", p)).collect()
    }
}

/// A form that must be opened with a signed-in session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MembersOnly {
    pub note: String,
}

impl FormModel for MembersOnly {
    type Field = SampleField;

    const NAME: &'static str = "members-only";
    const ENDPOINT: &'static str = "/api/members";
    const REQUIRES_AUTH: bool = true;

    fn value(&self, _field: SampleField) -> Value {
        Value::from(&self.note)
    }

    fn set(&mut self, field: SampleField, value: Value) -> Result<()> {
        match field {
            SampleField::Note => self.note = value.into_text(field.name())?,
            other => return Err(FormError::UnknownField(other.name().to_string())),
        }
        Ok(())
    }

    fn steps() -> Vec<StepDefinition<Self>> {
        vec![StepDefinition::new(1, "Note")
            .field(text_field(SampleField::Note, "Note", None, true))]
    }
}

/// Records every request and answers with a fixed result.
pub struct Recorder {
    pub calls: AtomicUsize,
    pub requests: Mutex<Vec<SubmitRequest>>,
    result: std::result::Result<SubmitResponse, SubmitError>,
    hold: Option<Arc<Notify>>,
}

impl Recorder {
    pub fn ok() -> Self {
        Self::answering(Ok(SubmitResponse::new(201)))
    }

    pub fn answering(result: std::result::Result<SubmitResponse, SubmitError>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            result,
            hold: None,
        }
    }

    /// Keeps every request pending until `hold` is notified.
    pub fn holding(hold: Arc<Notify>) -> Self {
        Self {
            hold: Some(hold),
            ..Self::ok()
        }
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<SubmitRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Submitter for Recorder {
    fn submit<'a>(
        &'a self,
        request: SubmitRequest,
    ) -> BoxFuture<'a, std::result::Result<SubmitResponse, SubmitError>> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.requests.lock().unwrap().push(request);
            if let Some(hold) = &self.hold {
                hold.notified().await;
            }
            self.result.clone()
        })
    }
}
