//! # carlot-forms
//!
//! Multi-step form controller with declarative step validation.
//!
//! This crate provides:
//! - Fixed-shape form records with typed field keys ([`FormModel`], [`FieldName`])
//! - Step definitions with per-field validators and cross-field checks
//! - The [`Wizard`] controller: step cursor, error map, submission gate
//! - Request encoding (JSON or multipart) and the [`Submitter`] seam
//! - Bootstrap 5 rendering of the active step
//!
//! ## Quick Start
//!
//! ```rust
//! use carlot_forms::fields::{email_field, text_field};
//! use carlot_forms::{
//!     AuthSession, FieldName, FormModel, Result, StepChange, StepDefinition, Value, Wizard,
//! };
//! use serde::Serialize;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum CallbackField {
//!     Name,
//!     Email,
//! }
//!
//! impl FieldName for CallbackField {
//!     fn all() -> &'static [Self] {
//!         &[Self::Name, Self::Email]
//!     }
//!
//!     fn name(self) -> &'static str {
//!         match self {
//!             Self::Name => "name",
//!             Self::Email => "email",
//!         }
//!     }
//! }
//!
//! #[derive(Debug, Clone, Default, Serialize)]
//! struct Callback {
//!     name: String,
//!     email: String,
//! }
//!
//! impl FormModel for Callback {
//!     type Field = CallbackField;
//!     const NAME: &'static str = "callback";
//!     const ENDPOINT: &'static str = "/api/callbacks";
//!
//!     fn value(&self, field: CallbackField) -> Value {
//!         match field {
//!             CallbackField::Name => Value::from(&self.name),
//!             CallbackField::Email => Value::from(&self.email),
//!         }
//!     }
//!
//!     fn set(&mut self, field: CallbackField, value: Value) -> Result<()> {
//!         match field {
//!             CallbackField::Name => self.name = value.into_text(field.name())?,
//!             CallbackField::Email => self.email = value.into_text(field.name())?,
//!         }
//!         Ok(())
//!     }
//!
//!     fn steps() -> Vec<StepDefinition<Self>> {
//!         vec![
//!             StepDefinition::new(1, "Name")
//!                 .field(text_field(CallbackField::Name, "Name", None, true)),
//!             StepDefinition::new(2, "Email")
//!                 .field(email_field(CallbackField::Email, "Email")),
//!         ]
//!     }
//! }
//!
//! let mut wizard = Wizard::<Callback>::new(AuthSession::Unauthenticated).unwrap();
//! assert_eq!(wizard.next(), StepChange::Blocked(CallbackField::Name));
//!
//! wizard.on_change(CallbackField::Name, "Jane").unwrap();
//! assert!(wizard.errors().is_empty());
//! assert_eq!(wizard.next(), StepChange::Moved(2));
//! ```
//!
//! ## Submitting
//!
//! ```ignore
//! match wizard.submit(&submitter).await {
//!     SubmitOutcome::Submitted => close_modal(),
//!     SubmitOutcome::Failed(message) => show_alert(&message),
//!     SubmitOutcome::Rejected(SubmitRejection::Invalid { first }) => {
//!         scroll_to(wizard.step_of(first), first)
//!     }
//!     _ => {}
//! }
//! ```

mod error;
pub mod fields;
mod model;
pub mod render;
mod session;
mod step;
pub mod submit;
pub mod validation;
mod value;
pub mod widgets;
mod wizard;

#[cfg(test)]
mod testing;

pub use error::{ErrorMap, FormError, Result};
pub use model::{FieldName, FormModel};
pub use render::{render_bootstrap_field, render_step};
pub use session::{AuthSession, SessionToken};
pub use step::{validate_all, validate_step, CrossFieldCheck, FieldDef, StepDefinition};
pub use submit::{
    Attachment, Payload, SubmitError, SubmitRequest, SubmitResponse, Submitter,
};
pub use value::Value;
pub use wizard::{
    Status, StepChange, SubmitOutcome, SubmitRejection, SubmitTicket, TicketId, Wizard,
};
