//! Form records and their field keys.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::error::Result;
use crate::step::StepDefinition;
use crate::submit::Attachment;
use crate::value::Value;

/// Typed key of a form input.
///
/// Implemented by a plain enum per form, one variant per declared input.
pub trait FieldName: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Every field of the form, in declaration order.
    fn all() -> &'static [Self];

    /// The input name used in HTML and in submitted payloads.
    fn name(self) -> &'static str;

    /// Looks a field up by its input name.
    fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

/// A fixed-shape form record driven by a [`Wizard`](crate::Wizard).
pub trait FormModel: Default + Clone + Serialize + Send + Sync + 'static {
    /// Field keys of this form.
    type Field: FieldName;

    /// Short form name used in logs and errors.
    const NAME: &'static str;

    /// Backend path the aggregated form is posted to.
    const ENDPOINT: &'static str;

    /// Whether the form refuses to open without an authenticated session.
    const REQUIRES_AUTH: bool = false;

    /// Reads the current value of a field.
    fn value(&self, field: Self::Field) -> Value;

    /// Stores a new value in a field.
    fn set(&mut self, field: Self::Field, value: Value) -> Result<()>;

    /// The ordered steps of the form.
    fn steps() -> Vec<StepDefinition<Self>>;

    /// Files sent alongside the form data, each with its input name.
    ///
    /// A non-empty list switches the payload to `multipart/form-data`.
    fn attachments(&self) -> Vec<(&'static str, &Attachment)> {
        Vec::new()
    }
}
