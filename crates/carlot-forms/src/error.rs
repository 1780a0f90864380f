//! Error types for forms.

use thiserror::Error;

use crate::model::FieldName;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// A value could not be stored in the field it was sent to.
    #[error("invalid value for field {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// No field with this name exists on the form.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The form needs an authenticated session and none was provided.
    #[error("form {form} requires an authenticated session")]
    Unauthenticated { form: &'static str },

    /// The form declares no steps.
    #[error("form {form} has no steps")]
    NoSteps { form: &'static str },

    /// The form was already submitted or closed.
    #[error("form is no longer active")]
    Inactive,

    /// The form could not be serialized into a request body.
    #[error("failed to encode form data: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Failing fields mapped to their error message.
///
/// Entries keep the order in which they were added, so the first entry is
/// the first invalid field in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMap<K> {
    entries: Vec<(K, String)>,
}

impl<K> Default for ErrorMap<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: FieldName> ErrorMap<K> {
    /// Creates a new empty ErrorMap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error for a field. The first message for a field wins.
    pub fn insert(&mut self, field: K, message: impl Into<String>) {
        if !self.contains(field) {
            self.entries.push((field, message.into()));
        }
    }

    /// Removes the error for a field, returning whether one was present.
    pub fn remove(&mut self, field: K) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| *k != field);
        self.entries.len() != before
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the field has an error.
    pub fn contains(&self, field: K) -> bool {
        self.entries.iter().any(|(k, _)| *k == field)
    }

    /// Returns the error message for a specific field.
    pub fn get(&self, field: K) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == field)
            .map(|(_, msg)| msg.as_str())
    }

    /// Returns the first invalid field.
    pub fn first(&self) -> Option<K> {
        self.entries.first().map(|(k, _)| *k)
    }

    /// Returns the failing fields in order.
    pub fn fields(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Returns all errors as `(field name, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, msg)| (k.name(), msg.as_str()))
    }
}

impl<K: FieldName> std::fmt::Display for ErrorMap<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in self.iter() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
