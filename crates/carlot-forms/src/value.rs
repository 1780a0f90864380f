//! Field values exchanged between inputs and form records.

use serde::Serialize;

use crate::error::{FormError, Result};

/// A single input value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Free text, as typed.
    Text(String),
    /// A number, e.g. a count of attached files.
    Number(f64),
    /// A checkbox state.
    Bool(bool),
}

impl Value {
    /// Returns the text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the checkbox state, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Converts into text for a text input.
    ///
    /// Numbers are accepted and printed, booleans are rejected.
    pub fn into_text(self, field: &str) -> Result<String> {
        match self {
            Self::Text(s) => Ok(s),
            Self::Number(n) => Ok(n.to_string()),
            Self::Bool(_) => Err(FormError::InvalidValue {
                field: field.to_string(),
                message: "expected text, got a checkbox value".to_string(),
            }),
        }
    }

    /// Converts into a checkbox state.
    ///
    /// Accepts the strings a browser or JSON file would send for a checkbox.
    pub fn into_bool(self, field: &str) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(b),
            Self::Text(s) => match s.as_str() {
                "true" | "on" | "1" => Ok(true),
                "false" | "off" | "0" | "" => Ok(false),
                _ => Err(FormError::InvalidValue {
                    field: field.to_string(),
                    message: format!("expected a checkbox value, got {s:?}"),
                }),
            },
            Self::Number(_) => Err(FormError::InvalidValue {
                field: field.to_string(),
                message: "expected a checkbox value, got a number".to_string(),
            }),
        }
    }

    /// Renders the value as it would appear in an HTML `value` attribute.
    pub fn to_form_string(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<usize> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: usize) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_text() {
        assert_eq!(Value::from("Toyota").into_text("make").unwrap(), "Toyota");
        assert_eq!(Value::from(42_000_i64).into_text("mileage").unwrap(), "42000");
        assert!(Value::from(true).into_text("make").is_err());
    }

    #[test]
    fn test_into_bool() {
        assert!(Value::from(true).into_bool("consent").unwrap());
        assert!(Value::from("on").into_bool("consent").unwrap());
        assert!(!Value::from("").into_bool("consent").unwrap());
        assert!(Value::from("maybe").into_bool("consent").is_err());
    }

    #[test]
    fn test_to_form_string() {
        assert_eq!(Value::from("x").to_form_string(), "x");
        assert_eq!(Value::from(2.0).to_form_string(), "2");
        assert_eq!(Value::from(false).to_form_string(), "false");
        assert_eq!(Value::from(3_usize).to_form_string(), "3");
    }
}
