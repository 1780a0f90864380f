//! Rules applied to a single field value.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::Value;

/// `local@domain.tld`: no whitespace, a single `@`, a dot after the `@`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A rule on one field value.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &Value) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

fn text_of(value: &Value) -> String {
    value.as_text().map_or_else(|| value.to_form_string(), str::to_string)
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "This field is required.".to_string(),
        }
    }

    /// Creates a new RequiredValidator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Text(s) if s.trim().is_empty() => Err(self.message.clone()),
            _ => Ok(()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator with default message.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Creates a new MaxLengthValidator with a custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        if text_of(value).chars().count() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length in characters.
///
/// Counts raw characters, so `"077 123 45"` has ten.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator with default message.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new MinLengthValidator with a custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        if text_of(value).chars().count() < self.min_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid email address.".to_string(),
        }
    }

    /// Creates a new EmailValidator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        if EMAIL_RE.is_match(&text_of(value)) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for optional numeric input. Empty input is valid.
#[derive(Debug, Clone)]
pub struct NumberValidator {
    message: String,
}

impl NumberValidator {
    /// Creates a new NumberValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Enter a valid number.".to_string(),
        }
    }

    /// Creates a new NumberValidator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for NumberValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for NumberValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        match value {
            Value::Number(n) if n.is_finite() => Ok(()),
            Value::Text(s) if s.trim().is_empty() => Ok(()),
            Value::Text(s) if s.trim().parse::<f64>().is_ok_and(f64::is_finite) => Ok(()),
            _ => Err(self.message.clone()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for numeric range. Empty input is left to [`RequiredValidator`].
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl RangeValidator {
    /// Creates a new RangeValidator with default message.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("Value must be between {min} and {max}."),
            (Some(min), None) => format!("Value must be at least {min}."),
            (None, Some(max)) => format!("Value must be at most {max}."),
            (None, None) => "Invalid value.".to_string(),
        };
        Self { min, max, message }
    }

    /// Creates a new RangeValidator with a custom message.
    pub fn with_message(min: Option<f64>, max: Option<f64>, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }
}

impl Validator for RangeValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        let num: f64 = match value {
            Value::Number(n) => *n,
            Value::Text(s) if s.trim().is_empty() => return Ok(()),
            Value::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| "Enter a valid number.".to_string())?,
            Value::Bool(_) => return Err("Enter a valid number.".to_string()),
        };

        if let Some(min) = self.min {
            if num < min {
                return Err(self.message.clone());
            }
        }

        if let Some(max) = self.max {
            if num > max {
                return Err(self.message.clone());
            }
        }

        Ok(())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that only accepts one of a fixed set of values.
///
/// Empty input is left to [`RequiredValidator`].
#[derive(Debug, Clone)]
pub struct ChoiceValidator {
    choices: Vec<String>,
    message: String,
}

impl ChoiceValidator {
    /// Creates a new ChoiceValidator with default message.
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_message(choices, "Select a valid choice.")
    }

    /// Creates a new ChoiceValidator with a custom message.
    pub fn with_message<I, S>(choices: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
            message: message.into(),
        }
    }
}

impl Validator for ChoiceValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        let text = text_of(value);
        if text.trim().is_empty() || self.choices.iter().any(|c| *c == text) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for a consent checkbox that must be ticked.
#[derive(Debug, Clone)]
pub struct AcceptedValidator {
    message: String,
}

impl AcceptedValidator {
    /// Creates a new AcceptedValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "You must accept to continue.".to_string(),
        }
    }

    /// Creates a new AcceptedValidator with a custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for AcceptedValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for AcceptedValidator {
    fn validate(&self, value: &Value) -> Result<(), String> {
        if value.as_bool() == Some(true) {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate(&"hello".into()).is_ok());
        assert!(v.validate(&"".into()).is_err());
        assert!(v.validate(&"   ".into()).is_err());
        assert!(v.validate(&"\t\n".into()).is_err());
    }

    #[test]
    fn test_max_length_validator() {
        let v = MaxLengthValidator::new(5);
        assert!(v.validate(&"hello".into()).is_ok());
        assert!(v.validate(&"hi".into()).is_ok());
        assert!(v.validate(&"hello world".into()).is_err());
    }

    #[test]
    fn test_min_length_counts_characters() {
        let v = MinLengthValidator::new(10);
        assert!(v.validate(&"12345".into()).is_err());
        assert!(v.validate(&"0771234567".into()).is_ok());
        assert!(v.validate(&"077 123 45".into()).is_ok());
        // ten characters, more than ten bytes
        assert!(v.validate(&"éééééééééé".into()).is_ok());
        assert!(v.validate(&"".into()).is_err());
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate(&"user@example.com".into()).is_ok());
        assert!(v.validate(&"user.name@domain.co.uk".into()).is_ok());
        assert!(v.validate(&"abc".into()).is_err());
        assert!(v.validate(&"a@b".into()).is_err());
        assert!(v.validate(&"a@b@c.com".into()).is_err());
        assert!(v.validate(&"jane doe@example.com".into()).is_err());
        assert!(v.validate(&"@example.com".into()).is_err());
        assert!(v.validate(&"".into()).is_err());
    }

    #[test]
    fn test_number_validator() {
        let v = NumberValidator::new();
        assert!(v.validate(&"".into()).is_ok());
        assert!(v.validate(&"42000".into()).is_ok());
        assert!(v.validate(&" 12.5 ".into()).is_ok());
        assert!(v.validate(&Value::Number(3.0)).is_ok());
        assert!(v.validate(&"a lot".into()).is_err());
        assert!(v.validate(&"NaN".into()).is_err());
    }

    #[test]
    fn test_range_validator() {
        let v = RangeValidator::new(Some(0.0), Some(100.0));
        assert!(v.validate(&"50".into()).is_ok());
        assert!(v.validate(&"0".into()).is_ok());
        assert!(v.validate(&"100".into()).is_ok());
        assert!(v.validate(&"".into()).is_ok());
        assert!(v.validate(&"-1".into()).is_err());
        assert!(v.validate(&"101".into()).is_err());
        assert_eq!(
            v.validate(&"abc".into()),
            Err("Enter a valid number.".to_string())
        );
    }

    #[test]
    fn test_choice_validator() {
        let v = ChoiceValidator::new(["good", "fair"]);
        assert!(v.validate(&"good".into()).is_ok());
        assert!(v.validate(&"".into()).is_ok());
        assert_eq!(
            v.validate(&"mint".into()),
            Err("Select a valid choice.".to_string())
        );
        assert!(v.validate(&"Good".into()).is_err());
        assert!(v.validate(&Value::Bool(true)).is_err());
    }

    #[test]
    fn test_accepted_validator() {
        let v = AcceptedValidator::new();
        assert!(v.validate(&Value::Bool(true)).is_ok());
        assert!(v.validate(&Value::Bool(false)).is_err());
        assert!(v.validate(&"true".into()).is_err());
    }
}
