//! Error types for driving forms outside a browser.

use carlot_client::ClientError;
use carlot_forms::FormError;
use thiserror::Error;

/// Errors raised while filling and submitting a form.
#[derive(Debug, Error)]
pub enum WizardError {
    /// The form rejected a value or could not be opened.
    #[error(transparent)]
    Form(#[from] FormError),

    /// The HTTP client could not be built or a file could not be read.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// The input data is not a JSON object of field values.
    #[error("invalid form data: {0}")]
    InvalidData(String),

    /// A step failed validation.
    #[error("step {step}: {field}: {message}")]
    Blocked {
        step: usize,
        field: &'static str,
        message: String,
    },

    /// The form was not submitted and no request was sent.
    #[error("submission rejected: {0}")]
    Rejected(String),

    /// The backend refused the submission.
    #[error("submission failed: {0}")]
    Failed(String),
}

/// Result type alias for wizard driving.
pub type Result<T> = std::result::Result<T, WizardError>;
