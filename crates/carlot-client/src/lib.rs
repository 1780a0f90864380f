//! # carlot-client
//!
//! Sends finished marketplace forms to the backend.
//!
//! [`HttpSubmitter`] implements [`carlot_forms::Submitter`] on top of
//! `reqwest`: JSON bodies for plain forms, `multipart/form-data` when the form
//! carries photos, and a bearer token when the session has one.
//!
//! ```ignore
//! let submitter = HttpSubmitter::new(ClientConfig::new("https://api.carlot.example"))?;
//! let outcome = wizard.submit(&submitter).await;
//! ```

mod attachment;
mod config;
mod dry_run;
mod error;
mod http;

pub use attachment::{content_type_for, load_attachment};
pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use dry_run::DryRunSubmitter;
pub use error::{ClientError, Result};
pub use http::HttpSubmitter;
