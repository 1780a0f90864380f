//! Request encoding and the submission seam to the backend.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value as Json;
use thiserror::Error;

use crate::error::Result;
use crate::model::FormModel;

/// A boxed future for async submissions.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Message shown when the backend gives no reason for a failure.
pub const GENERIC_SUBMIT_ERROR: &str = "We couldn't send your request. Please try again.";

/// A file sent with the form, e.g. a vehicle photo.
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub content_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Attachment {
    /// Creates a new attachment.
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

/// One part of a `multipart/form-data` body.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// A plain form field.
    Text { name: String, value: String },
    /// An uploaded file.
    File { name: String, attachment: Attachment },
}

impl Part {
    /// Returns the part name.
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Body of a submission request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// `application/json` body.
    Json(Json),
    /// `multipart/form-data` body with nested keys flattened.
    Multipart(Vec<Part>),
}

impl Payload {
    /// Returns the content type of the body.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Multipart(_) => "multipart/form-data",
        }
    }

    /// Returns the value of a text part or top-level JSON field.
    ///
    /// Multipart keys use the flattened `parent[child]` form.
    pub fn text(&self, key: &str) -> Option<String> {
        match self {
            Self::Json(json) => json.get(key).map(|v| match v {
                Json::String(s) => s.clone(),
                other => other.to_string(),
            }),
            Self::Multipart(parts) => parts.iter().find_map(|part| match part {
                Part::Text { name, value } if name == key => Some(value.clone()),
                _ => None,
            }),
        }
    }
}

/// Serializes a form into a request body.
///
/// Forms without attachments are sent as JSON. With attachments the form is
/// flattened into multipart text parts (`parent[child]`, `list[0]`) followed
/// by one file part per attachment, named `field[i]`.
pub fn encode<F: FormModel>(form: &F) -> Result<Payload> {
    let data = serde_json::to_value(form)?;
    let files = form.attachments();

    if files.is_empty() {
        return Ok(Payload::Json(data));
    }

    let mut parts = Vec::new();
    flatten(None, &data, &mut parts);

    let mut counters: HashMap<&str, usize> = HashMap::new();
    for (field, attachment) in files {
        let index = counters.entry(field).or_default();
        parts.push(Part::File {
            name: format!("{field}[{index}]"),
            attachment: attachment.clone(),
        });
        *index += 1;
    }

    Ok(Payload::Multipart(parts))
}

fn flatten(prefix: Option<&str>, value: &Json, parts: &mut Vec<Part>) {
    match value {
        Json::Object(map) => {
            for (key, child) in map {
                let name = prefix.map_or_else(|| key.clone(), |p| format!("{p}[{key}]"));
                flatten(Some(&name), child, parts);
            }
        }
        Json::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                let name = prefix.map_or_else(|| i.to_string(), |p| format!("{p}[{i}]"));
                flatten(Some(&name), child, parts);
            }
        }
        Json::Null => {}
        scalar => {
            if let Some(name) = prefix {
                let value = match scalar {
                    Json::String(s) => s.clone(),
                    other => other.to_string(),
                };
                parts.push(Part::Text {
                    name: name.to_string(),
                    value,
                });
            }
        }
    }
}

/// A fully encoded submission, ready for the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    /// Form name, for logging.
    pub form: &'static str,
    /// Backend path, e.g. `/api/trade-ins`.
    pub endpoint: &'static str,
    /// Request body.
    pub payload: Payload,
    /// Bearer token to forward, when the session is authenticated.
    pub bearer: Option<String>,
}

/// A successful (2xx) backend answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded JSON body, if any.
    pub body: Option<Json>,
}

impl SubmitResponse {
    /// Creates a response without a body.
    pub fn new(status: u16) -> Self {
        Self { status, body: None }
    }
}

/// A failed submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never produced a response (connection, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },
}

impl SubmitError {
    /// Builds a status error, taking the message from a `message` or `error`
    /// string field of the JSON body when present.
    pub fn from_status(status: u16, body: Option<&Json>) -> Self {
        let message = body.and_then(|b| {
            ["message", "error"]
                .iter()
                .find_map(|key| b.get(*key).and_then(Json::as_str))
                .map(str::to_string)
        });
        Self::Status { status, message }
    }

    /// Text shown to the user above the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_SUBMIT_ERROR.to_string(),
        }
    }
}

/// The backend collaborator that receives finished forms.
pub trait Submitter: Send + Sync {
    /// Sends one request. Implementations must not retry.
    fn submit<'a>(
        &'a self,
        request: SubmitRequest,
    ) -> BoxFuture<'a, std::result::Result<SubmitResponse, SubmitError>>;
}
