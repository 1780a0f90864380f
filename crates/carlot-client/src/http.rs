//! `reqwest`-backed submitter.

use carlot_forms::submit::{BoxFuture, Part};
use carlot_forms::{Payload, SubmitError, SubmitRequest, SubmitResponse, Submitter};
use reqwest::multipart;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::Result;

/// Posts finished forms to the marketplace backend.
///
/// One call, one request: no retries. Timeouts come from [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpSubmitter {
    /// Builds a submitter for the configured backend.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client, config })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn send(&self, request: SubmitRequest) -> std::result::Result<SubmitResponse, SubmitError> {
        let url = self.config.url_for(request.endpoint);
        let mut builder = self.client.post(&url);

        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.payload {
            Payload::Json(body) => builder.json(&body),
            Payload::Multipart(parts) => builder.multipart(multipart_form(parts)?),
        };

        debug!(form = request.form, %url, "sending request");
        let response = builder.send().await.map_err(|e| {
            warn!(form = request.form, %url, error = %e, "request failed");
            SubmitError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let success = response.status().is_success();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let body = serde_json::from_slice::<serde_json::Value>(&bytes).ok();

        if success {
            info!(form = request.form, status, "backend accepted submission");
            Ok(SubmitResponse { status, body })
        } else {
            warn!(form = request.form, status, "backend rejected submission");
            Err(SubmitError::from_status(status, body.as_ref()))
        }
    }
}

fn multipart_form(parts: Vec<Part>) -> std::result::Result<multipart::Form, SubmitError> {
    let mut form = multipart::Form::new();
    for part in parts {
        form = match part {
            Part::Text { name, value } => form.text(name, value),
            Part::File { name, attachment } => {
                let file = multipart::Part::bytes(attachment.bytes)
                    .file_name(attachment.file_name)
                    .mime_str(&attachment.content_type)
                    .map_err(|e| SubmitError::Transport(e.to_string()))?;
                form.part(name, file)
            }
        };
    }
    Ok(form)
}

impl Submitter for HttpSubmitter {
    fn submit<'a>(
        &'a self,
        request: SubmitRequest,
    ) -> BoxFuture<'a, std::result::Result<SubmitResponse, SubmitError>> {
        Box::pin(self.send(request))
    }
}
