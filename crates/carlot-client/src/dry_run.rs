//! Submitter that logs instead of sending.

use carlot_forms::submit::BoxFuture;
use carlot_forms::{Payload, SubmitError, SubmitRequest, SubmitResponse, Submitter};
use tracing::info;

/// Accepts every request without contacting the backend.
///
/// Used by `carlot submit --dry-run` to check a form end to end.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunSubmitter;

impl Submitter for DryRunSubmitter {
    fn submit<'a>(
        &'a self,
        request: SubmitRequest,
    ) -> BoxFuture<'a, Result<SubmitResponse, SubmitError>> {
        Box::pin(async move {
            match &request.payload {
                Payload::Json(body) => {
                    info!(form = request.form, endpoint = request.endpoint, %body, "dry run");
                }
                Payload::Multipart(parts) => {
                    info!(
                        form = request.form,
                        endpoint = request.endpoint,
                        parts = parts.len(),
                        "dry run (multipart)"
                    );
                }
            }
            Ok(SubmitResponse::new(200))
        })
    }
}
