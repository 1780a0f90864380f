//! The multi-step form controller.

use tracing::{debug, info, warn};

use crate::error::{ErrorMap, FormError, Result};
use crate::model::{FieldName, FormModel};
use crate::session::AuthSession;
use crate::step::{validate_all, validate_step, StepDefinition};
use crate::submit::{encode, SubmitError, SubmitRequest, SubmitResponse, Submitter};
use crate::value::Value;

/// Identifies one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicketId(u64);

/// Lifecycle of a wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The user is filling in steps.
    Editing,
    /// A submission is in flight; further submits are rejected.
    Submitting(TicketId),
    /// The backend accepted the form.
    Submitted,
    /// The form was closed and its data discarded.
    Closed,
}

/// A submission handed out by [`Wizard::begin_submit`].
#[derive(Debug)]
pub struct SubmitTicket {
    /// Pass back to [`Wizard::finish_submit`] with the result.
    pub id: TicketId,
    /// The request to send.
    pub request: SubmitRequest,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChange<K> {
    /// The cursor moved to this step.
    Moved(usize),
    /// Validation failed; the field should be brought into view.
    Blocked(K),
    /// Nothing to do (first/last step, or the form is inactive).
    Unchanged,
}

/// Why a submit request did not produce a ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRejection<K> {
    /// Submit is only available on the last step.
    NotAtLastStep,
    /// Some step failed validation; `first` is the field to focus.
    Invalid { first: K },
    /// A previous submission has not finished yet.
    InFlight,
    /// The form was already submitted or closed.
    Inactive,
    /// The form could not be encoded.
    Encode(String),
}

/// Final result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<K> {
    /// The backend accepted the form.
    Submitted,
    /// The request failed; the message is shown and the data kept.
    Failed(String),
    /// No request was sent.
    Rejected(SubmitRejection<K>),
    /// The result arrived after the form was closed or reset.
    Discarded,
}

/// Drives a user through the steps of a form.
///
/// Navigation and edits are synchronous. Submission is split in two so the
/// form stays usable while the request is in flight: [`begin_submit`]
/// validates and hands out a ticket, [`finish_submit`] applies the backend's
/// answer if the ticket is still current.
///
/// [`begin_submit`]: Wizard::begin_submit
/// [`finish_submit`]: Wizard::finish_submit
pub struct Wizard<F: FormModel> {
    steps: Vec<StepDefinition<F>>,
    form: F,
    errors: ErrorMap<F::Field>,
    cursor: usize,
    status: Status,
    focus: Option<F::Field>,
    submission_error: Option<String>,
    response: Option<SubmitResponse>,
    session: AuthSession,
    next_ticket: u64,
}

impl<F: FormModel> std::fmt::Debug for Wizard<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wizard")
            .field("form", &F::NAME)
            .field("cursor", &self.cursor)
            .field("steps", &self.steps.len())
            .field("status", &self.status)
            .field("errors", &self.errors)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl<F: FormModel> Wizard<F> {
    /// Opens the form with default values.
    pub fn new(session: AuthSession) -> Result<Self> {
        Self::with_form(session, F::default())
    }

    /// Opens the form with pre-filled values.
    pub fn with_form(session: AuthSession, form: F) -> Result<Self> {
        if F::REQUIRES_AUTH && !session.is_authenticated() {
            return Err(FormError::Unauthenticated { form: F::NAME });
        }

        let steps = F::steps();
        if steps.is_empty() {
            return Err(FormError::NoSteps { form: F::NAME });
        }

        Ok(Self {
            steps,
            form,
            errors: ErrorMap::new(),
            cursor: 1,
            status: Status::Editing,
            focus: None,
            submission_error: None,
            response: None,
            session,
            next_ticket: 1,
        })
    }

    /// Returns the current step number, starting at 1.
    pub fn current_step(&self) -> usize {
        self.cursor
    }

    /// Returns the number of steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the active step definition.
    pub fn step(&self) -> &StepDefinition<F> {
        &self.steps[self.cursor - 1]
    }

    /// Returns all step definitions.
    pub fn steps(&self) -> &[StepDefinition<F>] {
        &self.steps
    }

    /// Returns whether the cursor is on the last step.
    pub fn is_last_step(&self) -> bool {
        self.cursor == self.steps.len()
    }

    /// Returns the step number that owns a field.
    pub fn step_of(&self, field: F::Field) -> Option<usize> {
        self.steps
            .iter()
            .find(|step| step.contains(field))
            .map(|step| step.index)
    }

    /// Returns the form data.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// Returns the current field errors.
    pub fn errors(&self) -> &ErrorMap<F::Field> {
        &self.errors
    }

    /// Returns the field that should be scrolled into view and focused.
    pub fn focus(&self) -> Option<F::Field> {
        self.focus
    }

    /// Returns the lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.status, Status::Submitting(_))
    }

    /// Returns the message of the last failed submission.
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    /// Returns the backend's answer once submitted.
    pub fn response(&self) -> Option<&SubmitResponse> {
        self.response.as_ref()
    }

    /// Returns whether the submit action should be enabled.
    ///
    /// False while a submission is in flight, before the last step, or while
    /// a submit-gating field on the last step is unticked.
    pub fn submit_enabled(&self) -> bool {
        self.status == Status::Editing
            && self.is_last_step()
            && self
                .step()
                .fields
                .iter()
                .filter(|def| def.gates_submit)
                .all(|def| self.form.value(def.field).as_bool() == Some(true))
    }

    fn ensure_open(&self) -> Result<()> {
        match self.status {
            Status::Submitted | Status::Closed => Err(FormError::Inactive),
            Status::Editing | Status::Submitting(_) => Ok(()),
        }
    }

    /// Stores a new value and hides the field's error without re-validating.
    pub fn on_change(&mut self, field: F::Field, value: impl Into<Value>) -> Result<()> {
        self.ensure_open()?;
        self.form.set(field, value.into())?;
        self.clear_error(field);
        Ok(())
    }

    /// Mutates the form directly, e.g. to attach files, then hides the
    /// field's error like [`on_change`](Self::on_change).
    pub fn update(&mut self, field: F::Field, edit: impl FnOnce(&mut F)) -> Result<()> {
        self.ensure_open()?;
        edit(&mut self.form);
        self.clear_error(field);
        Ok(())
    }

    fn clear_error(&mut self, field: F::Field) {
        if self.errors.remove(field) {
            debug!(form = F::NAME, field = field.name(), "cleared field error");
        }
    }

    /// Validates the current step and advances if it is valid.
    pub fn next(&mut self) -> StepChange<F::Field> {
        if self.ensure_open().is_err() || self.is_last_step() {
            return StepChange::Unchanged;
        }

        self.errors = validate_step(self.step(), &self.form);
        if let Some(first) = self.errors.first() {
            self.focus = Some(first);
            debug!(
                form = F::NAME,
                step = self.cursor,
                errors = self.errors.len(),
                focus = first.name(),
                "step blocked"
            );
            return StepChange::Blocked(first);
        }

        self.focus = None;
        self.cursor += 1;
        debug!(form = F::NAME, step = self.cursor, "advanced");
        StepChange::Moved(self.cursor)
    }

    /// Goes back one step. Never validates and leaves errors untouched.
    pub fn back(&mut self) -> StepChange<F::Field> {
        if self.ensure_open().is_err() || self.cursor == 1 {
            return StepChange::Unchanged;
        }

        self.cursor -= 1;
        debug!(form = F::NAME, step = self.cursor, "went back");
        StepChange::Moved(self.cursor)
    }

    /// Re-validates every step and, if all pass, hands out a request to send.
    ///
    /// While the returned ticket is outstanding, further calls are rejected
    /// with [`SubmitRejection::InFlight`].
    pub fn begin_submit(&mut self) -> std::result::Result<SubmitTicket, SubmitRejection<F::Field>> {
        match self.status {
            Status::Submitted | Status::Closed => return Err(SubmitRejection::Inactive),
            Status::Submitting(_) => {
                debug!(form = F::NAME, "submit ignored, request in flight");
                return Err(SubmitRejection::InFlight);
            }
            Status::Editing => {}
        }

        if !self.is_last_step() {
            return Err(SubmitRejection::NotAtLastStep);
        }

        self.errors = validate_all(&self.steps, &self.form);
        if let Some(first) = self.errors.first() {
            self.focus = Some(first);
            debug!(
                form = F::NAME,
                errors = self.errors.len(),
                focus = first.name(),
                "submit blocked by validation"
            );
            return Err(SubmitRejection::Invalid { first });
        }
        self.focus = None;

        let payload = match encode(&self.form) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(form = F::NAME, error = %err, "could not encode form");
                let message = err.to_string();
                self.submission_error = Some(message.clone());
                return Err(SubmitRejection::Encode(message));
            }
        };

        let id = TicketId(self.next_ticket);
        self.next_ticket += 1;
        self.status = Status::Submitting(id);
        self.submission_error = None;

        info!(
            form = F::NAME,
            endpoint = F::ENDPOINT,
            ticket = id.0,
            content_type = payload.content_type(),
            "submitting form"
        );

        Ok(SubmitTicket {
            id,
            request: SubmitRequest {
                form: F::NAME,
                endpoint: F::ENDPOINT,
                payload,
                bearer: self.session.bearer_token().map(str::to_string),
            },
        })
    }

    /// Applies the backend's answer to a ticket from [`begin_submit`](Self::begin_submit).
    ///
    /// Answers for tickets that are no longer current (the form was closed
    /// or reset meanwhile) are discarded.
    pub fn finish_submit(
        &mut self,
        id: TicketId,
        result: std::result::Result<SubmitResponse, SubmitError>,
    ) -> SubmitOutcome<F::Field> {
        if self.status != Status::Submitting(id) {
            debug!(form = F::NAME, ticket = id.0, "discarding stale submission result");
            return SubmitOutcome::Discarded;
        }

        match result {
            Ok(response) => {
                info!(form = F::NAME, status = response.status, "form submitted");
                self.status = Status::Submitted;
                self.response = Some(response);
                SubmitOutcome::Submitted
            }
            Err(err) => {
                warn!(form = F::NAME, error = %err, "submission failed");
                let message = err.user_message();
                self.status = Status::Editing;
                self.submission_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Validates, sends exactly one request and applies the answer.
    pub async fn submit<S>(&mut self, submitter: &S) -> SubmitOutcome<F::Field>
    where
        S: Submitter + ?Sized,
    {
        let ticket = match self.begin_submit() {
            Ok(ticket) => ticket,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        let result = submitter.submit(ticket.request).await;
        self.finish_submit(ticket.id, result)
    }

    /// Closes the form, discarding all entered data.
    pub fn close(&mut self) {
        info!(form = F::NAME, step = self.cursor, "form closed");
        self.clear_state();
        self.status = Status::Closed;
    }

    /// Reopens the form at step 1 with default values.
    pub fn reset(&mut self) {
        debug!(form = F::NAME, "form reset");
        self.clear_state();
        self.status = Status::Editing;
    }

    fn clear_state(&mut self) {
        self.form = F::default();
        self.errors = ErrorMap::new();
        self.cursor = 1;
        self.focus = None;
        self.submission_error = None;
        self.response = None;
    }
}
