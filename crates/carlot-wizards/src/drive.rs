//! Driving a wizard from a JSON object, one step at a time.

use carlot_forms::{
    FieldName, FormError, FormModel, StepChange, SubmitOutcome, SubmitRejection, SubmitResponse,
    Submitter, Value, Wizard,
};
use serde_json::{Map, Value as Json};
use tracing::{debug, info};

use crate::error::{Result, WizardError};

/// Converts a JSON scalar into a field value.
pub fn value_from_json(field: &str, json: &Json) -> Result<Value> {
    match json {
        Json::String(s) => Ok(Value::from(s.as_str())),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Null => Ok(Value::from("")),
        Json::Number(n) => n.as_f64().map(Value::Number).ok_or_else(|| {
            WizardError::InvalidData(format!("{field}: number out of range"))
        }),
        Json::Array(_) | Json::Object(_) => Err(WizardError::InvalidData(format!(
            "{field}: expected a string, number or boolean"
        ))),
    }
}

/// Parses form data, which must be a JSON object keyed by input name.
pub fn parse_data(text: &str) -> Result<Map<String, Json>> {
    match serde_json::from_str::<Json>(text) {
        Ok(Json::Object(map)) => Ok(map),
        Ok(_) => Err(WizardError::InvalidData(
            "expected a JSON object of field values".to_string(),
        )),
        Err(err) => Err(WizardError::InvalidData(err.to_string())),
    }
}

/// Removes a key holding a list of file paths from the data.
pub fn take_paths(data: &mut Map<String, Json>, key: &str) -> Result<Vec<String>> {
    let Some(json) = data.remove(key) else {
        return Ok(Vec::new());
    };

    let items = match json {
        Json::Array(items) => items,
        single @ Json::String(_) => vec![single],
        _ => {
            return Err(WizardError::InvalidData(format!(
                "{key}: expected a list of file paths"
            )))
        }
    };

    items
        .into_iter()
        .map(|item| match item {
            Json::String(path) => Ok(path),
            _ => Err(WizardError::InvalidData(format!(
                "{key}: expected a list of file paths"
            ))),
        })
        .collect()
}

/// Stores every entry of `data` in the form.
pub fn fill<F: FormModel>(wizard: &mut Wizard<F>, data: &Map<String, Json>) -> Result<()> {
    for (key, json) in data {
        let field =
            F::Field::from_name(key).ok_or_else(|| FormError::UnknownField(key.clone()))?;
        wizard.on_change(field, value_from_json(key, json)?)?;
    }
    debug!(form = F::NAME, fields = data.len(), "filled form");
    Ok(())
}

fn blocked<F: FormModel>(wizard: &Wizard<F>, field: F::Field) -> WizardError {
    WizardError::Blocked {
        step: wizard.step_of(field).unwrap_or_else(|| wizard.current_step()),
        field: field.name(),
        message: wizard.errors().get(field).unwrap_or_default().to_string(),
    }
}

/// Presses "Next" until the last step, stopping at the first invalid step.
pub fn advance<F: FormModel>(wizard: &mut Wizard<F>) -> Result<()> {
    loop {
        match wizard.next() {
            StepChange::Moved(_) => {}
            StepChange::Blocked(field) => return Err(blocked(wizard, field)),
            StepChange::Unchanged => return Ok(()),
        }
    }
}

/// Advances to the last step and submits the form once.
pub async fn complete<F, S>(wizard: &mut Wizard<F>, submitter: &S) -> Result<SubmitResponse>
where
    F: FormModel,
    S: Submitter + ?Sized,
{
    advance(wizard)?;

    match wizard.submit(submitter).await {
        SubmitOutcome::Submitted => {
            let response = wizard
                .response()
                .cloned()
                .unwrap_or_else(|| SubmitResponse::new(200));
            info!(form = F::NAME, status = response.status, "form accepted");
            Ok(response)
        }
        SubmitOutcome::Failed(message) => Err(WizardError::Failed(message)),
        SubmitOutcome::Rejected(SubmitRejection::Invalid { first }) => {
            Err(blocked(wizard, first))
        }
        SubmitOutcome::Rejected(rejection) => {
            Err(WizardError::Rejected(format!("{rejection:?}")))
        }
        SubmitOutcome::Discarded => Err(WizardError::Rejected(
            "the form was closed before the backend answered".to_string(),
        )),
    }
}
