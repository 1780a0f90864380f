//! Bootstrap 5 rendering of the active wizard step.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::{Div, H5};

use crate::model::{FieldName, FormModel};
use crate::step::FieldDef;
use crate::wizard::Wizard;

/// Renders a form field with Bootstrap 5 styling.
///
/// A focused field gets `autofocus` so the browser scrolls it into view.
pub fn render_bootstrap_field<F: FormModel>(
    def: &FieldDef<F>,
    value: Option<&str>,
    errors: &[String],
    focused: bool,
) -> String {
    let name = def.field.name();
    let id = format!("id_{name}");
    let has_errors = !errors.is_empty();

    let required_marker = if def.required { " *" } else { "" };
    let label_text = format!("{}{}", def.label, required_marker);

    // Prepare widget attrs
    let mut attrs = def.attrs.clone();
    attrs.set("id", &id);

    if has_errors {
        let current_class = attrs.get("class").cloned().unwrap_or_default();
        attrs.set("class", format!("{current_class} is-invalid").trim());
        attrs.set("aria-invalid", "true");
    }

    if focused {
        attrs.set("autofocus", "autofocus");
    }

    let widget_html = def.widget.render(name, value, &attrs);

    let label_el = html! {
        label.for_(#id).class("form-label") { #label_text }
    };

    let help_text = def.help_text.clone();

    html! { div.class("mb-3") }
        .raw(label_el.render())
        .raw(&widget_html)
        .children(errors, |error, div: Element<Div>| {
            div.class("invalid-feedback d-block").text(error)
        })
        .when(help_text.is_some(), |d| {
            d.child::<Div, _>(|h| {
                h.class("form-text")
                    .text(help_text.as_deref().unwrap_or(""))
            })
        })
        .render()
}

/// Renders the wizard's active step as a Bootstrap 5 form.
///
/// The output contains the step heading, the submission error (if any),
/// every field of the step with its value and inline error, and the
/// navigation buttons. The submit button is disabled while a request is in
/// flight or a required checkbox is unticked.
pub fn render_step<F: FormModel>(wizard: &Wizard<F>, action: &str) -> String {
    let step = wizard.step();
    let heading = format!(
        "Step {} of {}: {}",
        step.index,
        wizard.step_count(),
        step.label
    );

    let mut form = html! {
        form.action(#action).method("POST")
    };
    form = form.child::<H5, _>(|h| h.class("mb-3").text(&heading));

    if let Some(message) = wizard.submission_error() {
        form = form.child::<Div, _>(|d| {
            d.class("alert alert-danger")
                .attr("role", "alert")
                .text(message)
        });
    }

    for def in &step.fields {
        let value = wizard.form().value(def.field).to_form_string();
        let field_errors: Vec<String> = wizard
            .errors()
            .get(def.field)
            .map(|msg| vec![msg.to_string()])
            .unwrap_or_default();
        let focused = wizard.focus() == Some(def.field);
        let field_html = render_bootstrap_field(def, Some(&value), &field_errors, focused);
        form = form.child::<Div, _>(|d| d.raw(&field_html));
    }

    let buttons = render_buttons(wizard);
    form = form.child::<Div, _>(|d| d.class("d-flex gap-2").raw(&buttons));

    form.render()
}

fn render_buttons<F: FormModel>(wizard: &Wizard<F>) -> String {
    let mut html = String::new();

    if wizard.current_step() > 1 {
        let back = html! {
            button.type_("submit").class("btn btn-outline-secondary") {
                "Back"
            }
        }
        .attr("name", "action")
        .attr("value", "back");
        html.push_str(&back.render());
    }

    if wizard.is_last_step() {
        let label = if wizard.is_submitting() {
            "Submitting..."
        } else {
            "Submit"
        };
        let submit = html! {
            button.type_("submit").class("btn btn-primary") {
                #label
            }
        }
        .attr("name", "action")
        .attr("value", "submit")
        .when(!wizard.submit_enabled(), |b| b.attr("disabled", "disabled"));
        html.push_str(&submit.render());
    } else {
        let next = html! {
            button.type_("submit").class("btn btn-primary") {
                "Next"
            }
        }
        .attr("name", "action")
        .attr("value", "next");
        html.push_str(&next.render());
    }

    html
}
