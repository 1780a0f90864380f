//! Bootstrap 5 inputs.

use super::{html_escape, Widget, WidgetAttrs};

/// Opening tag carrying the Bootstrap class, id, name and `pairs`.
///
/// A pair without a value renders as a bare boolean attribute.
fn open_tag(
    tag: &str,
    base_class: &str,
    id: &str,
    name: &str,
    pairs: &[(&str, Option<&str>)],
    attrs: &WidgetAttrs,
) -> String {
    let class = attrs
        .get("class")
        .map_or_else(|| base_class.to_string(), |c| format!("{base_class} {c}"));

    let mut html = format!(
        r#"<{tag} class="{class}" id="{}" name="{}""#,
        html_escape(id),
        html_escape(name)
    );
    for (key, value) in pairs {
        match value {
            Some(v) => html.push_str(&format!(r#" {key}="{}""#, html_escape(v))),
            None => {
                html.push(' ');
                html.push_str(key);
            }
        }
    }
    html.push_str(&attrs.extra_html());
    html.push('>');
    html
}

fn input_id(name: &str, attrs: &WidgetAttrs) -> String {
    attrs
        .get("id")
        .cloned()
        .unwrap_or_else(|| format!("id_{name}"))
}

fn check_label(id: &str, text: &str) -> String {
    format!(
        r#"<label class="form-check-label" for="{}">{}</label>"#,
        html_escape(id),
        html_escape(text)
    )
}

/// Single-line input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Tel,
    Number,
    /// Never renders its value.
    File,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::File => "file",
        }
    }
}

/// `<input class="form-control">`.
#[derive(Debug, Clone, Default)]
pub struct BootstrapTextInput {
    pub kind: InputKind,
    pub placeholder: Option<String>,
}

impl BootstrapTextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of_kind(kind: InputKind) -> Self {
        Self {
            kind,
            placeholder: None,
        }
    }

    pub fn email() -> Self {
        Self::of_kind(InputKind::Email)
    }

    pub fn tel() -> Self {
        Self::of_kind(InputKind::Tel)
    }

    pub fn number() -> Self {
        Self::of_kind(InputKind::Number)
    }

    pub fn file() -> Self {
        Self::of_kind(InputKind::File)
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

impl Widget for BootstrapTextInput {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut pairs = vec![("type", Some(self.kind.as_str()))];
        if self.kind != InputKind::File {
            if let Some(v) = value {
                pairs.push(("value", Some(v)));
            }
        }
        if let Some(p) = &self.placeholder {
            pairs.push(("placeholder", Some(p.as_str())));
        }

        open_tag("input", "form-control", &input_id(name, attrs), name, &pairs, attrs)
    }

    fn input_type(&self) -> &str {
        self.kind.as_str()
    }
}

/// `<textarea class="form-control">`.
#[derive(Debug, Clone)]
pub struct BootstrapTextarea {
    pub rows: usize,
}

impl BootstrapTextarea {
    pub fn new(rows: usize) -> Self {
        Self { rows }
    }
}

impl Widget for BootstrapTextarea {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let rows = self.rows.to_string();
        let open = open_tag(
            "textarea",
            "form-control",
            &input_id(name, attrs),
            name,
            &[("rows", Some(rows.as_str()))],
            attrs,
        );
        format!("{open}{}</textarea>", html_escape(value.unwrap_or_default()))
    }

    fn input_type(&self) -> &str {
        "textarea"
    }
}

/// `<select class="form-select">` with an optional leading blank option.
#[derive(Debug, Clone)]
pub struct BootstrapSelect {
    /// `(value, label)` pairs in display order.
    pub choices: Vec<(String, String)>,
    pub blank: Option<String>,
}

impl BootstrapSelect {
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(value, label)| (value.into(), label.into()))
                .collect(),
            blank: Some("---------".to_string()),
        }
    }

    /// Replaces the blank option's label.
    #[must_use]
    pub fn blank_label(mut self, label: impl Into<String>) -> Self {
        self.blank = Some(label.into());
        self
    }
}

impl Widget for BootstrapSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let mut html = open_tag("select", "form-select", &input_id(name, attrs), name, &[], attrs);

        if let Some(blank) = &self.blank {
            html.push_str(&format!(r#"<option value="">{}</option>"#, html_escape(blank)));
        }
        for (choice, label) in &self.choices {
            let selected = if value == Some(choice.as_str()) { " selected" } else { "" };
            html.push_str(&format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                html_escape(choice),
                html_escape(label)
            ));
        }

        html.push_str("</select>");
        html
    }

    fn input_type(&self) -> &str {
        "select"
    }
}

/// A single `form-check` checkbox whose checked value is `true`.
#[derive(Debug, Clone, Default)]
pub struct BootstrapCheckbox {
    pub label: Option<String>,
}

impl BootstrapCheckbox {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl Widget for BootstrapCheckbox {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let id = input_id(name, attrs);
        let mut pairs = vec![("type", Some("checkbox")), ("value", Some("true"))];
        if matches!(value, Some("true" | "on" | "1")) {
            pairs.push(("checked", None));
        }

        let input = open_tag("input", "form-check-input", &id, name, &pairs, attrs);
        let label = self
            .label
            .as_deref()
            .map(|text| check_label(&id, text))
            .unwrap_or_default();
        format!(r#"<div class="form-check">{input}{label}</div>"#)
    }

    fn input_type(&self) -> &str {
        "checkbox"
    }
}

/// One `form-check` radio per choice.
#[derive(Debug, Clone)]
pub struct BootstrapRadioSelect {
    /// `(value, label)` pairs in display order.
    pub choices: Vec<(String, String)>,
}

impl BootstrapRadioSelect {
    pub fn new(choices: Vec<(impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            choices: choices
                .into_iter()
                .map(|(value, label)| (value.into(), label.into()))
                .collect(),
        }
    }
}

impl Widget for BootstrapRadioSelect {
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String {
        let base_id = input_id(name, attrs);
        // Only the first radio takes focus; all of them show validity.
        let rest = attrs
            .get("class")
            .map_or_else(WidgetAttrs::new, |c| WidgetAttrs::new().with("class", c.as_str()));

        self.choices
            .iter()
            .enumerate()
            .map(|(i, (choice, label))| {
                let id = format!("{base_id}_{i}");
                let mut pairs = vec![("type", Some("radio")), ("value", Some(choice.as_str()))];
                if value == Some(choice.as_str()) {
                    pairs.push(("checked", None));
                }
                let own = if i == 0 { attrs } else { &rest };
                let input = open_tag("input", "form-check-input", &id, name, &pairs, own);
                format!(
                    r#"<div class="form-check">{input}{}</div>"#,
                    check_label(&id, label)
                )
            })
            .collect()
    }

    fn input_type(&self) -> &str {
        "radio"
    }
}
