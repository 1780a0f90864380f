//! HTML inputs used by field definitions.

mod bootstrap;

pub use bootstrap::{
    BootstrapCheckbox, BootstrapRadioSelect, BootstrapSelect, BootstrapTextInput, BootstrapTextarea,
    InputKind,
};

use std::collections::BTreeMap;

/// Extra attributes placed on a rendered input.
///
/// `class` is merged with the widget's own class and `id` replaces the
/// generated one; everything else is emitted in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetAttrs {
    attrs: BTreeMap<String, String>,
}

impl WidgetAttrs {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Returns the value of an attribute, if set.
    pub fn get(&self, key: &str) -> Option<&String> {
        self.attrs.get(key)
    }

    /// Builder form of [`WidgetAttrs::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Every attribute except `class` and `id`, each with a leading space.
    fn extra_html(&self) -> String {
        self.attrs
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "class" | "id"))
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect()
    }
}

/// Renders one form input.
pub trait Widget: Send + Sync {
    /// Renders the input named `name` holding `value`.
    fn render(&self, name: &str, value: Option<&str>, attrs: &WidgetAttrs) -> String;

    /// The HTML input type, e.g. `checkbox` or `select`.
    fn input_type(&self) -> &str {
        "text"
    }
}

/// Escapes text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>Tom & Jerry's</b>"), "&lt;b&gt;Tom &amp; Jerry&#x27;s&lt;/b&gt;");
        assert_eq!(html_escape(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_extra_html_skips_class_and_id() {
        let attrs = WidgetAttrs::new()
            .with("class", "is-invalid")
            .with("id", "id_make")
            .with("autofocus", "autofocus")
            .with("accept", "image/*");
        assert_eq!(
            attrs.extra_html(),
            r#" accept="image/*" autofocus="autofocus""#
        );
    }
}
