//! Admin option field declarations

use indexmap::IndexMap;
use serde::Serialize;

/// Input type of an option field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Select,
    Checkbox,
    /// Raw HTML shown in place of an input
    Custom,
}

/// Display width of a text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldWidth {
    Small,
    Medium,
    Large,
}

/// One admin-editable field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionField {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<FieldWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// Choices for select and checkbox fields, value → label
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub options: IndexMap<String, String>,
}

impl OptionField {
    fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            label: None,
            tooltip: None,
            placeholder: None,
            width: None,
            description: None,
            html: None,
            options: IndexMap::new(),
        }
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(FieldKind::Text).with_label(label)
    }

    pub fn select<K, V>(label: impl Into<String>, choices: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(FieldKind::Select)
            .with_label(label)
            .with_choices(choices)
    }

    pub fn checkbox<K, V>(
        label: impl Into<String>,
        choices: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(FieldKind::Checkbox)
            .with_label(label)
            .with_choices(choices)
    }

    pub fn custom(html: impl Into<String>) -> Self {
        let mut field = Self::new(FieldKind::Custom);
        field.html = Some(html.into());
        field
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_width(mut self, width: FieldWidth) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn with_choices<K, V>(mut self, choices: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.options = choices
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }
}

/// Ordered set of fields keyed by option name
pub type OptionFields = IndexMap<String, OptionField>;
