//! Display options: the values an admin stores for a collection box, and
//! the concrete markup decisions they resolve to

use serde::{Deserialize, Deserializer, Serialize};

use crate::host::{TextMode, TextSanitizer};

/// Word count used when no usable content length is stored
pub const DEFAULT_CONTENT_LENGTH: usize = 20;

/// Container markup for the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListMarkup {
    #[default]
    Ul,
    Ol,
    Div,
    Article,
}

impl ListMarkup {
    pub const ALL: [ListMarkup; 4] = [
        ListMarkup::Ul,
        ListMarkup::Ol,
        ListMarkup::Div,
        ListMarkup::Article,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "ul" => Some(ListMarkup::Ul),
            "ol" => Some(ListMarkup::Ol),
            "div" => Some(ListMarkup::Div),
            "article" => Some(ListMarkup::Article),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ListMarkup::Ul => "ul",
            ListMarkup::Ol => "ol",
            ListMarkup::Div => "div",
            ListMarkup::Article => "article",
        }
    }

    /// Inner list element, only for ul/ol
    pub fn list_tag(&self) -> Option<&'static str> {
        match self {
            ListMarkup::Ul | ListMarkup::Ol => Some(self.as_str()),
            ListMarkup::Div | ListMarkup::Article => None,
        }
    }

    /// Element wrapping each item
    pub fn item_tag(&self) -> &'static str {
        match self {
            ListMarkup::Ul | ListMarkup::Ol => "li",
            ListMarkup::Div | ListMarkup::Article => self.as_str(),
        }
    }
}

/// Element used for item titles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleTag {
    H1,
    H2,
    H3,
    #[default]
    H4,
    H5,
    H6,
    Span,
}

impl TitleTag {
    pub const ALL: [TitleTag; 7] = [
        TitleTag::H1,
        TitleTag::H2,
        TitleTag::H3,
        TitleTag::H4,
        TitleTag::H5,
        TitleTag::H6,
        TitleTag::Span,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.as_str() == value.trim())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TitleTag::H1 => "h1",
            TitleTag::H2 => "h2",
            TitleTag::H3 => "h3",
            TitleTag::H4 => "h4",
            TitleTag::H5 => "h5",
            TitleTag::H6 => "h6",
            TitleTag::Span => "span",
        }
    }
}

/// Independent inline style toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineStyles {
    /// `text-align:left` on titles
    pub align_titles_left: bool,
    /// Margin above and below the collection wrapper
    pub collection_spacing: bool,
    /// Bottom margin between items
    pub item_spacing: bool,
    /// Read-more link styled as a basic button
    pub read_more_button: bool,
}

impl InlineStyles {
    /// Toggle names with their admin labels, in display order
    pub const NAMES: [(&'static str, &'static str); 4] = [
        ("align_titles_left", "Force left alignment of titles"),
        ("collection_spacing", "Add space above and below collection"),
        ("item_spacing", "Add spacing between items"),
        ("read_more_button", "Style 'Read More' link as 'Basic' button"),
    ];

    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut styles = Self::default();
        for name in names {
            match name.trim() {
                "align_titles_left" => styles.align_titles_left = true,
                "collection_spacing" => styles.collection_spacing = true,
                "item_spacing" => styles.item_spacing = true,
                "read_more_button" => styles.read_more_button = true,
                other => tracing::debug!("Ignoring unknown inline style {:?}", other),
            }
        }
        styles
    }
}

/// Display options as stored by the admin UI
///
/// Every field is optional. Checkbox fields accept either a plain boolean
/// or the `{on: ...}` map shape checkbox groups are saved in, and the
/// style list accepts a list of names or a map keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    #[serde(deserialize_with = "scalar_text")]
    pub list_markup: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub title_tag: Option<String>,
    #[serde(deserialize_with = "names_or_map")]
    pub inline_styles: Vec<String>,
    #[serde(deserialize_with = "checkbox")]
    pub link_title: bool,
    #[serde(deserialize_with = "checkbox")]
    pub show_content: bool,
    #[serde(deserialize_with = "scalar_text")]
    pub content_length: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub read_more: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub class: Option<String>,
    #[serde(deserialize_with = "scalar_text")]
    pub id: Option<String>,
}

/// Concrete markup decisions for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub list_markup: ListMarkup,
    pub title_tag: TitleTag,
    pub styles: InlineStyles,
    pub link_title: bool,
    pub show_content: bool,
    pub content_length: usize,
    /// Sanitized read-more label, empty for none
    pub read_more: String,
    /// Sanitized extra wrapper class, empty for none
    pub class: String,
    /// Sanitized wrapper id, empty for none
    pub id: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_markup: ListMarkup::default(),
            title_tag: TitleTag::default(),
            styles: InlineStyles::default(),
            link_title: false,
            show_content: false,
            content_length: DEFAULT_CONTENT_LENGTH,
            read_more: String::new(),
            class: String::new(),
            id: String::new(),
        }
    }
}

impl RenderOptions {
    /// Whether a read-more link is emitted for each item
    pub fn shows_read_more(&self) -> bool {
        self.show_content && !self.read_more.is_empty()
    }
}

impl DisplayOptions {
    /// Resolve stored values into markup decisions, falling back to the
    /// defaults for anything missing or unrecognized
    pub fn resolve(&self, sanitizer: &dyn TextSanitizer) -> RenderOptions {
        let clean = |value: &Option<String>| {
            value
                .as_deref()
                .map(|v| sanitizer.text(v, TextMode::NoHtml))
                .unwrap_or_default()
        };

        RenderOptions {
            list_markup: self
                .list_markup
                .as_deref()
                .and_then(ListMarkup::parse)
                .unwrap_or_default(),
            title_tag: self
                .title_tag
                .as_deref()
                .and_then(TitleTag::parse)
                .unwrap_or_default(),
            styles: InlineStyles::from_names(self.inline_styles.iter().map(String::as_str)),
            link_title: self.link_title,
            show_content: self.show_content,
            content_length: parse_content_length(self.content_length.as_deref()),
            read_more: clean(&self.read_more),
            class: clean(&self.class),
            id: clean(&self.id),
        }
    }
}

/// Coerce a stored word count
///
/// Blank, zero and non-numeric values read as the default; negative
/// values clamp to zero.
pub fn parse_content_length(value: Option<&str>) -> usize {
    match value.map(str::trim).and_then(|v| v.parse::<i64>().ok()) {
        Some(0) | None => DEFAULT_CONTENT_LENGTH,
        Some(n) if n < 0 => 0,
        Some(n) => usize::try_from(n).unwrap_or(usize::MAX),
    }
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(truthy(&value))
}

fn truthy(value: &serde_yaml::Value) -> bool {
    use serde_yaml::Value;

    match value {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => matches!(s.trim(), "on" | "true" | "1" | "yes"),
        Value::Mapping(map) => map.get("on").map_or(false, truthy),
        Value::Sequence(seq) => seq.iter().any(|v| v.as_str() == Some("on")),
        Value::Null | Value::Tagged(_) => false,
    }
}

/// Handles a list of names, a single name, or a map keyed by name (where
/// presence of a key enables it)
fn names_or_map<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;
    let names = match value {
        Value::Sequence(seq) => seq
            .into_iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Value::Mapping(map) => map
            .into_iter()
            .filter_map(|(k, _)| k.as_str().map(str::to_string))
            .collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    };
    Ok(names)
}

/// Reads a scalar as text; lists, maps, booleans and nulls read as unset
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_yaml::Value;

    let value = Value::deserialize(deserializer)?;
    let text = match value {
        Value::String(s) => Some(s),
        Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => Some(i.to_string()),
            (_, Some(u), _) => Some(u.to_string()),
            (_, _, Some(f)) if f.is_finite() => Some((f.trunc() as i64).to_string()),
            _ => None,
        },
        _ => None,
    };
    Ok(text)
}
