//! Content records and the filters used to query them

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque identifier of a content record
///
/// Numeric identifiers are normalized to their decimal string so that
/// `5` written in front-matter and `"05"` typed by an editor compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let value = value.trim();

        if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = value.parse::<u64>() {
                return Self(n.to_string());
            }
        }
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it is one
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct StringOrNumber;

        impl<'de> Visitor<'de> for StringOrNumber {
            type Value = RecordId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or an integer id")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RecordId::new(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RecordId::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(RecordId(value.to_string()))
            }
        }

        deserializer.deserialize_any(StringOrNumber)
    }
}

/// Type of a content record (`pm_content.type` in the host)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Page,
    PageCollection,
    Other(String),
}

impl ContentKind {
    pub fn as_str(&self) -> &str {
        match self {
            ContentKind::Page => "page",
            ContentKind::PageCollection => "page-collection",
            ContentKind::Other(name) => name,
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "page" => ContentKind::Page,
            "page-collection" => ContentKind::PageCollection,
            other => ContentKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ContentKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ContentKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(ContentKind::parse(&raw))
    }
}

/// Publication status of a content record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentStatus {
    #[default]
    Draft,
    Live,
}

impl ContentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Live => "live",
        }
    }
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record owned by the content store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Stable unique id
    pub id: RecordId,

    /// Record type
    #[serde(rename = "type")]
    pub kind: ContentKind,

    /// Publication status
    pub status: ContentStatus,

    /// Display title
    pub title: String,

    /// URL path segment
    pub slug: String,

    /// Plain-text body
    pub content: String,
}

impl ContentRecord {
    /// Create a record with an empty body and a slug derived from the title
    pub fn new(id: impl Into<RecordId>, kind: ContentKind, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            kind,
            status: ContentStatus::Draft,
            slug: slug::slugify(&title),
            title,
            content: String::new(),
        }
    }

    pub fn with_status(mut self, status: ContentStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Whether the record is a live page
    pub fn is_live_page(&self) -> bool {
        self.kind == ContentKind::Page && self.status == ContentStatus::Live
    }
}

/// Equality filter for `get_where` queries; `None` matches anything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentFilter {
    pub kind: Option<ContentKind>,
    pub status: Option<ContentStatus>,
}

impl ContentFilter {
    /// Live records of the given type
    pub fn live(kind: ContentKind) -> Self {
        Self {
            kind: Some(kind),
            status: Some(ContentStatus::Live),
        }
    }

    pub fn matches(&self, record: &ContentRecord) -> bool {
        self.kind.as_ref().map_or(true, |k| *k == record.kind)
            && self.status.map_or(true, |s| s == record.status)
    }
}
