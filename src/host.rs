//! Read-only collaborators supplied by the hosting site
//!
//! The renderer never reaches for ambient state. Everything it reads (the
//! content store, the site options, URL building, text sanitizing) comes
//! through these traits, so a render is a pure function of its inputs.

use crate::content::{ContentFilter, ContentRecord, RecordId};

/// Read access to content records
pub trait ContentStore {
    /// Look up a single record by id
    fn get_by_id(&self, id: &RecordId) -> Option<ContentRecord>;

    /// All records matching the filter, in store order
    fn get_where(&self, filter: &ContentFilter) -> Vec<ContentRecord>;
}

/// Read access to the site-wide option blob, keyed by plugin name
pub trait OptionStore {
    fn option(&self, key: &str) -> Option<serde_yaml::Value>;
}

/// Builds canonical URLs for records
pub trait UrlBuilder {
    /// Public URL of the record with this slug
    fn url(&self, slug: &str) -> String;

    /// URL of a page inside the admin area
    fn admin_url(&self, path: &str) -> String;
}

/// Sanitizing modes for admin-entered text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Strip all markup
    NoHtml,
    /// Pass through untouched
    Plain,
}

/// Cleans freeform text before it is embedded in output
pub trait TextSanitizer {
    fn text(&self, input: &str, mode: TextMode) -> String;
}
