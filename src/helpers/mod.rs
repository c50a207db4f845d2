//! Helper functions for rendering
//!
//! URL generation and HTML string helpers, plus `Helpers`, which binds
//! them to a site configuration and serves as the URL builder and text
//! sanitizer of the file-backed host.

mod html;
mod url;

pub use html::*;
pub use url::*;

use crate::config::SiteConfig;
use crate::host::{TextMode, TextSanitizer, UrlBuilder};

/// Collection of all helper functions
#[derive(Debug, Clone)]
pub struct Helpers {
    config: SiteConfig,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}

impl UrlBuilder for Helpers {
    fn url(&self, slug: &str) -> String {
        record_url(&self.config, slug)
    }

    fn admin_url(&self, path: &str) -> String {
        admin_url(&self.config, path)
    }
}

impl TextSanitizer for Helpers {
    fn text(&self, input: &str, mode: TextMode) -> String {
        match mode {
            TextMode::NoHtml => no_html(input),
            TextMode::Plain => input.to_string(),
        }
    }
}
