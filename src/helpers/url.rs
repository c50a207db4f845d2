//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;

/// Characters left alone inside a single path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Canonical URL of a record with the given slug
///
/// # Examples
/// ```ignore
/// record_url(&config, "our team") // -> "/blog/our%20team/"
/// ```
pub fn record_url(config: &SiteConfig, slug: &str) -> String {
    let encoded: Vec<String> = slug
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(encode_segment)
        .collect();

    if encoded.is_empty() {
        url_for(config, "")
    } else {
        url_for(config, &format!("{}/", encoded.join("/")))
    }
}

/// URL of a page inside the admin area
pub fn admin_url(config: &SiteConfig, path: &str) -> String {
    let admin = config.admin_path.trim_matches('/');
    let path = path.trim_matches('/');

    if path.is_empty() {
        url_for(config, &format!("{}/", admin))
    } else {
        url_for(config, &format!("{}/{}/", admin, path))
    }
}

/// Encode a single URL path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}
