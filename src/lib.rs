//! page-collections: curated, ordered collections of pages
//!
//! Editors create `page-collection` records and list the ids of the pages
//! each one holds. The renderer resolves those ids against the content
//! store and emits the collection as configurable HTML list markup.
//!
//! Everything the renderer reads comes through the traits in [`host`];
//! [`PageCollections`] wires them to a site directory on disk.

pub mod admin;
pub mod collection;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod host;

use anyhow::Result;
use std::path::{Path, PathBuf};

use collection::{CollectionRenderer, Membership, RenderOptions};
use content::{loader::ContentLoader, MemoryStore, RecordId};
use helpers::Helpers;

/// A site directory with its configuration and content
#[derive(Clone)]
pub struct PageCollections {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source (content) directory
    pub source_dir: PathBuf,
}

impl PageCollections {
    /// Open a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
        })
    }

    /// Load every content record of the site
    pub fn load_store(&self) -> Result<MemoryStore> {
        ContentLoader::new(&self.source_dir).load()
    }

    /// URL builder and text sanitizer for this site
    pub fn helpers(&self) -> Helpers {
        Helpers::new(self.config.clone())
    }

    /// Saved membership configuration
    pub fn membership(&self) -> Membership {
        Membership::load(&self.config, config::PLUGIN_KEY)
    }

    /// Display options resolved against this site's sanitizer
    pub fn render_options(&self) -> RenderOptions {
        self.config.display.resolve(&self.helpers())
    }

    /// Render the collection shown on `page_id`, or nothing if it has none
    pub fn render(&self, page_id: &RecordId, depth: usize) -> Result<String> {
        let store = self.load_store()?;
        let helpers = self.helpers();
        let renderer = CollectionRenderer::new(&store, &helpers, &helpers);

        Ok(renderer.render(&self.membership(), page_id, &self.render_options(), depth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("_config.yml"),
            r#"
root: /
options:
  page_collections:
    17: "5,3,99"
display:
  list_markup: div
  link_title: true
"#,
        )
        .unwrap();

        let source = dir.path().join("source");
        fs::create_dir_all(&source).unwrap();
        fs::write(
            source.join("featured.md"),
            "---\nid: 17\ntype: page-collection\nstatus: live\ntitle: Featured\n---\n",
        )
        .unwrap();
        fs::write(
            source.join("services.md"),
            "---\nid: 5\nstatus: live\ntitle: Services\n---\nWhat we do.\n",
        )
        .unwrap();
        fs::write(
            source.join("team.md"),
            "---\nid: 3\nstatus: draft\ntitle: Team\n---\nWho we are.\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_render_site_collection() {
        let dir = site();
        let app = PageCollections::new(dir.path()).unwrap();

        let html = app.render(&RecordId::new("17"), 0).unwrap();
        assert_eq!(html.matches("class=\"pc-item ").count(), 1);
        assert!(html.contains("<div class=\"pc-item pc-item-1\">"));
        assert!(html.contains("<a href=\"/services/\">Services</a>"));
        assert!(!html.contains("Team"));
    }

    #[test]
    fn test_render_plain_page() {
        let dir = site();
        let app = PageCollections::new(dir.path()).unwrap();
        assert_eq!(app.render(&RecordId::new("5"), 0).unwrap(), "");
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let app = PageCollections::new(dir.path()).unwrap();
        assert!(app.membership().is_empty());
        assert_eq!(app.render_options(), RenderOptions::default());
        assert_eq!(app.render(&RecordId::new("1"), 0).unwrap(), "");
    }

    #[test]
    fn test_non_numeric_content_length_falls_back() {
        let dir = site();
        fs::write(
            dir.path().join("_config.yml"),
            "options:\n  page_collections:\n    17: \"5\"\ndisplay:\n  show_content: true\n  content_length: true\n",
        )
        .unwrap();

        let app = PageCollections::new(dir.path()).unwrap();
        assert_eq!(app.render_options().content_length, 20);

        let html = app.render(&RecordId::new("17"), 0).unwrap();
        assert!(html.contains("<p class=\"pc-item-content\">What we do.</p>"));
    }
}
