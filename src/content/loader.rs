//! Content loader - loads content records from the source directory

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{ContentKind, ContentRecord, ContentStatus, FrontMatter, MemoryStore};

/// Loads content records from the source directory
pub struct ContentLoader {
    source_dir: PathBuf,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new<P: AsRef<Path>>(source_dir: P) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
        }
    }

    /// Load every record under the source directory into a store
    ///
    /// Files are visited in path order so that duplicate ids resolve the
    /// same way on every run.
    pub fn load(&self) -> Result<MemoryStore> {
        let mut store = MemoryStore::new();
        if !self.source_dir.exists() {
            tracing::debug!("Source directory {:?} does not exist", self.source_dir);
            return Ok(store);
        }

        for entry in WalkDir::new(&self.source_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_record_file(path) {
                continue;
            }

            match self.load_record(path) {
                Ok(record) => {
                    let id = record.id.clone();
                    if !store.insert(record) {
                        tracing::warn!("Duplicate record id {} in {:?}, skipping", id, path);
                    }
                }
                Err(e) => {
                    tracing::warn!("Failed to load record {:?}: {}", path, e);
                }
            }
        }

        tracing::debug!("Loaded {} records from {:?}", store.len(), self.source_dir);
        Ok(store)
    }

    /// Load a single record from a file
    fn load_record(&self, path: &Path) -> Result<ContentRecord> {
        let raw = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&raw)?;

        let id = fm.id.ok_or_else(|| anyhow!("missing `id` in front-matter"))?;

        // Fall back to the file name for the title, as page editors often
        // start from an empty file
        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let slug = fm
            .slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slug::slugify(&title));

        Ok(ContentRecord {
            id,
            kind: fm.kind.unwrap_or(ContentKind::Page),
            status: fm.status.unwrap_or(ContentStatus::Draft),
            title,
            slug,
            content: body.trim().to_string(),
        })
    }
}

/// Check if a file holds a content record
fn is_record_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown" || e == "txt")
        .unwrap_or(false)
}
