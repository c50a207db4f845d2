//! Create a new page or page collection

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

use crate::content::{ContentKind, ContentStatus, FrontMatter, RecordId};
use crate::PageCollections;

/// Create a new record file and return its id and path
pub fn create_record(
    site: &PageCollections,
    title: &str,
    kind: ContentKind,
    status: ContentStatus,
) -> Result<(RecordId, PathBuf)> {
    let store = site.load_store()?;
    let id = store.next_id();
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} does not produce a usable slug", title);
    }

    let target_dir = match kind {
        ContentKind::PageCollection => site.source_dir.join("collections"),
        _ => site.source_dir.join("pages"),
    };
    fs::create_dir_all(&target_dir)?;

    let file_path = target_dir.join(format!("{}.md", slug));
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let fm = FrontMatter {
        id: Some(id.clone()),
        kind: Some(kind),
        status: Some(status),
        title: Some(title.to_string()),
        slug: Some(slug),
    };
    fs::write(&file_path, fm.to_yaml_block()?)?;

    tracing::info!("Created record {} at {:?}", id, file_path);
    Ok((id, file_path))
}

/// Run the new command
pub fn run(site: &PageCollections, title: &str, kind: &str, status: &str) -> Result<()> {
    let kind = match ContentKind::parse(kind) {
        ContentKind::Other(other) => {
            anyhow::bail!("Unknown type: {}. Available: page, page-collection", other)
        }
        kind => kind,
    };
    let status = match status {
        "draft" => ContentStatus::Draft,
        "live" => ContentStatus::Live,
        other => anyhow::bail!("Unknown status: {}. Available: draft, live", other),
    };

    let (id, path) = create_record(site, title, kind, status)?;
    println!("Created {} (id {}): {:?}", title, id, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ContentStore;

    #[test]
    fn test_create_records_with_increasing_ids() {
        let dir = tempfile::tempdir().unwrap();
        let site = PageCollections::new(dir.path()).unwrap();

        let (first, _) =
            create_record(&site, "Our Services", ContentKind::Page, ContentStatus::Live).unwrap();
        let (second, path) = create_record(
            &site,
            "Featured",
            ContentKind::PageCollection,
            ContentStatus::Draft,
        )
        .unwrap();

        assert_eq!(first, RecordId::new("1"));
        assert_eq!(second, RecordId::new("2"));
        assert!(path.ends_with("collections/featured.md"));

        let store = site.load_store().unwrap();
        let page = store.get_by_id(&first).unwrap();
        assert_eq!(page.slug, "our-services");
        assert!(page.is_live_page());
        assert_eq!(
            store.get_by_id(&second).unwrap().kind,
            ContentKind::PageCollection
        );
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let site = PageCollections::new(dir.path()).unwrap();

        create_record(&site, "Team", ContentKind::Page, ContentStatus::Draft).unwrap();
        assert!(create_record(&site, "Team", ContentKind::Page, ContentStatus::Draft).is_err());
    }

    #[test]
    fn test_run_rejects_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let site = PageCollections::new(dir.path()).unwrap();
        assert!(run(&site, "Team", "post", "live").is_err());
        assert!(run(&site, "Team", "page", "archived").is_err());
    }
}
