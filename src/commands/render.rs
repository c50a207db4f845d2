//! Render the collection of a page

use anyhow::Result;

use crate::content::RecordId;
use crate::PageCollections;

/// Print the collection markup for `page_id`
pub fn run(site: &PageCollections, page_id: &str, depth: usize) -> Result<()> {
    let page_id = RecordId::new(page_id);
    let html = site.render(&page_id, depth)?;

    if html.is_empty() {
        tracing::info!("Page {} has no collection to render", page_id);
    } else {
        print!("{}", html);
    }

    Ok(())
}
