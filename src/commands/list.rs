//! List site content

use anyhow::Result;

use crate::admin::{collections_list, pages_list};
use crate::PageCollections;

/// List live content by type
pub fn run(site: &PageCollections, content_type: &str) -> Result<()> {
    let store = site.load_store()?;

    match content_type {
        "page" | "pages" => {
            let pages = pages_list(&store);
            println!("Live pages ({}):", pages.len());
            for label in pages.values() {
                println!("  {}", label);
            }
        }
        "collection" | "collections" => {
            let membership = site.membership();
            let collections = collections_list(&store);
            println!("Live collections ({}):", collections.len());
            for collection in collections {
                let members = membership
                    .members_of(&collection.id)
                    .map(|m| m.to_raw())
                    .unwrap_or_default();
                println!(
                    "  {} - {} [{}]",
                    collection.id, collection.title, members
                );
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: pages, collections",
                content_type
            );
        }
    }

    Ok(())
}
