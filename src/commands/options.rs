//! Print the admin declarations

use anyhow::Result;

use crate::admin;
use crate::PageCollections;

/// Admin declarations of the given kind as pretty JSON
pub fn to_json(site: &PageCollections, kind: &str) -> Result<String> {
    let json = match kind {
        "site" => {
            let store = site.load_store()?;
            serde_json::to_string_pretty(&admin::site_options(&store, &site.helpers()))?
        }
        "display" => serde_json::to_string_pretty(&admin::html_options())?,
        "types" => serde_json::to_string_pretty(&admin::content_types())?,
        _ => anyhow::bail!("Unknown options: {}. Available: site, display, types", kind),
    };
    Ok(json)
}

/// Run the options command
pub fn run(site: &PageCollections, kind: &str) -> Result<()> {
    println!("{}", to_json(site, kind)?);
    Ok(())
}
