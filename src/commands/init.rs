//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    if target_dir.join("_config.yml").exists() {
        anyhow::bail!("A site already exists in {:?}", target_dir);
    }

    fs::create_dir_all(target_dir.join("source/pages"))?;
    fs::create_dir_all(target_dir.join("source/collections"))?;

    let config_content = r#"# Page Collections Configuration

# Site
title: My Site

# URL
url: http://example.com
root: /
admin_path: admin

# Directory
source_dir: source

# Site options, keyed by plugin
options:
  page_collections:
    # collection id: comma-separated page ids, in display order
    "3": "1,2"

# Collection display
display:
  list_markup: ul
  title_tag: h4
  inline_styles: [item_spacing]
  link_title: true
  show_content: true
  content_length: 20
  read_more: Read more
  class: ''
  id: ''
"#;

    fs::write(target_dir.join("_config.yml"), config_content)?;

    let samples = [
        (
            "source/pages/services.md",
            r#"---
id: 1
type: page
status: live
title: Services
slug: services
---

We design, build and look after websites for small teams that would rather spend their time on their work than on their tools.
"#,
        ),
        (
            "source/pages/about.md",
            r#"---
id: 2
type: page
status: live
title: About
slug: about
---

A small studio with a long memory.
"#,
        ),
        (
            "source/collections/featured.md",
            r#"---
id: 3
type: page-collection
status: live
title: Featured
slug: featured
---
"#,
        ),
    ];

    for (path, content) in samples {
        fs::write(target_dir.join(path), content)?;
    }

    Ok(())
}
