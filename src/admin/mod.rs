//! Admin declarations for page collections
//!
//! The `page-collection` content type, the site options where editors list
//! each collection's member ids, and the display options of the collection
//! box. These are plain data; the admin UI that shows them is the host's.

mod fields;

pub use fields::{FieldKind, FieldWidth, OptionField, OptionFields};

use indexmap::IndexMap;
use serde::Serialize;

use crate::collection::{InlineStyles, ListMarkup, TitleTag};
use crate::content::{ContentFilter, ContentKind, ContentRecord};
use crate::helpers::html_escape;
use crate::host::{ContentStore, UrlBuilder};

/// Human-readable name of the collection content type and box
pub const TITLE: &str = "Page Collection";

/// Declaration of a content type contributed to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentTypeDecl {
    pub name: String,
    pub environment: Vec<String>,
    pub url: bool,
    pub fields: Vec<String>,
    pub groups: IndexMap<String, Vec<String>>,
}

/// Content types contributed by page collections
///
/// Creating a collection works like creating a page; each one gets a URL
/// and a template that controls how it is displayed.
pub fn content_types() -> IndexMap<String, ContentTypeDecl> {
    let mut groups = IndexMap::new();
    groups.insert("page-url".to_string(), to_strings(&["slug", "arrow", "url"]));

    let mut types = IndexMap::new();
    types.insert(
        ContentKind::PageCollection.as_str().to_string(),
        ContentTypeDecl {
            name: TITLE.to_string(),
            environment: to_strings(&["theme"]),
            url: true,
            fields: to_strings(&["title", "page-url", "status", "content"]),
            groups,
        },
    );
    types
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Live page-collection records
pub fn collections_list(store: &dyn ContentStore) -> Vec<ContentRecord> {
    store.get_where(&ContentFilter::live(ContentKind::PageCollection))
}

/// Live pages as `id → "{id} - {title}"`
pub fn pages_list(store: &dyn ContentStore) -> IndexMap<String, String> {
    store
        .get_where(&ContentFilter::live(ContentKind::Page))
        .into_iter()
        .map(|page| {
            let label = format!("{} - {}", page.id, page.title);
            (page.id.to_string(), label)
        })
        .collect()
}

/// Site options: one member-id field per live collection
pub fn site_options(store: &dyn ContentStore, urls: &dyn UrlBuilder) -> OptionFields {
    let mut fields = OptionFields::new();
    let content_url = urls.admin_url("content");

    let collections = collections_list(store);
    if collections.is_empty() {
        fields.insert(
            "no-collections".to_string(),
            OptionField::custom(format!(
                r#"<div class="callout note" style="max-width:720px"><p style="margin-bottom: .25rem;">Please create a new Page Collection from the <a href="{}">Content Types</a> page to get started.</p></div>"#,
                content_url
            )),
        );
        return fields;
    }

    fields.insert(
        "description".to_string(),
        OptionField::custom(format!(
            r#"<div style="max-width:720px"><p style="margin-bottom: 1.25rem;">Each field represents a Page Collection. To include pages in a collection, enter comma-separated page IDs. For example, to include pages with IDs 3 and 5, enter <code>3,5</code>.</p><p>For reference, a list of live pages and their IDs are at the bottom of this page. To create more Page Collections, visit the <a href="{}">Content Types</a> page. Control the display of your Page Collections from the <a href="{}">Template Editor</a>.</p></div>"#,
            content_url,
            urls.admin_url("theme/editor")
        )),
    );

    for collection in &collections {
        fields.insert(
            collection.id.to_string(),
            OptionField::text(collection.title.clone())
                .with_tooltip("Enter comma-separated page IDs to include in this collection.")
                .with_placeholder("3,5")
                .with_width(FieldWidth::Large)
                .with_description(format!(
                    r#"Page Collection ID: {} | <a href="{}" target="_blank">View Page Collection</a>"#,
                    collection.id,
                    urls.url(&collection.slug)
                )),
        );
    }

    let items: String = pages_list(store)
        .values()
        .map(|label| format!(r#"<li style="margin:0;">{}</li>"#, html_escape(label)))
        .collect();
    fields.insert(
        "page-collection-list".to_string(),
        OptionField::custom(format!(
            r#"<div id="page-reference" style="max-width:664px;margin-top:2rem;"><strong>Live Page Reference:</strong><ul style="margin:0;padding:0;">{}</ul></div>"#,
            items
        )),
    );

    fields
}

/// Generic wrapper fields every box carries
pub fn html_wrapper_fields() -> OptionFields {
    let mut fields = OptionFields::new();
    fields.insert(
        "class".to_string(),
        OptionField::text("HTML class").with_width(FieldWidth::Medium),
    );
    fields.insert(
        "id".to_string(),
        OptionField::text("HTML id").with_width(FieldWidth::Medium),
    );
    fields
}

/// Display options of the collection box
///
/// The generic wrapper fields are merged last; `class` keeps its position
/// among the display fields but takes the wrapper definition.
pub fn html_options() -> OptionFields {
    let mut fields = OptionFields::new();

    fields.insert(
        "list_markup".to_string(),
        OptionField::select(
            "List Markup",
            ListMarkup::ALL.iter().map(|markup| {
                let label = match markup {
                    ListMarkup::Ul => "Unordered &lt;li&gt; Items",
                    ListMarkup::Ol => "Ordered &lt;li&gt; Items",
                    ListMarkup::Div => "&lt;div&gt; Containers",
                    ListMarkup::Article => "&lt;article&gt; Containers",
                };
                (markup.as_str(), label)
            }),
        )
        .with_tooltip("Determine the HTML markup for collection."),
    );
    fields.insert(
        "title_tag".to_string(),
        OptionField::select(
            "Item Title Tags",
            TitleTag::ALL.iter().map(|tag| (tag.as_str(), tag.as_str())),
        )
        .with_tooltip("Select the HTML tag for item titles."),
    );
    fields.insert(
        "inline_styles".to_string(),
        OptionField::checkbox("Inline Styles", InlineStyles::NAMES).with_tooltip(
            "Make small, convenient adjustments to the collection's appearance using inline styles.",
        ),
    );
    fields.insert(
        "link_title".to_string(),
        OptionField::checkbox("Link Item Titles", [("on", "Link item titles to pages")])
            .with_tooltip("If checked, item titles will be linked to their respective pages."),
    );
    fields.insert(
        "show_content".to_string(),
        OptionField::checkbox("Show Content", [("on", "Show truncated page content")]).with_tooltip(
            "If checked, a truncated version of the page content will be displayed.",
        ),
    );
    fields.insert(
        "content_length".to_string(),
        OptionField::text("Content Length (word count)")
            .with_tooltip("Number of words to display from the page content.")
            .with_width(FieldWidth::Small),
    );
    fields.insert(
        "read_more".to_string(),
        OptionField::text("'Read More' Link Text")
            .with_tooltip("Add a 'Read More' link if truncated content is shown. Leave blank (or disable 'Show Content') for no link.")
            .with_width(FieldWidth::Medium),
    );
    fields.insert(
        "class".to_string(),
        OptionField::text("Custom Class")
            .with_tooltip("Add a custom class to the page collection wrapper for additional styling.")
            .with_width(FieldWidth::Medium),
    );

    let mut wrapper = html_wrapper_fields();
    if let Some(class) = wrapper.get_mut("class") {
        class.tooltip = Some("If you would like to add to the existing <code>page-collection</code> wrapping class, you can do so here. This is useful for adding custom styles to the collection wrapper.".to_string());
    }
    if let Some(id) = wrapper.get_mut("id") {
        id.tooltip = Some("If you would like to add an ID to the collection wrapper, you can do so here. Note that the wrapper already has a <code>page-collection</code> class.".to_string());
    }

    // IndexMap::insert keeps an existing key's position
    fields.extend(wrapper);
    fields
}
