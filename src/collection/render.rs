//! Collection renderer - turns resolved pages into the collection markup

use super::membership::Membership;
use super::options::RenderOptions;
use super::resolver::resolve_collection;
use crate::content::{ContentRecord, RecordId};
use crate::helpers::{attr, truncate_words, TRUNCATION_MARKER};
use crate::host::{ContentStore, TextMode, TextSanitizer, UrlBuilder};

const COLLECTION_SPACING: &str = "margin:3rem 0;";
const ITEM_SPACING: &str = "margin-bottom:2.75rem;";
const LAST_ITEM_SPACING: &str = "margin-bottom:0;";
const ALIGN_LEFT: &str = "text-align:left;";
const BUTTON_CLASS: &str = "button basic";

/// Renders page collections using the host's collaborators
pub struct CollectionRenderer<'a> {
    store: &'a dyn ContentStore,
    urls: &'a dyn UrlBuilder,
    sanitizer: &'a dyn TextSanitizer,
}

impl<'a> CollectionRenderer<'a> {
    pub fn new(
        store: &'a dyn ContentStore,
        urls: &'a dyn UrlBuilder,
        sanitizer: &'a dyn TextSanitizer,
    ) -> Self {
        Self {
            store,
            urls,
            sanitizer,
        }
    }

    /// Render the collection behind `current_page`
    ///
    /// Produces an empty string when the page is not a collection or none
    /// of its members is a live page. `depth` is the number of tabs the
    /// outermost element is indented by.
    pub fn render(
        &self,
        membership: &Membership,
        current_page: &RecordId,
        options: &RenderOptions,
        depth: usize,
    ) -> String {
        match resolve_collection(self.store, membership, current_page) {
            Some(pages) => {
                tracing::debug!(
                    "Rendering collection {} with {} pages",
                    current_page,
                    pages.len()
                );
                self.render_pages(&pages, options, depth)
            }
            None => String::new(),
        }
    }

    /// Render already-resolved pages, in order
    pub fn render_pages(
        &self,
        pages: &[ContentRecord],
        options: &RenderOptions,
        depth: usize,
    ) -> String {
        if pages.is_empty() {
            return String::new();
        }

        let tab = "\t".repeat(depth);
        let inner = "\t".repeat(depth + 1);
        let mut html = String::new();

        let class = if options.class.is_empty() {
            "page-collection".to_string()
        } else {
            format!("page-collection {}", options.class)
        };
        let style = if options.styles.collection_spacing {
            COLLECTION_SPACING
        } else {
            ""
        };

        html.push_str(&format!(
            "{}<div class=\"{}\"{}{}>\n",
            tab,
            class,
            attr("style", style),
            attr("id", &options.id)
        ));

        let list_tag = options.list_markup.list_tag();
        let item_depth = match list_tag {
            Some(tag) => {
                html.push_str(&format!("{}<{} class=\"pc-items\">\n", inner, tag));
                depth + 2
            }
            None => depth + 1,
        };

        let total = pages.len();
        for (index, page) in pages.iter().enumerate() {
            self.render_item(&mut html, page, index + 1, total, options, item_depth);
        }

        if let Some(tag) = list_tag {
            html.push_str(&format!("{}</{}>\n", inner, tag));
        }
        html.push_str(&format!("{}</div>\n", tab));

        html
    }

    /// Render one item; `position` is 1-based
    fn render_item(
        &self,
        html: &mut String,
        page: &ContentRecord,
        position: usize,
        total: usize,
        options: &RenderOptions,
        depth: usize,
    ) {
        let tab = "\t".repeat(depth);
        let inner = "\t".repeat(depth + 1);
        let item_tag = options.list_markup.item_tag();
        let title_tag = options.title_tag.as_str();
        let url = self.urls.url(&page.slug);

        let item_style = match (options.styles.item_spacing, position == total) {
            (false, _) => "",
            (true, false) => ITEM_SPACING,
            (true, true) => LAST_ITEM_SPACING,
        };
        html.push_str(&format!(
            "{}<{} class=\"pc-item pc-item-{}\"{}>\n",
            tab,
            item_tag,
            position,
            attr("style", item_style)
        ));

        let title = if options.link_title {
            format!(r#"<a href="{}">{}</a>"#, url, page.title)
        } else {
            page.title.clone()
        };
        let title_style = if options.styles.align_titles_left {
            ALIGN_LEFT
        } else {
            ""
        };
        html.push_str(&format!(
            "{}<{} class=\"pc-item-title\"{}>{}</{}>\n",
            inner,
            title_tag,
            attr("style", title_style),
            title,
            title_tag
        ));

        if options.show_content {
            let (preview, truncated) = truncate_words(&page.content, options.content_length);
            let preview = self.sanitizer.text(&preview, TextMode::NoHtml);
            let marker = if truncated { TRUNCATION_MARKER } else { "" };
            html.push_str(&format!(
                "{}<p class=\"pc-item-content\">{}{}</p>\n",
                inner, preview, marker
            ));
        }

        // Shown whenever a label is set, whether or not the preview was cut
        if options.shows_read_more() {
            let link_class = if options.styles.read_more_button {
                BUTTON_CLASS
            } else {
                ""
            };
            html.push_str(&format!(
                "{}<div class=\"pc-item-read-more\"><a href=\"{}\"{}>{}</a></div>\n",
                inner,
                url,
                attr("class", link_class),
                options.read_more
            ));
        }

        html.push_str(&format!("{}</{}>\n", tab, item_tag));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::{ListMarkup, TitleTag};
    use crate::config::SiteConfig;
    use crate::content::{ContentKind, ContentStatus, MemoryStore};
    use crate::helpers::Helpers;

    fn live_page(id: u64, title: &str, content: &str) -> ContentRecord {
        ContentRecord::new(id, ContentKind::Page, title)
            .with_status(ContentStatus::Live)
            .with_content(content)
    }

    fn store() -> MemoryStore {
        vec![
            live_page(5, "Services", "We design and build websites for small teams."),
            live_page(3, "Team", "Meet the people."),
            live_page(4, "About", "a b c d e"),
            ContentRecord::new(6u64, ContentKind::Page, "Hidden"),
        ]
        .into_iter()
        .collect()
    }

    fn render(members: &str, options: &RenderOptions) -> String {
        let store = store();
        let helpers = Helpers::new(SiteConfig::default());
        let membership: Membership = [("17", members)].into_iter().collect();
        CollectionRenderer::new(&store, &helpers, &helpers).render(
            &membership,
            &RecordId::new("17"),
            options,
            0,
        )
    }

    #[test]
    fn test_default_markup() {
        let html = render("5,3", &RenderOptions::default());
        let expected = "<div class=\"page-collection\">\n\
                        \t<ul class=\"pc-items\">\n\
                        \t\t<li class=\"pc-item pc-item-1\">\n\
                        \t\t\t<h4 class=\"pc-item-title\">Services</h4>\n\
                        \t\t</li>\n\
                        \t\t<li class=\"pc-item pc-item-2\">\n\
                        \t\t\t<h4 class=\"pc-item-title\">Team</h4>\n\
                        \t\t</li>\n\
                        \t</ul>\n\
                        </div>\n";
        assert_eq!(html, expected);
    }

    #[test]
    fn test_only_eligible_pages_render() {
        let html = render("5,6,99", &RenderOptions::default());
        assert_eq!(html.matches("class=\"pc-item ").count(), 1);
        assert!(html.contains("Services"));
        assert!(!html.contains("Hidden"));
    }

    #[test]
    fn test_empty_collection_renders_nothing() {
        assert_eq!(render("6,99", &RenderOptions::default()), "");
        assert_eq!(render("", &RenderOptions::default()), "");
    }

    #[test]
    fn test_not_a_collection_renders_nothing() {
        let store = store();
        let helpers = Helpers::new(SiteConfig::default());
        let membership: Membership = [("17", "5")].into_iter().collect();
        let renderer = CollectionRenderer::new(&store, &helpers, &helpers);

        let html = renderer.render(&membership, &RecordId::new("5"), &RenderOptions::default(), 0);
        assert_eq!(html, "");
    }

    #[test]
    fn test_div_markup_has_no_list() {
        let options = RenderOptions {
            list_markup: ListMarkup::Div,
            ..Default::default()
        };
        let html = render("5,3", &options);
        assert!(!html.contains("<ul"));
        assert!(!html.contains("<ol"));
        assert!(html.contains("\t<div class=\"pc-item pc-item-1\">"));
        assert!(html.contains("\t<div class=\"pc-item pc-item-2\">"));
    }

    #[test]
    fn test_ordered_article_and_title_tags() {
        let ol = render(
            "5",
            &RenderOptions {
                list_markup: ListMarkup::Ol,
                title_tag: TitleTag::Span,
                ..Default::default()
            },
        );
        assert!(ol.contains("<ol class=\"pc-items\">"));
        assert!(ol.contains("<li class=\"pc-item pc-item-1\">"));
        assert!(ol.contains("<span class=\"pc-item-title\">Services</span>"));

        let article = render(
            "5",
            &RenderOptions {
                list_markup: ListMarkup::Article,
                ..Default::default()
            },
        );
        assert!(article.contains("<article class=\"pc-item pc-item-1\">"));
        assert!(article.contains("</article>"));
    }

    #[test]
    fn test_title_link_toggle() {
        let plain = render("5", &RenderOptions::default());
        assert!(!plain.contains("<a href"));
        assert!(plain.contains(">Services</h4>"));

        let linked = render(
            "5",
            &RenderOptions {
                link_title: true,
                ..Default::default()
            },
        );
        assert!(linked.contains("<h4 class=\"pc-item-title\"><a href=\"/services/\">Services</a></h4>"));
    }

    #[test]
    fn test_content_truncation() {
        let short = RenderOptions {
            show_content: true,
            content_length: 3,
            ..Default::default()
        };
        assert!(render("4", &short).contains("<p class=\"pc-item-content\">a b c [...]</p>"));

        let long = RenderOptions {
            show_content: true,
            content_length: 10,
            ..Default::default()
        };
        assert!(render("4", &long).contains("<p class=\"pc-item-content\">a b c d e</p>"));
    }

    #[test]
    fn test_read_more_needs_preview_and_label() {
        let label_only = RenderOptions {
            read_more: "Read more".to_string(),
            ..Default::default()
        };
        assert!(!render("4", &label_only).contains("pc-item-read-more"));

        let preview_only = RenderOptions {
            show_content: true,
            ..Default::default()
        };
        assert!(!render("4", &preview_only).contains("pc-item-read-more"));

        // Shown even though "a b c d e" fits within the limit
        let both = RenderOptions {
            show_content: true,
            read_more: "Read more".to_string(),
            ..Default::default()
        };
        let html = render("4", &both);
        assert!(html.contains(
            "<div class=\"pc-item-read-more\"><a href=\"/about/\">Read more</a></div>"
        ));
        assert!(!html.contains("[...]"));
    }

    #[test]
    fn test_last_item_spacing_suppressed() {
        let mut options = RenderOptions::default();
        options.styles.item_spacing = true;

        let html = render("5,3,4", &options);
        assert_eq!(html.matches(ITEM_SPACING).count(), 2);
        assert!(html.contains("<li class=\"pc-item pc-item-1\" style=\"margin-bottom:2.75rem;\">"));
        assert!(html.contains("<li class=\"pc-item pc-item-2\" style=\"margin-bottom:2.75rem;\">"));
        assert!(html.contains("<li class=\"pc-item pc-item-3\" style=\"margin-bottom:0;\">"));
    }

    #[test]
    fn test_last_item_counts_filtered_pages() {
        let mut options = RenderOptions::default();
        options.styles.item_spacing = true;

        // 6 and 99 are dropped, so Team is the last rendered item
        let html = render("5,3,6,99", &options);
        assert!(html.contains("<li class=\"pc-item pc-item-2\" style=\"margin-bottom:0;\">"));
        assert_eq!(html.matches(ITEM_SPACING).count(), 1);
    }

    #[test]
    fn test_wrapper_attributes_and_styles() {
        let mut options = RenderOptions {
            show_content: true,
            read_more: "More".to_string(),
            class: "featured wide".to_string(),
            id: "home-collection".to_string(),
            ..Default::default()
        };
        options.styles.collection_spacing = true;
        options.styles.align_titles_left = true;
        options.styles.read_more_button = true;

        let html = render("5", &options);
        assert!(html.starts_with(
            "<div class=\"page-collection featured wide\" style=\"margin:3rem 0;\" id=\"home-collection\">\n"
        ));
        assert!(html.contains("<h4 class=\"pc-item-title\" style=\"text-align:left;\">"));
        assert!(html.contains("<a href=\"/services/\" class=\"button basic\">More</a>"));
    }

    #[test]
    fn test_depth_indents_every_line() {
        let html = render("5", &RenderOptions::default());
        let store = store();
        let helpers = Helpers::new(SiteConfig::default());
        let membership: Membership = [("17", "5")].into_iter().collect();
        let indented = CollectionRenderer::new(&store, &helpers, &helpers).render(
            &membership,
            &RecordId::new("17"),
            &RenderOptions::default(),
            2,
        );

        for (plain, deep) in html.lines().zip(indented.lines()) {
            assert_eq!(format!("\t\t{}", plain), deep);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let options = RenderOptions {
            show_content: true,
            ..Default::default()
        };
        assert_eq!(render("5,3,4,5", &options), render("5,3,4,5", &options));
    }

    #[test]
    fn test_content_preview_strips_markup() {
        let store: MemoryStore = vec![live_page(8, "Markup", "<b>a</b> b <em>c</em> d")]
            .into_iter()
            .collect();
        let helpers = Helpers::new(SiteConfig::default());
        let membership: Membership = [("17", "8")].into_iter().collect();
        let options = RenderOptions {
            show_content: true,
            content_length: 3,
            ..Default::default()
        };

        let html = CollectionRenderer::new(&store, &helpers, &helpers).render(
            &membership,
            &RecordId::new("17"),
            &options,
            0,
        );
        assert!(html.contains("<p class=\"pc-item-content\">a b c [...]</p>"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<em>"));
    }
}
