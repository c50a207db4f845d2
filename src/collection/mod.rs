//! Page collections - membership, resolution and rendering
//!
//! A collection is a `page-collection` record whose members are listed in
//! the membership configuration. Rendering resolves those members against
//! the content store, keeps the live pages, and emits the collection markup
//! described by the display options.

mod membership;
mod options;
mod render;
mod resolver;

pub use membership::{MemberIds, Membership};
pub use options::{
    parse_content_length, DisplayOptions, InlineStyles, ListMarkup, RenderOptions, TitleTag,
    DEFAULT_CONTENT_LENGTH,
};
pub use render::CollectionRenderer;
pub use resolver::{resolve_collection, resolve_members};
