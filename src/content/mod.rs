//! Content module - content records, front-matter, loading and storage

mod frontmatter;
pub mod loader;
mod record;
mod store;

pub use frontmatter::{FrontMatter, FrontMatterError};
pub use record::{ContentFilter, ContentKind, ContentRecord, ContentStatus, RecordId};
pub use store::MemoryStore;
