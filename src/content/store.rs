//! In-memory content store

use indexmap::IndexMap;

use super::record::{ContentFilter, ContentRecord, RecordId};
use crate::host::ContentStore;

/// Content records held in insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: IndexMap<RecordId, ContentRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Returns `false` and keeps the existing record when
    /// the id is already taken.
    pub fn insert(&mut self, record: ContentRecord) -> bool {
        if self.records.contains_key(&record.id) {
            return false;
        }
        self.records.insert(record.id.clone(), record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentRecord> {
        self.records.values()
    }

    /// Next free numeric id (one past the largest numeric id in use)
    pub fn next_id(&self) -> RecordId {
        let max = self
            .records
            .keys()
            .filter_map(RecordId::as_number)
            .max()
            .unwrap_or(0);
        RecordId::from(max + 1)
    }
}

impl FromIterator<ContentRecord> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = ContentRecord>>(iter: I) -> Self {
        let mut store = MemoryStore::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}

impl ContentStore for MemoryStore {
    fn get_by_id(&self, id: &RecordId) -> Option<ContentRecord> {
        self.records.get(id).cloned()
    }

    fn get_where(&self, filter: &ContentFilter) -> Vec<ContentRecord> {
        self.records
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentKind, ContentStatus};

    fn sample() -> MemoryStore {
        vec![
            ContentRecord::new(3u64, ContentKind::Page, "Team").with_status(ContentStatus::Live),
            ContentRecord::new(5u64, ContentKind::Page, "Services"),
            ContentRecord::new(17u64, ContentKind::PageCollection, "Featured")
                .with_status(ContentStatus::Live),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_get_by_id() {
        let store = sample();
        assert_eq!(
            store.get_by_id(&RecordId::new("5")).map(|r| r.title),
            Some("Services".to_string())
        );
        assert!(store.get_by_id(&RecordId::new("99")).is_none());
    }

    #[test]
    fn test_get_where_keeps_order() {
        let store = sample();
        let live = store.get_where(&ContentFilter {
            kind: None,
            status: Some(ContentStatus::Live),
        });
        let ids: Vec<_> = live.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "17"]);
    }

    #[test]
    fn test_duplicate_insert_keeps_first() {
        let mut store = sample();
        assert!(!store.insert(ContentRecord::new(3u64, ContentKind::Page, "Other")));
        assert_eq!(store.get_by_id(&RecordId::new("3")).unwrap().title, "Team");
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_next_id() {
        assert_eq!(sample().next_id(), RecordId::new("18"));
        assert_eq!(MemoryStore::new().next_id(), RecordId::new("1"));
    }
}
