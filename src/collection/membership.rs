//! Collection membership configuration
//!
//! Editors store each collection's members as a comma-separated string of
//! page ids (`{"17": "5,3", "20": "4,3,5"}`). The string is parsed once,
//! here, into an ordered set of ids.

use indexmap::{IndexMap, IndexSet};

use crate::content::RecordId;
use crate::host::OptionStore;

/// Ordered, de-duplicated member ids of one collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberIds(IndexSet<RecordId>);

impl MemberIds {
    /// Parse a comma-separated id list
    ///
    /// Tokens are trimmed and blanks dropped. The first occurrence of an id
    /// fixes its position.
    pub fn parse(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(RecordId::new)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.0.iter()
    }

    /// Serialize back into the stored comma-separated form
    pub fn to_raw(&self) -> String {
        self.0
            .iter()
            .map(RecordId::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<'a> IntoIterator for &'a MemberIds {
    type Item = &'a RecordId;
    type IntoIter = indexmap::set::Iter<'a, RecordId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Mapping of collection id to its raw member string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Membership {
    entries: IndexMap<RecordId, String>,
}

impl Membership {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the membership blob stored under `key`
    ///
    /// A missing or malformed blob reads as empty membership.
    pub fn load(options: &dyn OptionStore, key: &str) -> Self {
        match options.option(key) {
            Some(value) => Self::from_value(&value),
            None => {
                tracing::debug!("No membership configuration under {:?}", key);
                Self::default()
            }
        }
    }

    /// Build from a YAML mapping; scalar keys and values are accepted, and
    /// anything else is ignored
    pub fn from_value(value: &serde_yaml::Value) -> Self {
        let mut membership = Self::default();
        let Some(mapping) = value.as_mapping() else {
            tracing::debug!("Membership configuration is not a mapping, ignoring");
            return membership;
        };

        for (key, members) in mapping {
            match (scalar_to_string(key), scalar_to_string(members)) {
                (Some(key), Some(members)) => membership.insert(RecordId::new(key), members),
                _ => tracing::debug!("Ignoring non-scalar membership entry {:?}", key),
            }
        }

        membership
    }

    pub fn insert(&mut self, collection: RecordId, members: impl Into<String>) {
        self.entries.insert(collection, members.into());
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw member string of a collection
    pub fn raw(&self, collection: &RecordId) -> Option<&str> {
        self.entries.get(collection).map(String::as_str)
    }

    /// Parsed members of a collection, `None` when it has no entry
    pub fn members_of(&self, collection: &RecordId) -> Option<MemberIds> {
        self.raw(collection).map(MemberIds::parse)
    }
}

impl<K: Into<RecordId>, V: Into<String>> FromIterator<(K, V)> for Membership {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut membership = Membership::new();
        for (collection, members) in iter {
            membership.insert(collection.into(), members);
        }
        membership
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s.clone()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
