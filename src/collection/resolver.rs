//! Resolves a collection's member ids into the pages to display

use super::membership::{MemberIds, Membership};
use crate::content::{ContentKind, ContentRecord, ContentStatus, RecordId};
use crate::host::ContentStore;

/// Eligible pages of the collection behind `current_page`
///
/// Returns `None` when the page is not a collection with a membership
/// entry, and the (possibly empty) eligible pages otherwise.
pub fn resolve_collection(
    store: &dyn ContentStore,
    membership: &Membership,
    current_page: &RecordId,
) -> Option<Vec<ContentRecord>> {
    if membership.is_empty() {
        return None;
    }

    let members = membership.members_of(current_page)?;
    Some(resolve_members(store, &members))
}

/// Fetch each member in order, keeping only live pages
///
/// Missing records and records of another type or status are dropped
/// without an error or a log line; keeping ids valid is left to the editor.
pub fn resolve_members(store: &dyn ContentStore, members: &MemberIds) -> Vec<ContentRecord> {
    members
        .iter()
        .filter_map(|id| store.get_by_id(id))
        .filter(|record| record.kind == ContentKind::Page && record.status == ContentStatus::Live)
        .collect()
}
