//! Relation option-collection reconciliation.
//!
//! Update forms fetch their relation option lists from the backend with a
//! server-side filter that excludes entities already linked elsewhere. The
//! entity being edited may therefore reference entities the fetch left out;
//! these helpers merge the current selection back in so every selected value
//! stays visible in its dropdown, without introducing duplicates.

use std::collections::HashSet;

use super::Identified;

/// Merge `selected` entities into `collection` unless an entry with the same
/// identifier is already present.
///
/// Entities added this way are prepended in their `selected` order, ahead of
/// the untouched `collection` order. When an identifier appears both in
/// `collection` and in `selected`, the `collection` occurrence wins and keeps
/// its position. Duplicate identifiers inside `selected` itself are collapsed
/// to the first occurrence.
pub fn add_to_collection_if_missing<'a, T, I>(collection: Vec<T>, selected: I) -> Vec<T>
where
    T: Identified + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen: HashSet<Option<i32>> = collection.iter().map(Identified::id).collect();
    let mut to_add: Vec<T> = Vec::new();
    for candidate in selected {
        if seen.insert(candidate.id()) {
            to_add.push(candidate.clone());
        }
    }
    if to_add.is_empty() {
        return collection;
    }
    to_add.extend(collection);
    to_add
}

/// Stable identity for rendering option lists.
///
/// Option lists only ever contain persisted entities, so a missing identifier
/// is a caller bug and panics.
pub fn track_by_id<T: Identified>(_index: usize, item: &T) -> i32 {
    item.id().expect("option list entries are persisted entities with an id")
}

/// Return the element of `selected` carrying the same identifier as `option`,
/// falling back to `option` itself.
///
/// Multi-select widgets compare by reference, so the exact instance held in
/// the form must be handed back when it matches an option.
pub fn get_selected<'a, T: Identified>(option: &'a T, selected: Option<&'a [T]>) -> &'a T {
    if let Some(selected) = selected {
        for candidate in selected {
            if option.id() == candidate.id() {
                return candidate;
            }
        }
    }
    option
}
