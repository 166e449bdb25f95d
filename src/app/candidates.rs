//! Candidate list computation.
//!
//! Combines search filtering with the current selection to produce the list of
//! items a view should render. An empty result means the view shows its
//! "no items" placeholder instead.

use super::filter::{filter_items, MatchMode};
use super::selection::SelectionSet;
use crate::domain::Item;

/// Computes the render-ready candidate list.
///
/// 1. Filters `items` by `search_term` under `match_mode`.
/// 2. If `remove_selected` is set, drops every item whose key is selected.
///
/// Input order is preserved. Items without a key are never considered
/// selected, so they survive step 2.
///
/// # Examples
///
/// ```
/// use multiselect::app::candidates::compute_candidates;
/// use multiselect::app::filter::MatchMode;
/// use multiselect::app::selection::{SelectionMode, SelectionSet};
/// use multiselect::domain::Item;
///
/// let items = vec![Item::new(1, "Apple"), Item::new(2, "Avocado"), Item::new(3, "Banana")];
/// let selection = SelectionSet::with_keys(SelectionMode::Multi, [1]);
///
/// let candidates = compute_candidates(&items, "a", &selection, true, MatchMode::Partial);
/// let keys: Vec<_> = candidates.iter().filter_map(|item| item.key).collect();
/// assert_eq!(keys, vec![2, 3]);
/// ```
#[must_use]
pub fn compute_candidates<'a, K: Clone + PartialEq>(
    items: &'a [Item<K>],
    search_term: &str,
    selection: &SelectionSet<K>,
    remove_selected: bool,
    match_mode: MatchMode,
) -> Vec<&'a Item<K>> {
    let mut candidates = filter_items(items, search_term, match_mode);

    if remove_selected {
        candidates.retain(|item| !is_selected(item, selection));
    }

    candidates
}

/// Returns `true` if the item's key is in the selection.
#[must_use]
pub fn is_selected<K: Clone + PartialEq>(item: &Item<K>, selection: &SelectionSet<K>) -> bool {
    item.key.as_ref().is_some_and(|key| selection.contains(key))
}
