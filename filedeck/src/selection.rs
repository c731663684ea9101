//! Pure selection-set transitions.
//!
//! Every function re-checks selectability through the `is_selectable`
//! predicate it is handed, because a file that was selectable when it was
//! clicked may have been replaced by a non-selectable version since.

use std::collections::HashSet;

use crate::file::FileId;

/// Set of selected file ids.
pub type Selection = HashSet<FileId>;

/// Select only `file_id`.
///
/// With `toggle`, clicking the sole selected file deselects it.
pub fn exclusive_select(
    prev: &Selection,
    file_id: &str,
    toggle: bool,
    is_selectable: impl Fn(&str) -> bool,
) -> Selection {
    if !is_selectable(file_id) {
        return prev.clone();
    }
    if toggle && prev.len() == 1 && prev.contains(file_id) {
        return Selection::new();
    }
    Selection::from([file_id.to_string()])
}

/// Flip membership of `file_id`, leaving the rest of the selection.
pub fn toggle_select(
    prev: &Selection,
    file_id: &str,
    is_selectable: impl Fn(&str) -> bool,
) -> Selection {
    let mut next = prev.clone();
    if !next.remove(file_id) && is_selectable(file_id) {
        next.insert(file_id.to_string());
    }
    next
}

/// Add `file_id` to the selection without removing anything.
pub fn add_select(
    prev: &Selection,
    file_id: &str,
    is_selectable: impl Fn(&str) -> bool,
) -> Selection {
    let mut next = prev.clone();
    if is_selectable(file_id) {
        next.insert(file_id.to_string());
    }
    next
}

/// Select every selectable id between two display positions.
///
/// Both endpoints are inclusive and their order does not matter: the
/// range is normalized here. Indices past the end of `display_order` are
/// clamped. The result replaces the previous selection.
pub fn range_select(
    display_order: &[FileId],
    start: usize,
    end: usize,
    is_selectable: impl Fn(&str) -> bool,
) -> Selection {
    if display_order.is_empty() {
        return Selection::new();
    }
    let last = display_order.len() - 1;
    let (low, high) = if start <= end { (start, end) } else { (end, start) };
    if low > last {
        return Selection::new();
    }

    display_order[low..=high.min(last)]
        .iter()
        .filter(|id| is_selectable(id.as_str()))
        .cloned()
        .collect()
}

/// Empty selection.
pub fn clear() -> Selection {
    Selection::new()
}

/// Drop ids that are no longer selectable (or no longer exist).
pub fn retain_selectable(
    selection: &Selection,
    is_selectable: impl Fn(&str) -> bool,
) -> Selection {
    selection
        .iter()
        .filter(|id| is_selectable(id.as_str()))
        .cloned()
        .collect()
}
