//! # Selection Toggle
//!
//! Pure transitions over the ordered list of selected token addresses.
//! The list itself lives in the app state behind
//! [`SelectionPort`](crate::core::store::SelectionPort); these functions
//! compute the replacement list a click dispatches.

use super::rows::RowItem;

/// Toggle membership of `address` in the selection.
///
/// Adding appends to the end; removing is positional, so the relative
/// order of the remaining entries is preserved.
pub fn toggle(selected: &[String], address: &str) -> Vec<String> {
    let mut next = selected.to_vec();
    match next.iter().position(|entry| entry == address) {
        None => next.push(address.to_string()),
        Some(index) => {
            next.remove(index);
        }
    }
    next
}

/// Flag-driven select-all: `true` selects every projected row, `false`
/// clears the selection. Prior selection is ignored either way, so
/// repeated calls with the same flag are idempotent.
pub fn select_all(rows: &[RowItem], checked: bool) -> Vec<String> {
    if checked {
        rows.iter().map(|row| row.address.clone()).collect()
    } else {
        Vec::new()
    }
}
