//! # Row Ordering
//!
//! Total order over table rows by claimable fiat value. The comparator
//! reads the raw fiat value carried in the row, never the formatted string,
//! and a non-finite value compares as equal so ordering stays total.
//! Stability is guaranteed by decorating each row with its original index
//! and using the index as the final tie-break.

use std::cmp::Ordering;

use super::rows::RowItem;

/// Direction of the claimable-value sort. Resets to ascending whenever the
/// dashboard is re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The opposite direction, for the column-header toggle.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

fn descending(a: &RowItem, b: &RowItem) -> Ordering {
    // NaN compares as equal: an unparseable fiat value stays order-neutral
    b.claimable
        .fiat_raw
        .partial_cmp(&a.claimable.fiat_raw)
        .unwrap_or(Ordering::Equal)
}

/// Comparator for the requested direction. Never panics.
pub fn comparator(order: SortOrder) -> impl Fn(&RowItem, &RowItem) -> Ordering {
    move |a, b| match order {
        SortOrder::Descending => descending(a, b),
        SortOrder::Ascending => descending(a, b).reverse(),
    }
}

/// Sort rows by claimable fiat value, preserving the original relative
/// order of rows that compare equal.
pub fn stable_sort(rows: Vec<RowItem>, order: SortOrder) -> Vec<RowItem> {
    let compare = comparator(order);
    let mut decorated: Vec<(RowItem, usize)> = rows.into_iter().enumerate().map(|(index, row)| (row, index)).collect();
    decorated.sort_by(|a, b| compare(&a.0, &b.0).then(a.1.cmp(&b.1)));
    decorated.into_iter().map(|(row, _)| row).collect()
}
