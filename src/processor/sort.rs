//! Sorting by name.

use crate::model::{Searchable, SortOrder};

use super::compare_names;

/// Sort `records` in place by name.
///
/// Stable in both directions: records with equal names keep their
/// relative order. Descending reverses the comparator, not the result.
pub fn apply_sort<T: Searchable + ?Sized>(records: &mut [&T], order: SortOrder) {
    match order {
        SortOrder::Unsorted => {}
        SortOrder::Ascending => {
            records.sort_by(|a, b| compare_names(a.sort_name(), b.sort_name()));
        }
        SortOrder::Descending => {
            records.sort_by(|a, b| compare_names(b.sort_name(), a.sort_name()));
        }
    }
}
