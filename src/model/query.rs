//! Query parameters: what the user has asked to see.

use serde::{Deserialize, Serialize};

/// A single attribute that search can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterField {
    Name,
    Country,
    FirstFlight,
    Description,
}

impl FilterField {
    /// Label shown next to the filter control.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Country => "Country",
            Self::FirstFlight => "First Flight",
            Self::Description => "Description",
        }
    }
}

/// Sort direction, always by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the order the records arrived in.
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

/// Caller-owned query state, changed only by direct user actions.
///
/// Only one filter field can be active at a time; selecting another
/// replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    pub search_term: String,
    pub filter_field: Option<FilterField>,
    pub sort_order: SortOrder,

    /// Zero-based page index.
    pub page: usize,
}

impl QueryParameters {
    /// Replace the search term and go back to the first page.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 0;
    }

    pub fn select_filter(&mut self, field: FilterField) {
        self.filter_field = Some(field);
        self.page = 0;
    }

    pub fn clear_filter(&mut self) {
        self.filter_field = None;
        self.page = 0;
    }

    /// Change the sort order and go back to the first page.
    pub fn set_sort_order(&mut self, order: SortOrder) {
        self.sort_order = order;
        self.page = 0;
    }

    /// Advance one page, stopping at the last of `total_pages`.
    pub fn next_page(&mut self, total_pages: usize) {
        if self.page.saturating_add(1) < total_pages {
            self.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_freshly_mounted_screen() {
        let params = QueryParameters::default();
        assert_eq!(params.search_term, "");
        assert_eq!(params.filter_field, None);
        assert_eq!(params.sort_order, SortOrder::Unsorted);
        assert_eq!(params.page, 0);
    }

    #[test]
    fn selecting_a_filter_replaces_the_previous_one() {
        let mut params = QueryParameters::default();
        params.select_filter(FilterField::Name);
        params.select_filter(FilterField::Country);
        assert_eq!(params.filter_field, Some(FilterField::Country));

        params.clear_filter();
        assert_eq!(params.filter_field, None);
    }

    #[test]
    fn typing_resets_to_first_page() {
        let mut params = QueryParameters {
            page: 3,
            ..QueryParameters::default()
        };
        params.set_search_term("falcon");
        assert_eq!(params.page, 0);
        assert_eq!(params.search_term, "falcon");
    }

    #[test]
    fn page_navigation_saturates() {
        let mut params = QueryParameters::default();
        params.previous_page();
        assert_eq!(params.page, 0);

        params.next_page(2);
        assert_eq!(params.page, 1);
        params.next_page(2);
        assert_eq!(params.page, 1);

        params.next_page(0);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn next_page_at_the_largest_index_stays_put() {
        let mut params = QueryParameters {
            page: usize::MAX,
            ..QueryParameters::default()
        };
        params.next_page(3);
        assert_eq!(params.page, usize::MAX);

        params.next_page(usize::MAX);
        assert_eq!(params.page, usize::MAX);
    }
}
