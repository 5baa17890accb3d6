//! The derived view: what to render for the current page.

use serde::Serialize;

use crate::notice::Notice;

/// Records to render plus pagination metadata.
///
/// Borrowed from the caller's record set and recomputed on every change.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultView<'a, T> {
    pub records: Vec<&'a T>,

    /// Zero-based index of the page shown.
    pub current_page: usize,
    pub total_pages: usize,

    /// Size of the filtered and sorted set, across all pages.
    pub matched: usize,

    /// Messages the caller should surface to the user.
    #[serde(skip)]
    pub notices: Vec<Notice>,
}

impl<T> ResultView<'_, T> {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page.saturating_add(1) < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 0
    }
}
