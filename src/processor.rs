//! Result-set processing: search, sort, and page over fetched records.
//!
//! Every screen variant runs the same pipeline. The variant's
//! [`ScreenConfig`] decides which steps are enabled:
//!
//! ```text
//! records ─▶ filter ─▶ sort (if enabled) ─▶ page (if enabled) ─▶ ResultView
//! ```
//!
//! Processing is pure. The source collection is never mutated and the
//! same inputs always produce the same view.

mod collate;
mod page;
mod search;
mod sort;

pub use collate::compare_names;
pub use page::{apply_page, total_pages};
pub use search::{Search, matches_search};
pub use sort::apply_sort;

use crate::config::{ScreenConfig, SearchMode};
use crate::model::{QueryParameters, ResultView, Searchable};
use crate::notice::Notice;

/// Derives the view for one screen variant.
#[derive(Debug, Clone, Default)]
pub struct ResultSetProcessor {
    screen: ScreenConfig,
}

impl ResultSetProcessor {
    pub fn new(screen: ScreenConfig) -> Self {
        Self { screen }
    }

    /// Compute the records to render for `params`.
    ///
    /// A page index past the end clamps to the last page. Zero matches
    /// yield a single empty page.
    pub fn compute_view<'a, T: Searchable>(
        &self,
        records: &'a [T],
        params: &QueryParameters,
    ) -> ResultView<'a, T> {
        let mut notices = Vec::new();
        let term = params.search_term.as_str();

        let search = match (params.filter_field, self.screen.search_mode) {
            (Some(field), _) => Search::Field(field),
            (None, SearchMode::CrossField) => Search::AllFields,
            (None, SearchMode::FieldRestricted) => {
                if !term.is_empty() {
                    notices.push(Notice::SelectFilterFirst);
                }
                Search::Disabled
            }
        };

        let mut effective: Vec<&T> = records
            .iter()
            .filter(|r| matches_search(*r, term, search))
            .collect();

        if !term.is_empty() && effective.is_empty() && search != Search::Disabled {
            notices.push(Notice::NoResults);
        }

        if self.screen.sort {
            apply_sort(&mut effective, params.sort_order);
        }

        let matched = effective.len();
        let (records, current_page, total) = if self.screen.paginate {
            let size = self.screen.page_size.get();
            let total = total_pages(matched, size);
            let current = params.page.min(total - 1);
            let window = apply_page(&effective, current, size).to_vec();
            (window, current, total)
        } else {
            (effective, 0, 1)
        };

        tracing::debug!(
            visible = records.len(),
            matched,
            current_page,
            total_pages = total,
            ?search,
            "computed view"
        );

        ResultView {
            records,
            current_page,
            total_pages: total,
            matched,
            notices,
        }
    }
}
