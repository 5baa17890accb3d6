//! Core data model for rocketdeck.
//!
//! These types describe what flows through the processor:
//! catalog records, the caller's query parameters, and the derived view.

mod query;
mod record;
mod view;

pub use query::{FilterField, QueryParameters, SortOrder};
pub use record::{FieldValue, Height, Mass, Record, Searchable};
pub use view::ResultView;
