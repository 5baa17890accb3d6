//! Text search over a record's attributes.

use crate::model::{FieldValue, FilterField, Searchable};

/// Which attributes a search term is tested against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Search {
    /// Every declared attribute, nested ones included.
    AllFields,

    /// One selected attribute.
    Field(FilterField),

    /// Searching was refused; everything matches.
    Disabled,
}

/// Whether `record` matches `term` under `search`.
///
/// Matching is a case-insensitive substring test. Numbers and booleans
/// are compared on their text form. An empty term matches everything.
pub fn matches_search<T: Searchable + ?Sized>(record: &T, term: &str, search: Search) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();

    match search {
        Search::Disabled => true,
        Search::Field(field) => contains(record.filter_value(field), &needle),
        Search::AllFields => record
            .search_fields()
            .into_iter()
            .any(|(_, value)| contains(value, &needle)),
    }
}

/// `needle` must already be lowercase.
fn contains(value: FieldValue<'_>, needle: &str) -> bool {
    match value {
        FieldValue::Text(text) => text.to_lowercase().contains(needle),
        other => other.to_string().to_lowercase().contains(needle),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Height, Mass, Record};

    fn falcon_heavy() -> Record {
        let mut record = Record::new(
            "5e9d0d95eda69974db09d1ed",
            "Falcon Heavy",
            "United States",
            "2018-02-06",
            "With the ability to lift into orbit over 54 metric tons.",
        );
        record.active = Some(true);
        record.company = Some("SpaceX".into());
        record.cost_per_launch = Some(90_000_000.0);
        record.mass = Some(Mass {
            kg: Some(1_420_788.0),
        });
        record.height = Some(Height {
            meters: Some(70.0),
        });
        record
    }

    #[test]
    fn empty_term_matches_in_every_mode() {
        let record = falcon_heavy();
        for search in [
            Search::AllFields,
            Search::Field(FilterField::Name),
            Search::Disabled,
        ] {
            assert!(matches_search(&record, "", search));
        }
    }

    #[test]
    fn text_match_ignores_case() {
        let record = falcon_heavy();
        assert!(matches_search(&record, "HEAVY", Search::AllFields));
        assert!(matches_search(&record, "spacex", Search::AllFields));
        assert!(matches_search(
            &record,
            "united",
            Search::Field(FilterField::Country)
        ));
    }

    #[test]
    fn numbers_and_booleans_match_on_text_form() {
        let record = falcon_heavy();
        assert!(matches_search(&record, "1420788", Search::AllFields));
        assert!(matches_search(&record, "90000", Search::AllFields));
        assert!(matches_search(&record, "TRUE", Search::AllFields));
        assert!(!matches_search(&record, "false", Search::AllFields));
    }

    #[test]
    fn field_search_ignores_other_fields() {
        let record = falcon_heavy();
        assert!(!matches_search(
            &record,
            "spacex",
            Search::Field(FilterField::Name)
        ));
        assert!(matches_search(
            &record,
            "2018-02",
            Search::Field(FilterField::FirstFlight)
        ));
        assert!(matches_search(
            &record,
            "metric",
            Search::Field(FilterField::Description)
        ));
    }

    #[test]
    fn cross_field_search_covers_the_id() {
        let record = falcon_heavy();
        assert!(matches_search(&record, "db09d1ed", Search::AllFields));
    }

    #[test]
    fn disabled_search_matches_anything() {
        let record = falcon_heavy();
        assert!(matches_search(&record, "nothing like it", Search::Disabled));
    }
}
