//! Output formatting for CLI display.

use crate::model::{FilterField, Record, ResultView};

/// Format a record as a list card.
pub(super) fn format_card(record: &Record) -> String {
    format!(
        "Name: {}\nCountry: {}\nFirst Flight: {}\nDescription:\n{}",
        record.name, record.country, record.first_flight, record.description
    )
}

/// Format every field of a record for the detail view.
pub(super) fn format_detail(record: &Record) -> String {
    let active = match record.active {
        Some(true) => "True",
        Some(false) => "False",
        None => "Unknown",
    };

    let mut lines = vec![
        format!("Rocket ID: {}", record.id),
        format!("Active: {active}"),
        format!("Rocket Name: {}", record.name),
        format!("First Flight: {}", record.first_flight),
        format!("Country: {}", record.country),
        format!("Company: {}", record.company.as_deref().unwrap_or("Unknown")),
        format!(
            "Cost Per Launch: {}",
            optional(record.cost_per_launch, |c| format!("US${c}"))
        ),
        format!(
            "Success Rate: {}",
            optional(record.success_rate_pct, |p| format!("{p}%"))
        ),
        format!(
            "Mass: {}",
            optional(record.mass_kg(), |kg| format!("{kg} kilograms"))
        ),
        format!(
            "Height: {}",
            optional(record.height_meters(), |m| format!("{m} meters"))
        ),
        format!("Description: {}", record.description),
    ];

    if let Some(url) = &record.wikipedia_url {
        lines.push(format!("Wikipedia: {url}"));
    }

    lines.join("\n")
}

/// Page position, 1-based for display, with the `--page` values that
/// step backward and forward.
pub(super) fn format_footer<T>(
    view: &ResultView<'_, T>,
    filter: Option<FilterField>,
) -> String {
    let noun = if view.matched == 1 { "rocket" } else { "rockets" };
    let shown = view.current_page + 1;

    let mut summary = format!("{} {noun}", view.matched);
    if let Some(field) = filter {
        summary = format!("{summary}, searching {}", field.label());
    }

    let mut parts = vec![format!("Page {shown} of {} ({summary})", view.total_pages)];
    if view.has_previous_page() {
        parts.push(format!("previous: --page {}", shown - 1));
    }
    if view.has_next_page() {
        parts.push(format!("next: --page {}", shown + 1));
    }

    parts.join(" | ")
}

fn optional(value: Option<f64>, render: impl Fn(f64) -> String) -> String {
    value.map_or_else(|| "Unknown".to_string(), render)
}
