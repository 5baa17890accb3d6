//! Record types: one rocket as delivered by the GraphQL API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::FilterField;

/// A read-only catalog entry.
///
/// Field names follow the GraphQL response so records deserialize
/// straight out of `data.rockets`. Extended fields may be absent or null.
/// Only `id` is required; a missing or null text field reads as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub country: String,

    /// Date text such as `2006-03-24`. Compared lexically, never parsed.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_flight: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub cost_per_launch: Option<f64>,
    #[serde(default)]
    pub success_rate_pct: Option<f64>,
    #[serde(default)]
    pub mass: Option<Mass>,
    #[serde(default)]
    pub height: Option<Height>,

    #[serde(default, rename = "wikipedia")]
    pub wikipedia_url: Option<String>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Nested `mass { kg }` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mass {
    #[serde(default)]
    pub kg: Option<f64>,
}

/// Nested `height { meters }` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Height {
    #[serde(default)]
    pub meters: Option<f64>,
}

impl Record {
    /// Creates a record with only the core fields set.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        country: impl Into<String>,
        first_flight: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: country.into(),
            first_flight: first_flight.into(),
            description: description.into(),
            active: None,
            company: None,
            cost_per_launch: None,
            success_rate_pct: None,
            mass: None,
            height: None,
            wikipedia_url: None,
        }
    }

    pub fn mass_kg(&self) -> Option<f64> {
        self.mass.and_then(|m| m.kg)
    }

    pub fn height_meters(&self) -> Option<f64> {
        self.height.and_then(|h| h.meters)
    }
}

/// A single attribute value as seen by text search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Something the processor can search, filter, and sort.
///
/// Searchable attributes are declared up front rather than discovered
/// by walking the value at runtime. Nested attributes appear under a
/// dotted path (`mass.kg`).
pub trait Searchable {
    /// The value sorted on.
    fn sort_name(&self) -> &str;

    /// The value of a filterable field.
    fn filter_value(&self, field: FilterField) -> FieldValue<'_>;

    /// Every present attribute, in declaration order.
    fn search_fields(&self) -> Vec<(&'static str, FieldValue<'_>)>;
}

impl Searchable for Record {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn filter_value(&self, field: FilterField) -> FieldValue<'_> {
        match field {
            FilterField::Name => FieldValue::Text(&self.name),
            FilterField::Country => FieldValue::Text(&self.country),
            FilterField::FirstFlight => FieldValue::Text(&self.first_flight),
            FilterField::Description => FieldValue::Text(&self.description),
        }
    }

    fn search_fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        let mut fields = vec![
            ("id", FieldValue::Text(&self.id)),
            ("name", FieldValue::Text(&self.name)),
            ("country", FieldValue::Text(&self.country)),
            ("first_flight", FieldValue::Text(&self.first_flight)),
            ("description", FieldValue::Text(&self.description)),
        ];

        if let Some(active) = self.active {
            fields.push(("active", FieldValue::Bool(active)));
        }
        if let Some(company) = &self.company {
            fields.push(("company", FieldValue::Text(company)));
        }
        if let Some(cost) = self.cost_per_launch {
            fields.push(("cost_per_launch", FieldValue::Number(cost)));
        }
        if let Some(rate) = self.success_rate_pct {
            fields.push(("success_rate_pct", FieldValue::Number(rate)));
        }
        if let Some(kg) = self.mass_kg() {
            fields.push(("mass.kg", FieldValue::Number(kg)));
        }
        if let Some(meters) = self.height_meters() {
            fields.push(("height.meters", FieldValue::Number(meters)));
        }
        if let Some(url) = &self.wikipedia_url {
            fields.push(("wikipedia", FieldValue::Text(url)));
        }

        fields
    }
}
