//! The catalog: rocket records delivered by the GraphQL API.
//!
//! Fetching is left to whatever HTTP client the user prefers. This module
//! owns the query document and turns the response body into records:
//!
//! ```text
//! curl -s -H 'content-type: application/json' \
//!      -d "$(rocketdeck query --json)" <endpoint> > rockets.json
//! rocketdeck list --from rockets.json
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::{fs, str::FromStr};

use serde::Deserialize;

use crate::model::Record;

/// Public GraphQL endpoint serving the rocket catalog.
pub const DEFAULT_ENDPOINT: &str = "https://main--spacex-l4uc6p.apollographos.net/graphql";

/// The query sent to [`DEFAULT_ENDPOINT`].
pub const ROCKETS_QUERY: &str = "query Rockets {
  rockets {
    id
    active
    name
    country
    company
    cost_per_launch
    success_rate_pct
    first_flight
    mass {
      kg
    }
    height {
      meters
    }
    description
    wikipedia
  }
}";

/// Errors that can occur while loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("GraphQL error: {}", .0.join("; "))]
    Graphql(Vec<String>),

    #[error("response has no rockets")]
    MissingData,
}

pub type Result<T> = core::result::Result<T, CatalogError>;

/// Where to read a response document from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    File(PathBuf),
    Stdin,
}

impl FromStr for CatalogSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(if s == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(s))
        })
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
        }
    }
}

#[derive(Deserialize)]
struct Response {
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Deserialize)]
struct ResponseData {
    rockets: Option<Vec<Record>>,
}

#[derive(Deserialize)]
struct ResponseError {
    message: String,
}

/// Records from one successful fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a GraphQL response body.
    ///
    /// Any entry in `errors` fails the whole response, even when partial
    /// data came back alongside it.
    pub fn parse(body: &str) -> Result<Self> {
        let response: Response = serde_json::from_str(body)?;

        if !response.errors.is_empty() {
            let messages = response.errors.into_iter().map(|e| e.message).collect();
            return Err(CatalogError::Graphql(messages));
        }

        let records = response
            .data
            .and_then(|d| d.rockets)
            .ok_or(CatalogError::MissingData)?;

        Ok(Self { records })
    }

    /// Read and parse a response document.
    pub fn load(source: &CatalogSource) -> Result<Self> {
        let body = match source {
            CatalogSource::File(path) => fs::read_to_string(path)?,
            CatalogSource::Stdin => io::read_to_string(io::stdin().lock())?,
        };
        let catalog = Self::parse(&body)?;
        tracing::info!(%source, records = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by id.
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}

/// Where a fetch stands. Records are only processed once loaded.
#[derive(Debug)]
pub enum LoadState {
    Loading,
    Failed(CatalogError),
    Loaded(Catalog),
}

impl LoadState {
    /// The catalog, if loading succeeded.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            Self::Loading | Self::Failed(_) => None,
        }
    }

    /// What a screen shows instead of records.
    pub fn status_line(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Loading...".to_string()),
            Self::Failed(e) => Some(format!(
                "Error: There is a problem retrieving data ({e})"
            )),
            Self::Loaded(_) => None,
        }
    }
}

impl From<Result<Catalog>> for LoadState {
    fn from(result: Result<Catalog>) -> Self {
        match result {
            Ok(catalog) => Self::Loaded(catalog),
            Err(e) => Self::Failed(e),
        }
    }
}
