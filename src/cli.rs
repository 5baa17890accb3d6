//! CLI interface for rocketdeck.
//!
//! Each subcommand is non-interactive: arguments in, structured output out.
//! Records come from a saved GraphQL response (`--from <file>`, or `-` for
//! stdin). When `--from` is omitted, the configured `catalog` is used.

mod format;

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;

use crate::catalog::{Catalog, CatalogSource, DEFAULT_ENDPOINT, LoadState, ROCKETS_QUERY};
use crate::config::{Config, ScreenConfig, SearchMode};
use crate::model::{FilterField, QueryParameters, Record, ResultView, SortOrder};
use crate::navigation::{self, DetailRoute};
use crate::notice::{Notifier, StderrNotifier};
use crate::processor::ResultSetProcessor;

use format::{format_card, format_detail, format_footer};

/// rocketdeck: browse the rocket catalog.
#[derive(Debug, Parser)]
#[command(name = "rocketdeck", after_long_help = WORKFLOW_HELP)]
pub struct Cli {
    /// Config file. Overrides `ROCKETDECK_CONFIG` and `~/.rocketdeck/config.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const WORKFLOW_HELP: &str = r#"Workflow:
  1. rocketdeck query --json > request.json
  2. curl -s -H 'content-type: application/json' -d @request.json <endpoint> > rockets.json
  3. rocketdeck list --from rockets.json --search falcon --sort asc
  4. rocketdeck show --from rockets.json 5e9d0d95eda69955f709d1eb

Field-restricted search:
  rocketdeck list --from rockets.json --search-mode field-restricted --field country --search usa"#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List rockets, one page at a time.
    ///
    /// Filters, then sorts, then pages. Notices such as
    /// "No results found" are printed to stderr.
    List(ListArgs),

    /// Show every detail of one rocket.
    Show {
        /// Response document to read (`-` for stdin).
        #[arg(long)]
        from: Option<CatalogSource>,

        /// Rocket id.
        id: String,

        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the GraphQL query that fetches the catalog.
    Query {
        /// Print a JSON request body instead of the bare query.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Response document to read (`-` for stdin).
    #[arg(long)]
    pub from: Option<CatalogSource>,

    /// Free-text search term.
    #[arg(long)]
    pub search: Option<String>,

    /// Restrict the search to one field.
    #[arg(long, value_enum)]
    pub field: Option<FieldArg>,

    /// Sort by name.
    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Page to show, starting at 1. Past the end shows the last page.
    #[arg(long, default_value = "1")]
    pub page: NonZeroUsize,

    /// Records per page. Defaults to the configured page size.
    #[arg(long)]
    pub page_size: Option<NonZeroUsize>,

    /// Show every match on one page.
    #[arg(long)]
    pub all: bool,

    /// How a search without `--field` is handled.
    #[arg(long, value_enum)]
    pub search_mode: Option<SearchModeArg>,

    /// Print the page as JSON.
    #[arg(long)]
    pub json: bool,
}

impl ListArgs {
    /// The configured screen with this command's overrides applied.
    fn screen(&self, base: &ScreenConfig) -> ScreenConfig {
        let mut screen = base.clone();
        if let Some(size) = self.page_size {
            screen.page_size = size;
        }
        if self.all {
            screen.paginate = false;
        }
        if let Some(mode) = self.search_mode {
            screen.search_mode = mode.to_domain();
        }
        screen
    }

    /// Query state as the flags describe it. `--page` is 1-based.
    fn params(&self) -> QueryParameters {
        let mut params = QueryParameters::default();
        if let Some(field) = self.field {
            params.select_filter(field.to_domain());
        }
        if let Some(sort) = self.sort {
            params.set_sort_order(sort.to_domain());
        }
        if let Some(term) = &self.search {
            params.set_search_term(term.as_str());
        }
        params.page = self.page.get() - 1;
        params
    }
}

/// CLI-facing filter field, mapped to the domain `FilterField`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldArg {
    Name,
    Country,
    FirstFlight,
    Description,
}

impl FieldArg {
    fn to_domain(self) -> FilterField {
        match self {
            Self::Name => FilterField::Name,
            Self::Country => FilterField::Country,
            Self::FirstFlight => FilterField::FirstFlight,
            Self::Description => FilterField::Description,
        }
    }
}

/// CLI-facing sort direction, mapped to the domain `SortOrder`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// A to Z.
    Asc,
    /// Z to A.
    Desc,
}

impl SortArg {
    fn to_domain(self) -> SortOrder {
        match self {
            Self::Asc => SortOrder::Ascending,
            Self::Desc => SortOrder::Descending,
        }
    }
}

/// CLI-facing search mode, mapped to the domain `SearchMode`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SearchModeArg {
    /// Search every field when none is selected.
    CrossField,
    /// Refuse to search until a field is selected.
    FieldRestricted,
}

impl SearchModeArg {
    fn to_domain(self) -> SearchMode {
        match self {
            Self::CrossField => SearchMode::CrossField,
            Self::FieldRestricted => SearchMode::FieldRestricted,
        }
    }
}

/// Run a parsed command, returning an error message on failure.
pub fn run(cli: Cli, config: &Config) -> Result<(), String> {
    match cli.command {
        Command::List(args) => {
            let processor = ResultSetProcessor::new(args.screen(&config.screen));
            let params = args.params();
            let catalog = load_catalog(config, args.from)?;
            cmd_list(&catalog, &processor, &params, args.json)
        }
        Command::Show { from, id, json } => {
            let catalog = load_catalog(config, from)?;
            cmd_show(&catalog, &id, json)
        }
        Command::Query { json } => {
            cmd_query(json);
            Ok(())
        }
    }
}

/// Load the catalog from `--from` or the configured path.
fn load_catalog(config: &Config, from: Option<CatalogSource>) -> Result<Catalog, String> {
    let source = from
        .or_else(|| config.catalog.clone().map(CatalogSource::File))
        .ok_or("specify --from <file> or set `catalog` in the config")?;

    match LoadState::from(Catalog::load(&source)) {
        LoadState::Loaded(catalog) => Ok(catalog),
        state => Err(state.status_line().unwrap_or_default()),
    }
}

/// Compute the page to show and hand its notices to `notifier`.
fn list_view<'a>(
    catalog: &'a Catalog,
    processor: &ResultSetProcessor,
    params: &QueryParameters,
    notifier: &dyn Notifier,
) -> ResultView<'a, Record> {
    let view = processor.compute_view(catalog.records(), params);
    for notice in &view.notices {
        notifier.notify(*notice);
    }
    view
}

fn cmd_list(
    catalog: &Catalog,
    processor: &ResultSetProcessor,
    params: &QueryParameters,
    json: bool,
) -> Result<(), String> {
    let view = list_view(catalog, processor, params, &StderrNotifier);

    if json {
        let json = serde_json::to_string_pretty(&view)
            .map_err(|e| format!("failed to serialize view: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    for (i, record) in view.records.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format_card(record));
    }
    if !view.is_empty() {
        println!();
    }
    println!("{}", format_footer(&view, params.filter_field));

    Ok(())
}

/// A record with its navigation extras, for `show --json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Detail<'a> {
    #[serde(flatten)]
    record: &'a Record,
    route: Option<DetailRoute>,
    image_url: Option<&'static str>,
}

fn cmd_show(catalog: &Catalog, id: &str, json: bool) -> Result<(), String> {
    let record = catalog
        .find(id)
        .ok_or_else(|| format!("no rocket with id '{id}'"))?;

    let detail = Detail {
        record,
        route: navigation::detail_route(id),
        image_url: navigation::image_url(id),
    };

    if json {
        let json = serde_json::to_string_pretty(&detail)
            .map_err(|e| format!("failed to serialize rocket: {e}"))?;
        println!("{json}");
        return Ok(());
    }

    println!("{}", format_detail(record));
    if let Some(route) = detail.route {
        println!("Detail Screen: {}", route.title());
    }
    if let Some(url) = detail.image_url {
        println!("Image: {url}");
    }

    Ok(())
}

fn cmd_query(json: bool) {
    eprintln!("Endpoint: {DEFAULT_ENDPOINT}");

    if json {
        let body = serde_json::json!({ "query": ROCKETS_QUERY });
        println!("{body}");
    } else {
        println!("{ROCKETS_QUERY}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::fs;

    use tempfile::TempDir;

    use crate::notice::Notice;

    fn list_args(args: &[&str]) -> ListArgs {
        let argv = ["rocketdeck", "list"].iter().chain(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Command::List(args) => args,
            other => panic!("expected list, got {other:?}"),
        }
    }

    const ROCKETS: &str = r#"{
        "data": {
            "rockets": [
                { "id": "a", "name": "Starship", "country": "United States",
                  "first_flight": "2021-12-01", "description": "Fully reusable." },
                { "id": "b", "name": "Falcon 1", "country": "Republic of the Marshall Islands",
                  "first_flight": "2006-03-24", "description": "Expendable." },
                { "id": "c", "name": "Falcon 9", "country": "United States",
                  "first_flight": "2010-06-04", "description": "Partially reusable." }
            ]
        }
    }"#;

    fn write_catalog(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("rockets.json");
        fs::write(&path, ROCKETS).unwrap();
        path
    }

    struct Recorder(RefCell<Vec<Notice>>);

    impl Notifier for Recorder {
        fn notify(&self, notice: Notice) {
            self.0.borrow_mut().push(notice);
        }
    }

    #[test]
    fn parses_list_flags() {
        let args = list_args(&[
            "--from",
            "-",
            "--search",
            "falcon",
            "--field",
            "first-flight",
            "--sort",
            "desc",
            "--page",
            "2",
            "--all",
        ]);

        assert_eq!(args.from, Some(CatalogSource::Stdin));
        assert_eq!(args.search.as_deref(), Some("falcon"));
        assert!(args.all);

        let params = args.params();
        assert_eq!(params.search_term, "falcon");
        assert_eq!(params.filter_field, Some(FilterField::FirstFlight));
        assert_eq!(params.sort_order, SortOrder::Descending);
        assert_eq!(params.page, 1);
    }

    #[test]
    fn first_page_is_index_zero() {
        let params = list_args(&[]).params();
        assert_eq!(params, QueryParameters::default());
    }

    #[test]
    fn no_flags_keep_the_configured_screen() {
        let base = ScreenConfig {
            search_mode: SearchMode::FieldRestricted,
            sort: false,
            paginate: true,
            page_size: NonZeroUsize::new(4).unwrap(),
        };
        assert_eq!(list_args(&[]).screen(&base), base);
    }

    #[test]
    fn flags_override_the_configured_screen() {
        let args = list_args(&[
            "--page-size",
            "3",
            "--all",
            "--search-mode",
            "field-restricted",
        ]);

        let screen = args.screen(&ScreenConfig::default());
        assert_eq!(screen.page_size.get(), 3);
        assert!(!screen.paginate);
        assert_eq!(screen.search_mode, SearchMode::FieldRestricted);
        assert!(screen.sort);
    }

    #[test]
    fn page_past_the_end_shows_the_last_page() {
        let dir = TempDir::new().unwrap();
        let path = write_catalog(&dir);
        let args = list_args(&[
            "--from",
            path.to_str().unwrap(),
            "--sort",
            "asc",
            "--page",
            "9",
            "--page-size",
            "2",
        ]);

        let config = Config::default();
        let processor = ResultSetProcessor::new(args.screen(&config.screen));
        let params = args.params();
        let catalog = load_catalog(&config, args.from).unwrap();
        let recorder = Recorder(RefCell::new(Vec::new()));
        let view = list_view(&catalog, &processor, &params, &recorder);

        assert_eq!(view.total_pages, 2);
        assert_eq!(view.current_page, 1);
        let names: Vec<&str> = view.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Starship"]);
        assert_eq!(
            format_footer(&view, None),
            "Page 2 of 2 (3 rockets) | previous: --page 1"
        );
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn field_restricted_search_without_a_field_notifies() {
        let catalog = Catalog::parse(ROCKETS).unwrap();
        let args = list_args(&[
            "--search-mode",
            "field-restricted",
            "--search",
            "falcon",
            "--all",
        ]);
        let processor = ResultSetProcessor::new(args.screen(&ScreenConfig::default()));
        let recorder = Recorder(RefCell::new(Vec::new()));

        let view = list_view(&catalog, &processor, &args.params(), &recorder);

        assert_eq!(*recorder.0.borrow(), [Notice::SelectFilterFirst]);
        assert_eq!(view.matched, 3);
    }

    #[test]
    fn empty_search_result_notifies() {
        let catalog = Catalog::parse(ROCKETS).unwrap();
        let args = list_args(&["--field", "country", "--search", "germany"]);
        let processor = ResultSetProcessor::new(args.screen(&ScreenConfig::default()));
        let recorder = Recorder(RefCell::new(Vec::new()));

        let view = list_view(&catalog, &processor, &args.params(), &recorder);

        assert_eq!(*recorder.0.borrow(), [Notice::NoResults]);
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 1);
    }

    #[test]
    fn list_runs_against_a_configured_catalog() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            catalog: Some(write_catalog(&dir)),
            ..Config::default()
        };
        let cli =
            Cli::try_parse_from(["rocketdeck", "list", "--search", "falcon", "--json"]).unwrap();

        assert_eq!(run(cli, &config), Ok(()));
    }

    #[test]
    fn page_zero_is_rejected() {
        let result = Cli::try_parse_from(["rocketdeck", "list", "--page", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["rocketdeck", "query", "--config", "alt.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("alt.toml")));
    }

    #[test]
    fn list_without_a_source_is_an_error() {
        let err = load_catalog(&Config::default(), None).unwrap_err();
        assert!(err.contains("--from"));
    }

    #[test]
    fn unreadable_source_shows_the_error_state() {
        let source = CatalogSource::File(PathBuf::from("/nonexistent/rockets.json"));
        let err = load_catalog(&Config::default(), Some(source)).unwrap_err();
        assert!(err.starts_with("Error: There is a problem retrieving data"));
    }

    #[test]
    fn show_unknown_id_is_an_error() {
        let catalog = Catalog::new(vec![Record::new("a", "Falcon 1", "USA", "", "")]);
        let err = cmd_show(&catalog, "zzz", false).unwrap_err();
        assert_eq!(err, "no rocket with id 'zzz'");
    }
}
