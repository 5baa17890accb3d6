//! rocketdeck configuration.
//!
//! Describes the screen variant the processor runs as, and where the
//! catalog lives. Resolved through a chain:
//!
//! 1. `--config <path>`: explicit per-command override
//! 2. `ROCKETDECK_CONFIG` env var
//! 3. `~/.rocketdeck/config.toml`
//!
//! An explicit path (1 or 2) must exist. The home file is optional:
//! when it is missing, defaults apply.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ROCKETDECK_CONFIG";

/// rocketdeck configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Catalog file used when `--from` is not given.
    pub catalog: Option<PathBuf>,

    pub screen: ScreenConfig,
}

/// Which processing steps a screen variant enables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScreenConfig {
    pub search_mode: SearchMode,
    pub sort: bool,
    pub paginate: bool,
    pub page_size: NonZeroUsize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            search_mode: SearchMode::CrossField,
            sort: true,
            paginate: true,
            page_size: NonZeroUsize::MIN,
        }
    }
}

/// How a search term is applied when no filter field is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Match against every attribute.
    #[default]
    CrossField,

    /// Require a filter field before searching.
    FieldRestricted,
}

impl Config {
    /// Resolve and load the config.
    ///
    /// Returns defaults when no config file is found along the chain.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let from_env = env::var(CONFIG_ENV)
            .ok()
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self::resolve(explicit, from_env.as_deref(), Self::path().as_deref())
    }

    /// Walk the chain with each step's candidate path already looked up.
    fn resolve(
        explicit: Option<&Path>,
        from_env: Option<&Path>,
        home: Option<&Path>,
    ) -> Result<Self, String> {
        if let Some(path) = explicit.or(from_env) {
            return Self::load_from(path);
        }

        let Some(path) = home else {
            return Ok(Self::default());
        };

        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(format!("failed to read {}: {e}", path.display())),
        }
    }

    /// Load a config file that must exist.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Err(format!("no config file found at {}", path.display()));
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        Self::parse(&contents, path)
    }

    /// The default config file path: `~/.rocketdeck/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".rocketdeck").join("config.toml"))
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, String> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}
