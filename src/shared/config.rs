//! Application configuration. Input paths, catalog override, output settings.

use crate::adapters::ui::render::OutputFormat;
use crate::usecases::DEFAULT_TOP_GIFTS;
use serde::Deserialize;
use tracing::warn;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Scores file to analyze non-interactively. Read from GIFTS_SCORES_PATH.
    #[serde(default)]
    pub scores_path: Option<String>,

    /// Versioned JSON ministry catalog replacing the built-in one. Read from GIFTS_CATALOG_PATH.
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// How many top gifts the analyses consider (default 3). Read from GIFTS_TOP_GIFTS_COUNT.
    /// Kept raw so a bad value only resets this key, not the whole config.
    #[serde(default)]
    pub top_gifts_count: Option<String>,

    /// `text` or `json` (default text). Read from GIFTS_OUTPUT_FORMAT.
    #[serde(default)]
    pub output_format: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        // GIFTS_CONFIG points at an optional config file (toml/json/yaml by extension)
        let file = std::env::var("GIFTS_CONFIG").ok();
        Self::from_sources(file.as_deref(), config::Environment::with_prefix("GIFTS"))
    }

    /// Build from an optional config file plus an environment source (env wins).
    pub fn from_sources(
        file: Option<&str>,
        env: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut c = config::Config::builder();
        if let Some(path) = file {
            c = c.add_source(config::File::with_name(path));
        }
        c.add_source(env).build()?.try_deserialize()
    }

    /// Returns the top-gifts count. Defaults to DEFAULT_TOP_GIFTS if unset, zero or not a number.
    pub fn top_gifts_count_or_default(&self) -> usize {
        let Some(raw) = self.top_gifts_count.as_deref() else {
            return DEFAULT_TOP_GIFTS;
        };
        match raw.trim().parse::<usize>() {
            Ok(0) => DEFAULT_TOP_GIFTS,
            Ok(n) => n,
            Err(e) => {
                warn!(value = raw, error = %e, "invalid top_gifts_count, using default");
                DEFAULT_TOP_GIFTS
            }
        }
    }

    /// Returns the output format. Unknown values fall back to text with a warning.
    pub fn output_format_or_default(&self) -> OutputFormat {
        match self.output_format.as_deref() {
            None => OutputFormat::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "falling back to text output");
                OutputFormat::default()
            }),
        }
    }
}
