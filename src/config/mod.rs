//! Configuration management for zipf-analyzer
//!
//! Values come from, in increasing precedence: built-in defaults, an
//! optional TOML file, `ZIPF_*` environment variables, and command-line
//! flags (applied by the binary). Each component receives only its own
//! section, so components can be exercised with arbitrary parameters.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse TOML config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Environment variable holds an unparsable value
    #[error("invalid value {value:?} for environment variable {var}")]
    Env { var: &'static str, value: String },

    /// A value is out of range
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Console table configuration
    pub report: ReportConfig,

    /// Chart configuration
    pub chart: ChartConfig,

    /// Regression configuration
    pub zipf: ZipfConfig,
}

/// Console table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Number of top words printed
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top_n: 50 }
    }
}

/// Chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Number of top-ranked words plotted
    pub top_m: usize,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// TTF/OTF font used for titles and labels (system fonts are searched when unset)
    pub font_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            top_m: 100,
            width: 1200,
            height: 800,
            font_path: None,
        }
    }
}

/// Regression configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZipfConfig {
    /// Maximum number of top-ranked words fed into the fit
    pub max_words: usize,
}

impl Default for ZipfConfig {
    fn default() -> Self {
        Self { max_words: 1000 }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(var) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Env { var, value }),
        None => Ok(None),
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file
    ///
    /// Missing sections and keys fall back to their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults overridden by `ZIPF_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env()
    }

    /// Apply `ZIPF_*` environment variable overrides
    pub fn with_env(self) -> Result<Self, ConfigError> {
        self.with_env_lookup(|var| std::env::var(var).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn with_env_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(top_n) = parse_var(&lookup, "ZIPF_TOP_N")? {
            self.report.top_n = top_n;
        }
        if let Some(top_m) = parse_var(&lookup, "ZIPF_CHART_WORDS")? {
            self.chart.top_m = top_m;
        }
        if let Some(width) = parse_var(&lookup, "ZIPF_CHART_WIDTH")? {
            self.chart.width = width;
        }
        if let Some(height) = parse_var(&lookup, "ZIPF_CHART_HEIGHT")? {
            self.chart.height = height;
        }
        if let Some(max_words) = parse_var(&lookup, "ZIPF_MAX_WORDS")? {
            self.zipf.max_words = max_words;
        }
        if let Some(font) = lookup("ZIPF_CHART_FONT") {
            self.chart.font_path = Some(PathBuf::from(font));
        }
        Ok(self)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("report.top_n", self.report.top_n as u64),
            ("chart.top_m", self.chart.top_m as u64),
            ("chart.width", u64::from(self.chart.width)),
            ("chart.height", u64::from(self.chart.height)),
            ("zipf.max_words", self.zipf.max_words as u64),
        ];

        for (field, value) in positive {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than 0".to_string(),
                });
            }
        }

        Ok(())
    }
}
