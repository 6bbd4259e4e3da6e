//! Unified error handling for the zipf-analyzer crate
//!
//! Every failure in a run is one of a handful of kinds, and all of them
//! end the run: the tool is a single-shot batch job with no retry.
//!
//! - [`ErrorCategory`] - Classification used for messages and exit codes
//! - [`Error`] - Unified error enum wrapping the module-specific errors

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use crate::chart::ChartError;
pub use crate::config::ConfigError;

/// Classification of errors for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Missing or malformed command-line arguments
    Usage,
    /// Input file missing, unreadable or not UTF-8
    Input,
    /// Output location missing or unwritable
    Output,
    /// Invalid configuration values or files
    Config,
}

impl ErrorCategory {
    /// Short human-readable label for the category
    pub fn description(&self) -> &'static str {
        match self {
            Self::Usage => "usage error",
            Self::Input => "input error",
            Self::Output => "output error",
            Self::Config => "configuration error",
        }
    }

    /// Process exit status for this category
    ///
    /// Every failure exits with status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Unified error type for the zipf-analyzer crate
#[derive(Error, Debug)]
pub enum Error {
    /// The input file could not be read
    #[error("failed to read input file {}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An output file could not be written
    #[error("failed to write output file {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Chart rendering failed
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),

    /// Configuration could not be loaded or is invalid
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    /// Create an input error for `path`
    pub fn input(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Input {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an output error for `path`
    pub fn output(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Output {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Get the error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Input { .. } => ErrorCategory::Input,
            Self::Output { .. } | Self::Chart(_) => ErrorCategory::Output,
            Self::Config(_) => ErrorCategory::Config,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
