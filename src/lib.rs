//! zipf-analyzer - word frequencies and Zipf's law conformance
//!
//! Reads a text file, counts word frequencies, prints a ranked table,
//! renders a log-log rank/frequency chart and fits a log-log regression
//! to check how closely the corpus follows Zipf's law.
//!
//! # Architecture
//!
//! - [`text`] - Tokenization, frequency counting, wiki dump extraction
//! - [`ranking`] - Deterministic ranking of frequencies
//! - [`report`] - Console table output
//! - [`chart`] - Rank/frequency chart rendering
//! - [`analysis`] - Linear regression and the Zipf report
//! - [`pipeline`] - End-to-end run sequencing
//! - [`config`] - Configuration management
//! - [`error`] - Unified error type
//!
//! # Example
//!
//! ```no_run
//! use zipf_analyzer::config::AnalyzerConfig;
//! use zipf_analyzer::pipeline::{Pipeline, RunRequest};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = AnalyzerConfig::from_env()?;
//!     let summary = Pipeline::new(config).run(&RunRequest::new("corpus.txt", "."))?;
//!     println!("slope = {:.4}", summary.analysis.regression.slope);
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod chart;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod text;
pub mod utils;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analysis::{LinearFit, OrdinaryLeastSquares, RegressionResult, ZipfAnalysis, ZipfAnalyzer};
    pub use crate::chart::{ChartRenderer, Dimensions, PlottersRenderer};
    pub use crate::config::AnalyzerConfig;
    pub use crate::error::{Error, ErrorCategory, Result};
    pub use crate::pipeline::{Pipeline, RunRequest, RunState, RunSummary};
    pub use crate::ranking::{rank, RankedEntry};
    pub use crate::text::{count_word_frequencies, FrequencyMap};
}
