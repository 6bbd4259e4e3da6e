//! Zipf's law conformance analysis
//!
//! Fits `ln(frequency)` against `ln(rank)` for the top-ranked words. A
//! slope near -1 with R² near 1 means the corpus follows Zipf's law.

use std::fmt;
use std::fs;
use std::path::Path;

use super::regression::{LinearFit, OrdinaryLeastSquares, RegressionResult};
use crate::config::ZipfConfig;
use crate::error::{Error, Result};
use crate::ranking::RankedEntry;

/// Report file name inside the output directory
pub const REPORT_FILE_NAME: &str = "zipf_analysis.txt";

/// Result of a Zipf analysis, renderable as the text report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZipfAnalysis {
    /// Number of top-ranked words considered
    pub words_analyzed: usize,
    pub regression: RegressionResult,
}

impl ZipfAnalysis {
    /// Render the human-readable report
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Write the report to `path`, replacing any existing file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render()).map_err(|e| Error::output(path, e))?;
        tracing::debug!(path = %path.display(), "Saved Zipf analysis report");
        Ok(())
    }
}

impl fmt::Display for ZipfAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Zipf's Law Analysis")?;
        writeln!(f, "==================")?;
        writeln!(f, "- Number of unique words analyzed: {}", self.words_analyzed)?;
        writeln!(
            f,
            "- Slope (should be close to -1 for perfect Zipf's law): {:.4}",
            self.regression.slope
        )?;
        writeln!(f, "- Intercept: {:.4}", self.regression.intercept)?;
        writeln!(
            f,
            "- R² (goodness of fit, 1.0 is perfect): {:.4}",
            self.regression.r_squared
        )?;
        writeln!(f)?;
        writeln!(f, "Interpretation:")?;
        writeln!(
            f,
            "- A slope close to -1 suggests the distribution follows Zipf's law."
        )?;
        write!(
            f,
            "- The higher the R² value (closer to 1.0), the better the fit to a power law."
        )
    }
}

/// Log-log regression over the top-ranked words
pub struct ZipfAnalyzer<F = OrdinaryLeastSquares> {
    config: ZipfConfig,
    fit: F,
}

impl ZipfAnalyzer {
    /// Create an analyzer using ordinary least squares
    pub fn new(config: ZipfConfig) -> Self {
        Self::with_fit(config, OrdinaryLeastSquares)
    }
}

impl<F: LinearFit> ZipfAnalyzer<F> {
    /// Create an analyzer with a custom fitting strategy
    pub fn with_fit(config: ZipfConfig, fit: F) -> Self {
        Self { config, fit }
    }

    /// Fit the top `max_words` entries of `ranked`
    ///
    /// Entries with a zero count are skipped since their logarithm is
    /// undefined; they still count towards `words_analyzed`.
    pub fn analyze(&self, ranked: &[RankedEntry]) -> ZipfAnalysis {
        let top = &ranked[..ranked.len().min(self.config.max_words)];

        let (log_rank, log_freq): (Vec<f64>, Vec<f64>) = top
            .iter()
            .filter(|entry| entry.count > 0)
            .map(|entry| ((entry.rank as f64).ln(), (entry.count as f64).ln()))
            .unzip();

        let regression = self.fit.fit(&log_rank, &log_freq);
        tracing::info!(
            words = top.len(),
            slope = regression.slope,
            intercept = regression.intercept,
            r_squared = regression.r_squared,
            "Fitted Zipf regression"
        );

        ZipfAnalysis {
            words_analyzed: top.len(),
            regression,
        }
    }
}
