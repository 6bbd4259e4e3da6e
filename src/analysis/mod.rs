//! Statistical analysis of ranked word frequencies

pub mod regression;
pub mod zipf;

pub use regression::{LinearFit, OrdinaryLeastSquares, RegressionResult};
pub use zipf::{ZipfAnalysis, ZipfAnalyzer, REPORT_FILE_NAME};
