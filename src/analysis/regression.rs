//! Simple linear regression
//!
//! [`LinearFit`] is the seam between the Zipf analyzer and whatever does the
//! numeric work; [`OrdinaryLeastSquares`] is the default implementation,
//! built on `statrs` summary statistics.

use statrs::statistics::Statistics;

/// Fitted line `y = slope * x + intercept`
///
/// Values are `NaN` when the fit is undefined (fewer than two points, or
/// no spread in `x`). `r_squared` is also `NaN` when `y` has no spread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    /// Number of points used in the fit
    pub n: usize,
}

impl RegressionResult {
    fn undefined(n: usize) -> Self {
        Self {
            slope: f64::NAN,
            intercept: f64::NAN,
            r_squared: f64::NAN,
            n,
        }
    }

    /// Check if slope and intercept are finite numbers
    pub fn is_defined(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// Fits a straight line through paired observations
pub trait LinearFit {
    /// Fit `y` against `x`; both slices have the same length
    fn fit(&self, x: &[f64], y: &[f64]) -> RegressionResult;
}

/// Ordinary least squares fit
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinaryLeastSquares;

impl LinearFit for OrdinaryLeastSquares {
    fn fit(&self, x: &[f64], y: &[f64]) -> RegressionResult {
        debug_assert_eq!(x.len(), y.len());
        let n = x.len().min(y.len());
        let (x, y) = (&x[..n], &y[..n]);

        if n < 2 {
            return RegressionResult::undefined(n);
        }

        let var_x = x.variance();
        if var_x.is_nan() || var_x <= 0.0 {
            return RegressionResult::undefined(n);
        }

        let var_y = y.variance();
        let cov = x.covariance(y);

        let slope = cov / var_x;
        let intercept = y.mean() - slope * x.mean();
        let r_squared = cov * cov / (var_x * var_y);
        // rounding can push a perfect fit just past 1
        let r_squared = if r_squared > 1.0 { 1.0 } else { r_squared };

        RegressionResult {
            slope,
            intercept,
            r_squared,
            n,
        }
    }
}
