use serde::Serialize;

use crate::descriptive::mean;
use crate::distribution::f_distribution_p_value;
use crate::is_significant;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub f_statistic: f64,
    pub p_value: f64,
    pub standard_error: f64,
    pub n: usize,
    pub significant: bool,
}

impl RegressionResult {
    /// Point on the fitted line.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares fit of `y = slope * x + intercept`.
///
/// Needs at least three pairs and a non-constant `x`; otherwise everything
/// but `n` is zero and `p = 1`. A constant `y` fits a flat line with no
/// explained variance and is not significant.
pub fn regression(x: &[f64], y: &[f64]) -> RegressionResult {
    let n = x.len().min(y.len());
    let mut result = RegressionResult {
        slope: 0.0,
        intercept: 0.0,
        r_squared: 0.0,
        f_statistic: 0.0,
        p_value: 1.0,
        standard_error: 0.0,
        n,
        significant: false,
    };

    if n < 3 {
        return result;
    }

    let (x, y) = (&x[..n], &y[..n]);
    let x_mean = mean(x);
    let y_mean = mean(y);

    let sxy: f64 = x.iter().zip(y).map(|(xi, yi)| (xi - x_mean) * (yi - y_mean)).sum();
    let sxx: f64 = x.iter().map(|xi| (xi - x_mean).powi(2)).sum();
    if sxx <= 0.0 {
        return result;
    }

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    result.slope = slope;
    result.intercept = intercept;

    let sst: f64 = y.iter().map(|yi| (yi - y_mean).powi(2)).sum();
    let sse: f64 = x
        .iter()
        .zip(y)
        .map(|(xi, yi)| (yi - (slope * xi + intercept)).powi(2))
        .sum();

    let df = n - 2;
    let mse = sse / df as f64;
    result.standard_error = mse.sqrt();

    if sst <= 0.0 {
        return result;
    }

    let msr = sst - sse;
    // A perfect fit leaves mse at zero and F unbounded
    let f = msr / mse;
    let p_value = f_distribution_p_value(f, 1, df);

    result.r_squared = 1.0 - sse / sst;
    result.f_statistic = f;
    result.p_value = p_value;
    result.significant = is_significant(p_value);
    result
}
