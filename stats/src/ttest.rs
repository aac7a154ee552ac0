use serde::Serialize;

use crate::descriptive::{mean, sample_std_dev};
use crate::distribution::t_distribution_p_value;
use crate::is_significant;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TTestResult {
    pub t_statistic: f64,
    pub degrees_of_freedom: usize,
    pub p_value: f64,
    pub mean1: f64,
    pub mean2: f64,
    pub sd1: f64,
    pub sd2: f64,
    pub n1: usize,
    pub n2: usize,
    pub cohens_d: f64,
    pub significant: bool,
}

/// Independent two-sample t-test with pooled variance.
///
/// Samples with fewer than two values, or with zero pooled variance, give a
/// neutral result (t = 0, p = 1) that still carries the means and counts.
pub fn t_test(sample1: &[f64], sample2: &[f64]) -> TTestResult {
    let n1 = sample1.len();
    let n2 = sample2.len();
    let mean1 = mean(sample1);
    let mean2 = mean(sample2);
    let sd1 = sample_std_dev(sample1);
    let sd2 = sample_std_dev(sample2);
    let df = (n1 + n2).saturating_sub(2);

    let mut result = TTestResult {
        t_statistic: 0.0,
        degrees_of_freedom: df,
        p_value: 1.0,
        mean1,
        mean2,
        sd1,
        sd2,
        n1,
        n2,
        cohens_d: 0.0,
        significant: false,
    };

    if n1 < 2 || n2 < 2 {
        return result;
    }

    let (f1, f2) = (n1 as f64, n2 as f64);
    let pooled_var = ((f1 - 1.0) * sd1 * sd1 + (f2 - 1.0) * sd2 * sd2) / df as f64;
    let pooled_sd = pooled_var.sqrt();
    let se = pooled_sd * (1.0 / f1 + 1.0 / f2).sqrt();

    // Both samples constant
    if se <= 0.0 {
        return result;
    }

    let t = (mean1 - mean2) / se;
    let p_value = t_distribution_p_value(t, df);

    result.t_statistic = t;
    result.p_value = p_value;
    result.cohens_d = (mean1 - mean2).abs() / pooled_sd;
    result.significant = is_significant(p_value);
    result
}
