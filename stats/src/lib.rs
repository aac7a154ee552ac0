//! Descriptive statistics and classical hypothesis tests: pooled t-test,
//! one-way ANOVA, Pearson correlation and simple linear regression.
//!
//! Every p-value is computed here from first principles. Degenerate input
//! (too few values, zero variance) never fails; it yields a neutral result
//! with `p_value = 1.0` and `significant = false`.

pub mod anova;
pub mod correlation;
pub mod descriptive;
pub mod distribution;
pub mod regression;
pub mod special;
pub mod ttest;

pub use anova::{AnovaResult, Group, GroupMean, anova};
pub use correlation::{CorrelationResult, Direction, Interpretation, Strength, correlation};
pub use descriptive::{
    Summary, max, mean, min, range, sample_std_dev, sample_variance, summarize,
};
pub use distribution::{f_distribution_p_value, t_distribution_p_value};
pub use regression::{RegressionResult, regression};
pub use ttest::{TTestResult, t_test};

/// Two-tailed significance threshold.
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

pub(crate) fn is_significant(p_value: f64) -> bool {
    p_value < SIGNIFICANCE_LEVEL
}
