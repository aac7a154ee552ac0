use serde::{Deserialize, Serialize};

use crate::descriptive::{mean, sample_std_dev};
use crate::distribution::f_distribution_p_value;
use crate::is_significant;

/// A named sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub values: Vec<f64>,
}

impl Group {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// Per-group descriptives reported alongside the F-test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMean {
    pub group: String,
    pub mean: f64,
    pub sd: f64,
    pub n: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub p_value: f64,
    pub between_groups_df: usize,
    pub within_groups_df: usize,
    pub between_groups_ss: f64,
    pub within_groups_ss: f64,
    pub total_ss: f64,
    pub eta_squared: f64,
    pub significant: bool,
    pub group_means: Vec<GroupMean>,
}

/// Minimum group size that takes part in the F-test.
const MIN_GROUP_SIZE: usize = 2;

/// One-way ANOVA across `groups`.
///
/// Groups with fewer than two values are left out of the test but still
/// listed in `group_means`. With fewer than two usable groups the result is
/// neutral (F = 0, p = 1).
pub fn anova(groups: &[Group]) -> AnovaResult {
    let group_means: Vec<GroupMean> = groups
        .iter()
        .map(|g| GroupMean {
            group: g.name.clone(),
            mean: mean(&g.values),
            sd: sample_std_dev(&g.values),
            n: g.values.len(),
        })
        .collect();

    let valid: Vec<&[f64]> = groups
        .iter()
        .map(|g| g.values.as_slice())
        .filter(|v| v.len() >= MIN_GROUP_SIZE)
        .collect();

    let mut result = AnovaResult {
        f_statistic: 0.0,
        p_value: 1.0,
        between_groups_df: 0,
        within_groups_df: 0,
        between_groups_ss: 0.0,
        within_groups_ss: 0.0,
        total_ss: 0.0,
        eta_squared: 0.0,
        significant: false,
        group_means,
    };

    if valid.len() < 2 {
        return result;
    }

    let k = valid.len();
    let total_n: usize = valid.iter().map(|v| v.len()).sum();
    let grand_mean = valid.iter().flat_map(|v| v.iter()).sum::<f64>() / total_n as f64;

    let mut between_ss = 0.0;
    let mut within_ss = 0.0;
    for values in &valid {
        let m = mean(values);
        between_ss += values.len() as f64 * (m - grand_mean).powi(2);
        within_ss += values.iter().map(|x| (x - m).powi(2)).sum::<f64>();
    }
    let total_ss = between_ss + within_ss;

    let between_df = k - 1;
    let within_df = total_n - k;

    result.between_groups_df = between_df;
    result.within_groups_df = within_df;
    result.between_groups_ss = between_ss;
    result.within_groups_ss = within_ss;
    result.total_ss = total_ss;
    if total_ss > 0.0 {
        result.eta_squared = between_ss / total_ss;
    }

    // Every group constant: the ratio is undefined
    if within_ss <= 0.0 {
        return result;
    }

    let f = (between_ss / between_df as f64) / (within_ss / within_df as f64);
    let p_value = f_distribution_p_value(f, between_df, within_df);

    result.f_statistic = f;
    result.p_value = p_value;
    result.significant = is_significant(p_value);
    result
}
