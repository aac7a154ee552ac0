//! Two-tailed t and upper-tail F probabilities.
//!
//! The t routine sums the finite cos² series that exists for integer degrees
//! of freedom and never touches the incomplete beta function. The F routine
//! goes through [`regularized_beta`]. The two paths are kept separate so that
//! t-test and correlation p-values do not shift when the beta machinery
//! changes.

use std::f64::consts::FRAC_2_PI;

use crate::special::regularized_beta;

/// Two-tailed p-value of Student's t with `df` degrees of freedom.
///
/// With `theta = atan(t / sqrt(df))` and `a = cos²(theta) = df / (df + t²)`,
/// `P(|T| < t)` is a polynomial in `a` whose shape depends on the parity of
/// `df`. Each series term is derived from the previous one by its ratio.
pub fn t_distribution_p_value(t_stat: f64, df: usize) -> f64 {
    if df < 1 || t_stat.is_nan() {
        return 1.0;
    }

    let t = t_stat.abs();
    let nu = df as f64;
    let a = nu / (nu + t * t);
    let sin = (1.0 - a).sqrt();

    let mut term = 1.0;
    let mut series = 1.0;

    let central = if df % 2 == 0 {
        // 1 + a/2 + (1*3)/(2*4) a^2 + ... up to a^((df-2)/2)
        for i in (2..df).step_by(2) {
            term *= a * (i - 1) as f64 / i as f64;
            series += term;
        }
        sin * series
    } else {
        // 1 + (2/3) a + (2*4)/(3*5) a^2 + ... up to a^((df-3)/2)
        for i in (2..df.saturating_sub(1)).step_by(2) {
            term *= a * i as f64 / (i + 1) as f64;
            series += term;
        }
        let theta = (t / nu.sqrt()).atan();
        let tail = if df > 1 { sin * a.sqrt() * series } else { 0.0 };
        FRAC_2_PI * (theta + tail)
    };

    let upper = (1.0 - central) / 2.0;
    (2.0 * upper).clamp(0.0, 1.0)
}

/// Upper-tail p-value of the F distribution with `(df1, df2)` degrees of
/// freedom.
pub fn f_distribution_p_value(f: f64, df1: usize, df2: usize) -> f64 {
    if f.is_nan() || f <= 0.0 || df1 == 0 || df2 == 0 {
        return 1.0;
    }

    let d1 = df1 as f64;
    let d2 = df2 as f64;
    let x = d2 / (d2 + d1 * f);
    regularized_beta(x, d2 / 2.0, d1 / 2.0).clamp(0.0, 1.0)
}
