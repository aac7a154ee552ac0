use serde::Serialize;
use stats::{AnovaResult, CorrelationResult, RegressionResult, Summary, TTestResult};

use crate::batch::{Evaluated, Outcome};

fn format_p(p: f64) -> String {
    if p < 0.001 {
        "< 0.001".to_string()
    } else {
        format!("{p:.4}")
    }
}

fn format_stat(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.4}")
    } else {
        "inf".to_string()
    }
}

fn verdict(significant: bool) -> &'static str {
    if significant {
        "significant"
    } else {
        "not significant"
    }
}

pub fn print_results(results: &[Evaluated]) {
    for (i, r) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", render(r));
    }

    let tests = results
        .iter()
        .filter(|r| !matches!(r.outcome, Outcome::Describe(_)))
        .count();
    let significant = results.iter().filter(|r| r.outcome.is_significant()).count();
    if tests > 0 {
        println!();
        println!("{significant} of {tests} tests significant at p < {}", stats::SIGNIFICANCE_LEVEL);
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    results: &'a [Evaluated],
}

/// Pretty JSON document `{"results": [...]}`.
pub fn render_json(results: &[Evaluated]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport { results })
}

pub fn print_results_json(results: &[Evaluated]) -> serde_json::Result<()> {
    let json = render_json(results)?;
    println!("{json}");
    Ok(())
}

/// Text block for one evaluated analysis, ending in a newline.
pub fn render(r: &Evaluated) -> String {
    match &r.outcome {
        Outcome::Describe(s) => render_summary(&r.label, s),
        Outcome::TTest(t) => render_t_test(&r.label, t),
        Outcome::Anova(a) => render_anova(&r.label, a),
        Outcome::Correlation(c) => render_correlation(&r.label, c),
        Outcome::Regression(g) => render_regression(&r.label, g),
    }
}

fn render_summary(label: &str, s: &Summary) -> String {
    let mut out = format!("{label}: descriptive statistics\n");
    out.push_str(&format!("  n      {}\n", s.n));
    out.push_str(&format!("  mean   {:.4}\n", s.mean));
    out.push_str(&format!("  sd     {:.4}\n", s.sd));
    out.push_str(&format!("  min    {:.4}\n", s.min));
    out.push_str(&format!("  max    {:.4}\n", s.max));
    out.push_str(&format!("  range  {:.4}\n", s.range));
    out
}

fn render_t_test(label: &str, t: &TTestResult) -> String {
    let mut out = format!("{label}: independent-samples t-test\n");
    out.push_str(&format!(
        "  group 1  mean {:.4}  sd {:.4}  n {}\n",
        t.mean1, t.sd1, t.n1
    ));
    out.push_str(&format!(
        "  group 2  mean {:.4}  sd {:.4}  n {}\n",
        t.mean2, t.sd2, t.n2
    ));
    out.push_str(&format!(
        "  t({}) = {}, p {}, d = {:.3}  ({})\n",
        t.degrees_of_freedom,
        format_stat(t.t_statistic),
        p_clause(t.p_value),
        t.cohens_d,
        verdict(t.significant)
    ));
    out
}

fn render_anova(label: &str, a: &AnovaResult) -> String {
    let mut out = format!("{label}: one-way ANOVA\n");
    for g in &a.group_means {
        out.push_str(&format!(
            "  {:<20} mean {:.4}  sd {:.4}  n {}\n",
            g.group, g.mean, g.sd, g.n
        ));
    }
    out.push_str(&format!(
        "  SS between {:.4}  within {:.4}  total {:.4}\n",
        a.between_groups_ss, a.within_groups_ss, a.total_ss
    ));
    out.push_str(&format!(
        "  F({}, {}) = {}, p {}, eta² = {:.3}  ({})\n",
        a.between_groups_df,
        a.within_groups_df,
        format_stat(a.f_statistic),
        p_clause(a.p_value),
        a.eta_squared,
        verdict(a.significant)
    ));
    out
}

fn render_correlation(label: &str, c: &CorrelationResult) -> String {
    format!(
        "{label}: Pearson correlation\n  r = {:.4}, n = {}, p {}  ({}, {})\n",
        c.coefficient,
        c.n,
        p_clause(c.p_value),
        c.interpretation,
        verdict(c.significant)
    )
}

fn render_regression(label: &str, g: &RegressionResult) -> String {
    let mut out = format!("{label}: simple linear regression\n");
    out.push_str(&format!(
        "  y = {:.4} x + {:.4}  (n = {})\n",
        g.slope, g.intercept, g.n
    ));
    out.push_str(&format!(
        "  R² = {:.4}, SE = {:.4}, F(1, {}) = {}, p {}  ({})\n",
        g.r_squared,
        g.standard_error,
        g.n.saturating_sub(2),
        format_stat(g.f_statistic),
        p_clause(g.p_value),
        verdict(g.significant)
    ));
    out
}

fn p_clause(p: f64) -> String {
    let p = format_p(p);
    if p.starts_with('<') { p } else { format!("= {p}") }
}
