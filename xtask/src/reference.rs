use serde::Deserialize;
use stats::{f_distribution_p_value, t_distribution_p_value};
use std::path::Path;

pub const DEFAULT_TOLERANCE: f64 = 1e-3;

#[derive(Deserialize)]
struct ReferenceTable {
    #[serde(default)]
    t: Vec<TCritical>,
    #[serde(default)]
    f: Vec<FCritical>,
}

/// Two-tailed critical value of Student's t.
#[derive(Deserialize)]
struct TCritical {
    df: usize,
    t: f64,
    p: f64,
}

/// Upper-tail critical value of F.
#[derive(Deserialize)]
struct FCritical {
    df1: usize,
    df2: usize,
    f: f64,
    p: f64,
}

#[derive(Debug)]
pub struct CheckResult {
    pub name: String,
    pub expected: f64,
    pub actual: f64,
    pub verdict: Verdict,
}

#[derive(Debug)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_fail(&self) -> bool {
        matches!(self, Verdict::Fail)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Pass => write!(f, "pass"),
            Verdict::Fail => write!(f, "FAIL"),
        }
    }
}

/// Evaluate every row of the table at `path` against the tail-probability
/// routines.
pub fn check(path: &Path, tolerance: f64) -> Result<Vec<CheckResult>, String> {
    let table = load_table(path)?;

    let t_rows = table.t.iter().map(|row| {
        (
            format!("t(df={}) = {}", row.df, row.t),
            row.p,
            t_distribution_p_value(row.t, row.df),
        )
    });
    let f_rows = table.f.iter().map(|row| {
        (
            format!("F({}, {}) = {}", row.df1, row.df2, row.f),
            row.p,
            f_distribution_p_value(row.f, row.df1, row.df2),
        )
    });

    Ok(t_rows
        .chain(f_rows)
        .map(|(name, expected, actual)| {
            let verdict = if (actual - expected).abs() <= tolerance {
                Verdict::Pass
            } else {
                Verdict::Fail
            };
            CheckResult {
                name,
                expected,
                actual,
                verdict,
            }
        })
        .collect())
}

/// Print a results table to stdout.
pub fn print_results(results: &[CheckResult]) {
    if results.is_empty() {
        return;
    }
    println!(
        "{:<30} {:>10} {:>10} {:>10}  {}",
        "Critical value", "Expected", "Actual", "Delta", "Verdict"
    );
    println!("{}", "-".repeat(72));
    for r in results {
        println!(
            "{:<30} {:>10.4} {:>10.6} {:>+10.2e}  {}",
            r.name,
            r.expected,
            r.actual,
            r.actual - r.expected,
            r.verdict,
        );
    }
}

fn load_table(path: &Path) -> Result<ReferenceTable, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let table: ReferenceTable =
        toml::from_str(&content).map_err(|e| format!("failed to parse {}: {e}", path.display()))?;

    if table.t.is_empty() && table.f.is_empty() {
        return Err(format!("{} has no [[t]] or [[f]] rows", path.display()));
    }
    Ok(table)
}
