use rayon::prelude::*;
use serde::Serialize;
use stats::{AnovaResult, CorrelationResult, RegressionResult, Summary, TTestResult};

use crate::request::{Analysis, AnalysisKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum Outcome {
    Describe(Summary),
    TTest(TTestResult),
    Anova(AnovaResult),
    Correlation(CorrelationResult),
    Regression(RegressionResult),
}

impl Outcome {
    /// Descriptive summaries carry no test and are never significant.
    pub fn is_significant(&self) -> bool {
        match self {
            Outcome::Describe(_) => false,
            Outcome::TTest(r) => r.significant,
            Outcome::Anova(r) => r.significant,
            Outcome::Correlation(r) => r.significant,
            Outcome::Regression(r) => r.significant,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Evaluated {
    pub label: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

pub fn evaluate(kind: &AnalysisKind) -> Outcome {
    match kind {
        AnalysisKind::Describe { values } => Outcome::Describe(stats::summarize(values)),
        AnalysisKind::TTest { group_a, group_b } => {
            Outcome::TTest(stats::t_test(&group_a.values, &group_b.values))
        }
        AnalysisKind::Anova { groups } => Outcome::Anova(stats::anova(groups)),
        AnalysisKind::Correlation { x, y } => Outcome::Correlation(stats::correlation(x, y)),
        AnalysisKind::Regression { x, y } => Outcome::Regression(stats::regression(x, y)),
    }
}

/// Evaluate all analyses in parallel. Output order matches input order.
pub fn run_all(analyses: &[Analysis]) -> Vec<Evaluated> {
    analyses
        .par_iter()
        .map(|a| Evaluated {
            label: a.label.clone(),
            outcome: evaluate(&a.kind),
        })
        .collect()
}
