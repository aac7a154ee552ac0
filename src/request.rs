use std::fs;
use std::path::Path;

use serde::Deserialize;
use stats::Group;

use crate::error::{RequestError, Result};

/// A batch of analyses, as read from a JSON request file.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    pub analyses: Vec<Analysis>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Analysis {
    pub label: String,
    #[serde(flatten)]
    pub kind: AnalysisKind,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "test", rename_all = "snake_case")]
pub enum AnalysisKind {
    Describe { values: Vec<f64> },
    TTest { group_a: Group, group_b: Group },
    Anova { groups: Vec<Group> },
    Correlation { x: Vec<f64>, y: Vec<f64> },
    Regression { x: Vec<f64>, y: Vec<f64> },
}

pub fn parse_request(json: &str) -> Result<Request> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_request(path: &Path) -> Result<Request> {
    let content = fs::read_to_string(path).map_err(|source| RequestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_request(&content)
}

impl Request {
    /// Reject inputs the statistics cannot be asked about meaningfully.
    /// Short samples are fine; they produce neutral results.
    pub fn validate(&self) -> Result<()> {
        if self.analyses.is_empty() {
            return Err(RequestError::Empty);
        }
        self.analyses.iter().try_for_each(Analysis::validate)
    }
}

impl Analysis {
    pub fn validate(&self) -> Result<()> {
        let check = |field: &str, values: &[f64]| {
            if values.iter().all(|v| v.is_finite()) {
                Ok(())
            } else {
                Err(RequestError::NonFinite {
                    label: self.label.clone(),
                    field: field.to_string(),
                })
            }
        };

        match &self.kind {
            AnalysisKind::Describe { values } => check("values", values),
            AnalysisKind::TTest { group_a, group_b } => {
                check(group_a.name.as_str(), &group_a.values)?;
                check(group_b.name.as_str(), &group_b.values)
            }
            AnalysisKind::Anova { groups } => groups
                .iter()
                .try_for_each(|g| check(g.name.as_str(), &g.values)),
            AnalysisKind::Correlation { x, y } | AnalysisKind::Regression { x, y } => {
                if x.len() != y.len() {
                    return Err(RequestError::LengthMismatch {
                        label: self.label.clone(),
                        x_len: x.len(),
                        y_len: y.len(),
                    });
                }
                check("x", x)?;
                check("y", y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_test_kind() {
        let json = r#"{
            "analyses": [
                {"label": "d", "test": "describe", "values": [1, 2, 3]},
                {"label": "t", "test": "t_test",
                 "group_a": {"name": "NATO", "values": [1, 2]},
                 "group_b": {"name": "Pact", "values": [3, 4]}},
                {"label": "a", "test": "anova",
                 "groups": [{"name": "g1", "values": [1, 2]}, {"name": "g2", "values": []}]},
                {"label": "c", "test": "correlation", "x": [1, 2, 3], "y": [3, 2, 1]},
                {"label": "r", "test": "regression", "x": [1, 2, 3], "y": [2, 4, 6.5]}
            ]
        }"#;
        let req = parse_request(json).unwrap();
        assert_eq!(req.analyses.len(), 5);
        assert!(req.validate().is_ok());

        match &req.analyses[1].kind {
            AnalysisKind::TTest { group_a, group_b } => {
                assert_eq!(group_a.name, "NATO");
                assert_eq!(group_b.values, vec![3.0, 4.0]);
            }
            other => panic!("expected t_test, got {other:?}"),
        }
        match &req.analyses[2].kind {
            AnalysisKind::Anova { groups } => assert!(groups[1].values.is_empty()),
            other => panic!("expected anova, got {other:?}"),
        }
    }

    #[test]
    fn unknown_test_is_rejected() {
        let json = r#"{"analyses": [{"label": "x", "test": "chi_square", "values": []}]}"#;
        assert!(matches!(parse_request(json), Err(RequestError::Json(_))));
    }

    #[test]
    fn empty_request_fails_validation() {
        let req = parse_request(r#"{"analyses": []}"#).unwrap();
        assert!(matches!(req.validate(), Err(RequestError::Empty)));
    }

    #[test]
    fn mismatched_pairs_fail_validation() {
        let json = r#"{"analyses": [
            {"label": "spend", "test": "regression", "x": [1, 2, 3], "y": [1, 2]}
        ]}"#;
        let err = parse_request(json).unwrap().validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "analysis 'spend': x has 3 values but y has 2"
        );
    }

    #[test]
    fn non_finite_values_fail_validation() {
        let analysis = Analysis {
            label: "groups".to_string(),
            kind: AnalysisKind::Anova {
                groups: vec![
                    Group::new("ok", vec![1.0, 2.0]),
                    Group::new("bad", vec![1.0, f64::NAN]),
                ],
            },
        };
        let err = analysis.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "analysis 'groups': bad contains a non-finite value"
        );
    }

    #[test]
    fn load_reports_missing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.json");
        let err = load_request(&missing).unwrap_err();
        assert!(matches!(err, RequestError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn load_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("request.json");
        std::fs::write(
            &path,
            r#"{"analyses": [{"label": "d", "test": "describe", "values": [4, 5]}]}"#,
        )
        .unwrap();
        let req = load_request(&path).unwrap();
        assert_eq!(req.analyses[0].label, "d");
    }
}
