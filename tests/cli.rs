use std::path::Path;
use std::process::{Command, Output};

fn hypotest(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hypotest"))
        .args(args)
        .output()
        .expect("failed to run hypotest")
}

fn write_request(dir: &Path, body: &str) -> String {
    let path = dir.join("request.json");
    std::fs::write(&path, body).unwrap();
    path.to_string_lossy().into_owned()
}

const SCENARIO: &str = r#"{
    "analyses": [
        {"label": "deterrence", "test": "t_test",
         "group_a": {"name": "A", "values": [10, 12, 14, 12, 13]},
         "group_b": {"name": "B", "values": [20, 22, 19, 21, 23]}},
        {"label": "by side", "test": "anova", "groups": [
            {"name": "A", "values": [10, 12, 14, 12, 13]},
            {"name": "B", "values": [20, 22, 19, 21, 23]}
        ]},
        {"label": "sparse", "test": "correlation", "x": [1], "y": [2]}
    ]
}"#;

#[test]
fn run_prints_text_report() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_request(tmp.path(), SCENARIO);

    let out = hypotest(&["run", &path]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("deterrence: independent-samples t-test"));
    assert!(stdout.contains("by side: one-way ANOVA"));
    assert!(stdout.contains("Insufficient data"));
    assert!(stdout.contains("2 of 3 tests significant"));

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Evaluated 3 analyses"));
}

#[test]
fn run_json_is_machine_readable() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_request(tmp.path(), SCENARIO);

    let out = hypotest(&["run", &path, "--json"]);
    assert!(out.status.success());

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);

    let t = &results[0];
    assert_eq!(t["label"], "deterrence");
    assert_eq!(t["test"], "t_test");
    assert_eq!(t["degreesOfFreedom"], 8);
    assert_eq!(t["significant"], true);
    assert!(t["pValue"].as_f64().unwrap() < 0.001);
    assert!(t["cohensD"].as_f64().unwrap() > 2.0);

    // two-group ANOVA is the squared t-test
    let f = results[1]["fStatistic"].as_f64().unwrap();
    let t_stat = t["tStatistic"].as_f64().unwrap();
    assert!((f - t_stat * t_stat).abs() < 1e-6);

    assert_eq!(results[2]["interpretation"], "Insufficient data");
    assert_eq!(results[2]["significant"], false);
}

#[test]
fn run_rejects_mismatched_pairs() {
    let tmp = tempfile::tempdir().unwrap();
    let path = write_request(
        tmp.path(),
        r#"{"analyses": [{"label": "trend", "test": "regression", "x": [1, 2, 3], "y": [1]}]}"#,
    );

    let out = hypotest(&["run", &path]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("error: analysis 'trend': x has 3 values but y has 1"));
}

#[test]
fn run_reports_missing_file() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = tmp.path().join("missing.json");

    let out = hypotest(&["run", &missing.to_string_lossy()]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed to read"));
}

#[test]
fn describe_accepts_negative_values() {
    let out = hypotest(&["describe", "--json", "2", "-4", "6"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let summary = &json["results"][0];
    assert_eq!(summary["test"], "describe");
    assert_eq!(summary["n"], 3);
    assert_eq!(summary["min"], -4.0);
    assert_eq!(summary["range"], 10.0);
}

#[test]
fn describe_rejects_non_finite_values() {
    let out = hypotest(&["describe", "--json", "1", "NaN", "inf"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(
        stderr.contains("error: analysis 'values': values contains a non-finite value"),
        "stderr: {stderr}"
    );
}
