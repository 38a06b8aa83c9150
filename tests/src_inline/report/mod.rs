use std::path::Path;

use super::*;
use crate::model::{SampleMatrix, WeightVector};

fn sample_report() -> ComparisonReport {
    let pair = SamplePair::new(
        SampleMatrix::from_rows(vec![vec![1.0, 2.0], vec![0.0, 0.0]]).unwrap(),
        SampleMatrix::from_rows(vec![vec![1.0, 3.0], vec![0.0, 9.0]]).unwrap(),
    );
    let weights = WeightVector::new(vec![1.0, 1.0]);
    let analyzer = Analyzer::from_selectors("x", "criticality").unwrap();
    let outcome = analyzer.run(&pair, &weights).unwrap();
    ComparisonReport::new(
        [Path::new("data1.csv"), Path::new("data2.csv")],
        Path::new("weights.csv"),
        &analyzer,
        &pair,
        outcome,
    )
}

#[test]
fn test_text_report() {
    let out = render(&sample_report(), ReportFormat::Text).unwrap();
    assert_eq!(
        out,
        "files: data1.csv, data2.csv\ncriticality: 1 results above 5\nresult: 1\n"
    );
}

#[test]
fn test_json_report() {
    let out = render(&sample_report(), ReportFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["analysis"], "x");
    assert_eq!(value["summary"], "criticality");
    assert_eq!(value["n_samples"], 2);
    assert_eq!(value["n_variables"], 2);
    assert_eq!(value["result"], 1);
    assert_eq!(value["discrepancy"][1], 9.0);
    assert_eq!(value["files"][0], "data1.csv");
}
