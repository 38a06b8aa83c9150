use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use rock_compare::error::Stage;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("rock_compare_main_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn config_for(args: &[&str]) -> RunConfig {
    let mut argv = vec!["rock-compare"];
    argv.extend_from_slice(args);
    RunConfig::from(Cli::try_parse_from(argv).unwrap())
}

#[test]
fn test_parse_args_defaults() {
    let config = config_for(&["a.csv", "b.csv"]);
    assert_eq!(config.analysis, "x");
    assert_eq!(config.summary, "criticality");
    assert_eq!(config.weights, PathBuf::from("weights.csv"));
    assert_eq!(config.profile.criticality_threshold, 5.0);
    assert_eq!(config.format, ReportFormat::Text);
}

#[test]
fn test_parse_args_overrides() {
    let config = config_for(&[
        "a.csv",
        "b.csv",
        "--analysis",
        "y",
        "--summary",
        "d",
        "--weights",
        "w.csv",
        "--format",
        "json",
    ]);
    assert_eq!(config.analysis, "y");
    assert_eq!(config.summary, "d");
    assert_eq!(config.weights, PathBuf::from("w.csv"));
    assert_eq!(config.format, ReportFormat::Json);
}

#[test]
fn test_parse_args_missing_file() {
    assert!(Cli::try_parse_from(["rock-compare", "a.csv"]).is_err());
}

#[test]
fn test_run_prints_files_and_result() {
    let dir = make_temp_dir();
    let a = dir.join("data1.csv");
    let b = dir.join("data2.csv");
    let w = dir.join("weights.csv");
    write_file(&a, "1.0,2.0\n");
    write_file(&b, "1.0,3.0\n");
    write_file(&w, "1.0,1.0\n");

    let mut config = config_for(&["x", "y", "--summary", "d"]);
    config.files = [a.clone(), b.clone()];
    config.weights = w;

    let out = run(config).unwrap();
    assert!(out.starts_with(&format!("files: {}, {}\n", a.display(), b.display())));
    assert!(out.contains("d-index: 1\n"));
    assert!(out.ends_with("result: 1\n"));
}

#[test]
fn test_run_reports_load_stage() {
    let dir = make_temp_dir();
    let mut config = config_for(&["x", "y"]);
    config.files = [dir.join("nope1.csv"), dir.join("nope2.csv")];
    config.weights = dir.join("nope_weights.csv");

    let err = run(config).unwrap_err();
    assert_eq!(err.stage(), Stage::Load);
}

#[test]
fn test_run_rejects_unknown_selector() {
    let config = config_for(&["a.csv", "b.csv", "--analysis", "z"]);
    let err = run(config).unwrap_err();
    assert_eq!(err.stage(), Stage::Analysis);
}
