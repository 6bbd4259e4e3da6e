//! End-to-end pipeline tests with the real chart renderer

mod common;

use std::fs;
use tempfile::TempDir;
use zipf_analyzer::analysis::REPORT_FILE_NAME;
use zipf_analyzer::chart::{ChartError, CHART_FILE_NAME};
use zipf_analyzer::config::AnalyzerConfig;
use zipf_analyzer::error::{Error, ErrorCategory};
use zipf_analyzer::pipeline::{Pipeline, RunRequest, RunState};

use common::{power_law_text, write_file, SAMPLE_TEXT};

fn small_chart_config() -> AnalyzerConfig {
    let mut config = AnalyzerConfig::default();
    config.chart.width = 400;
    config.chart.height = 300;
    config
}

#[test]
fn test_sample_run_writes_outputs() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "sample.txt", SAMPLE_TEXT);

    let mut pipeline = Pipeline::new(small_chart_config());
    let summary = pipeline.run(&RunRequest::new(&input, dir.path())).unwrap();

    assert_eq!(pipeline.state(), RunState::Completed);
    assert_eq!(summary.unique_words, 9);
    assert_eq!(summary.total_tokens, 16);

    let chart = fs::read(dir.path().join(CHART_FILE_NAME)).unwrap();
    assert_eq!(&chart[..4], b"\x89PNG");

    let report = fs::read_to_string(dir.path().join(REPORT_FILE_NAME)).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Zipf's Law Analysis");
    assert_eq!(lines[1], "==================");
    assert_eq!(lines[2], "- Number of unique words analyzed: 9");
    assert!(lines[3].starts_with("- Slope (should be close to -1 for perfect Zipf's law): -"));
    assert!(lines[4].starts_with("- Intercept: "));
    assert!(lines[5].starts_with("- R² (goodness of fit, 1.0 is perfect): "));
    assert_eq!(lines[6], "");
    assert_eq!(lines[7], "Interpretation:");
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_power_law_corpus() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "zipf.txt", &power_law_text());

    let summary = Pipeline::new(small_chart_config())
        .run(&RunRequest::new(&input, dir.path()))
        .unwrap();

    let regression = summary.analysis.regression;
    assert_eq!(summary.unique_words, 12);
    assert!((regression.slope + 1.0).abs() < 1e-9, "slope {}", regression.slope);
    assert!((regression.r_squared - 1.0).abs() < 1e-9, "r² {}", regression.r_squared);

    let report = fs::read_to_string(&summary.report_path).unwrap();
    assert!(report.contains("): -1.0000\n"));
    assert!(report.contains("R² (goodness of fit, 1.0 is perfect): 1.0000\n"));
}

#[test]
fn test_max_words_limits_regression() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "sample.txt", SAMPLE_TEXT);

    let mut config = small_chart_config();
    config.zipf.max_words = 4;

    let summary = Pipeline::new(config)
        .run(&RunRequest::new(&input, dir.path()))
        .unwrap();
    assert_eq!(summary.analysis.words_analyzed, 4);
    assert_eq!(summary.analysis.regression.n, 4);
}

#[test]
fn test_report_overwrites_previous_run() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join(REPORT_FILE_NAME);
    fs::write(&report_path, "old report\n".repeat(100)).unwrap();

    let input = write_file(dir.path(), "sample.txt", SAMPLE_TEXT);
    Pipeline::new(small_chart_config())
        .run(&RunRequest::new(&input, dir.path()))
        .unwrap();

    let report = fs::read_to_string(&report_path).unwrap();
    assert!(!report.contains("old report"));
}

#[test]
fn test_missing_output_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "sample.txt", SAMPLE_TEXT);
    let output_dir = dir.path().join("does-not-exist");

    let mut pipeline = Pipeline::new(small_chart_config());
    let err = pipeline.run(&RunRequest::new(&input, &output_dir)).unwrap_err();

    assert!(matches!(err, Error::Chart(_)));
    assert_eq!(err.category(), ErrorCategory::Output);
    assert_eq!(pipeline.state(), RunState::Failed);
    assert!(!output_dir.exists());
}

#[test]
fn test_chart_target_not_writable() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "sample.txt", SAMPLE_TEXT);
    let output_dir = dir.path().join("out");
    fs::create_dir_all(output_dir.join(CHART_FILE_NAME)).unwrap();

    let mut pipeline = Pipeline::new(small_chart_config());
    let err = pipeline.run(&RunRequest::new(&input, &output_dir)).unwrap_err();

    assert!(matches!(err, Error::Chart(ChartError::Io { .. })), "{err:?}");
    assert_eq!(err.exit_code(), 1);
    assert_eq!(pipeline.state(), RunState::Failed);
    assert!(!output_dir.join(REPORT_FILE_NAME).exists());
}

#[test]
fn test_report_target_not_writable() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "sample.txt", SAMPLE_TEXT);
    let output_dir = dir.path().join("out");
    fs::create_dir_all(output_dir.join(REPORT_FILE_NAME)).unwrap();

    let mut pipeline = Pipeline::new(small_chart_config());
    let err = pipeline.run(&RunRequest::new(&input, &output_dir)).unwrap_err();

    assert!(matches!(err, Error::Output { .. }), "{err:?}");
    assert_eq!(err.category(), ErrorCategory::Output);
    assert_eq!(pipeline.state(), RunState::Failed);
    assert!(output_dir.join(CHART_FILE_NAME).is_file());
}

#[test]
fn test_missing_input_creates_nothing() {
    let dir = TempDir::new().unwrap();
    let output_dir = dir.path().join("out");
    fs::create_dir(&output_dir).unwrap();

    let err = Pipeline::new(small_chart_config())
        .run(&RunRequest::new(dir.path().join("missing.txt"), &output_dir))
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Input);
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[test]
fn test_empty_input_still_reports() {
    let dir = TempDir::new().unwrap();
    let input = write_file(dir.path(), "empty.txt", "");

    let summary = Pipeline::new(small_chart_config())
        .run(&RunRequest::new(&input, dir.path()))
        .unwrap();

    assert_eq!(summary.unique_words, 0);
    assert!(summary.chart_path.exists());
    let report = fs::read_to_string(&summary.report_path).unwrap();
    assert!(report.contains("- Number of unique words analyzed: 0\n"));
    assert!(report.contains("- Intercept: NaN\n"));
}
