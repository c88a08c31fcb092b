//! Integration tests for the full `read_and_validate` run
//!
//! These tests run the pipeline on fixture files and verify the cleaned CSV
//! and the validation log it leaves behind.

use census_clean::config::PipelineConfig;
use census_clean::error::CensusError;
use census_clean::pipeline::read_and_validate;
use std::path::{Path, PathBuf};

const FIXTURE: &str = "testdata/adult_sample.data";

fn config_in(dir: &Path, raw: impl Into<PathBuf>) -> PipelineConfig {
    PipelineConfig {
        log_path: dir.join("logs").join("validation_errors.log"),
        ..PipelineConfig::new(raw, dir.join("processed"))
    }
}

fn fixture_lines(indices: &[usize]) -> String {
    let text = std::fs::read_to_string(FIXTURE).expect("fixture should be readable");
    let lines: Vec<&str> = text.lines().collect();
    indices
        .iter()
        .map(|&i| format!("{}\n", lines[i]))
        .collect()
}

#[test]
fn test_fixture_is_cleaned() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(dir.path(), FIXTURE);

    let report = read_and_validate(&config)?;

    assert_eq!(report.rows_before, 9, "fixture has 9 records");
    assert_eq!(report.rows_after, 4, "only the 4 valid, distinct rows remain");
    assert_eq!(report.violations, 5);
    assert_eq!(report.rows_implicated, 5);
    assert_eq!(report.output_path, dir.path().join("processed/cleaned_data.csv"));

    let cleaned = std::fs::read_to_string(&report.output_path)?;
    let lines: Vec<&str> = cleaned.lines().collect();
    assert_eq!(
        lines[0],
        "age,workclass,fnlwgt,education,education-num,marital-status,occupation,\
         relationship,race,sex,capital-gain,capital-loss,hours-per-week,native-country,income"
    );
    assert_eq!(lines.len(), 5);
    assert!(lines[1].starts_with("39,State-gov,77516,"));
    assert!(lines[2].starts_with("50,Self-emp-not-inc,"));
    assert!(lines[3].starts_with("54,,180211,"), "missing markers become empty fields");
    assert!(lines[4].starts_with("37,Private,284582,"));
    assert!(!cleaned.contains("150,"));
    assert!(!cleaned.contains(">50K."));
    Ok(())
}

#[test]
fn test_fixture_log_records_every_violation() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(dir.path(), FIXTURE);
    read_and_validate(&config)?;

    let log = std::fs::read_to_string(&config.log_path)?;
    let (header, body) = log.split_once('\n').expect("log entry has a header line");
    assert!(header.ends_with(" - "));

    let json: serde_json::Value = serde_json::from_str(body)?;
    assert_eq!(json["schema"], "adult_income");
    assert_eq!(json["violation_count"], 5);
    assert_eq!(json["checks"]["duplicate_row"][0]["row"], 3);
    assert_eq!(json["checks"]["out_of_range"][0]["failure_case"], "150");
    assert_eq!(json["checks"]["empty_row"][0]["row"], 6);

    let not_in_set = json["checks"]["not_in_set"]
        .as_array()
        .expect("not_in_set group present");
    let cases: Vec<&str> = not_in_set
        .iter()
        .filter_map(|v| v["failure_case"].as_str())
        .collect();
    assert_eq!(cases, vec!["F", ">50K."]);
    Ok(())
}

#[test]
fn test_clean_input_leaves_empty_log() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("adult.data");
    std::fs::write(&raw, fixture_lines(&[0, 1, 2, 7]))?;

    let config = config_in(dir.path(), &raw);
    let report = read_and_validate(&config)?;

    assert!(report.is_clean());
    assert_eq!(report.rows_before, report.rows_after);
    assert!(config.log_path.exists(), "log is truncated even on clean runs");
    assert!(std::fs::read_to_string(&config.log_path)?.is_empty());
    Ok(())
}

#[test]
fn test_trailing_blank_line_is_not_a_record() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("adult.data");
    std::fs::write(&raw, fixture_lines(&[0, 1]) + "\n")?;

    let config = config_in(dir.path(), &raw);
    let report = read_and_validate(&config)?;

    assert_eq!(
        (report.rows_before, report.rows_after, report.violations),
        (2, 2, 0)
    );
    assert!(std::fs::read_to_string(&config.log_path)?.is_empty());
    Ok(())
}

#[test]
fn test_previous_log_is_truncated() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let config = config_in(dir.path(), FIXTURE);
    read_and_validate(&config)?;
    let first = std::fs::read_to_string(&config.log_path)?;

    read_and_validate(&config)?;
    let second = std::fs::read_to_string(&config.log_path)?;

    let entries = |text: &str| text.matches("\"schema\"").count();
    assert_eq!(entries(&first), 1);
    assert_eq!(entries(&second), 1);
    Ok(())
}

#[test]
fn test_wrong_extension_fails_fast() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let raw = dir.path().join("adult.txt");
    std::fs::copy(FIXTURE, &raw)?;

    let config = config_in(dir.path(), &raw);
    let err = read_and_validate(&config).unwrap_err();

    assert!(matches!(err, CensusError::FormatMismatch(_)));
    assert!(err.to_string().contains("adult.txt is not a DATA file"));
    assert!(!config.log_path.exists());
    Ok(())
}

#[test]
fn test_custom_schema_file() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let mut schema = census_clean::schema::TableSchema::adult_income();
    schema.columns[0] = census_clean::schema::ColumnRule::integer("age").between(0, 40);
    let schema_path = dir.path().join("schema.json");
    schema.to_file(&schema_path)?;

    let config = PipelineConfig {
        schema_path: Some(schema_path),
        ..config_in(dir.path(), FIXTURE)
    };
    let report = read_and_validate(&config)?;

    // rows aged 50 and 54 now fail as well
    assert_eq!(report.rows_after, 2);
    Ok(())
}
