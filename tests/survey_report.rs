//! Integration tests for survey dataset loading and report statistics.

use aquameter::survey::{load_samples, SurveyReport};
use aquameter::{QualityClass, StandardsCatalog};
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

const DATASET: &str = indoc! {r#"
    [
      {
        "station": "TS-001",
        "water_body": "River Musi",
        "readings": {"pH": 7.0, "DO": 6.0, "BOD": 0.5, "COD": 1.0, "TotalColiform": 5, "TDS": 300}
      },
      {
        "station": "TS-002",
        "water_body": "River Musi",
        "readings": {"pH": 7.2, "DO": 6.5, "BOD": 2.0, "COD": 8.0, "TotalColiform": 20, "TDS": 280}
      },
      {
        "station": "TS-003",
        "water_body": "Hussain Sagar",
        "readings": {"pH": 5.0, "DO": 2.0, "BOD": 15.0, "COD": 40.0, "TotalColiform": 500, "TDS": 900}
      },
      {
        "station": "TS-004",
        "water_body": "Hussain Sagar",
        "readings": {"pH": "BDL", "DO": "NIL", "BOD": ""}
      }
    ]
"#};

fn write_dataset(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join("samples.json");
    fs::write(&path, contents).expect("Failed to write dataset");
    (dir, path)
}

#[test]
fn dataset_loads_from_disk() {
    let (_dir, path) = write_dataset(DATASET);
    let samples = load_samples(&path).expect("dataset should load");

    assert_eq!(samples.len(), 4);
    assert_eq!(samples[0].station.as_deref(), Some("TS-001"));
    assert_eq!(samples[2].water_body.as_deref(), Some("Hussain Sagar"));
}

#[test]
fn missing_file_is_a_read_error() {
    let (_dir, path) = write_dataset(DATASET);
    let missing = path.with_file_name("nope.json");
    let err = load_samples(&missing).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let (_dir, path) = write_dataset("{ not json ]");
    let err = load_samples(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn report_statistics_cover_the_dataset() {
    let (_dir, path) = write_dataset(DATASET);
    let samples = load_samples(&path).unwrap();
    let report = SurveyReport::from_samples(&samples, &StandardsCatalog::who_bis());

    assert_eq!(report.sample_count, 4);
    // The sentinel-only sample has no usable readings at all.
    assert_eq!(report.evaluated_count, 3);
    assert_eq!(report.insufficient_count, 1);

    assert_eq!(report.class_counts.get("Safe/Potable"), Some(&1));
    assert_eq!(report.class_counts.get("Polluted"), Some(&1));
    assert_eq!(report.class_counts.get("Highly Polluted"), Some(&1));
    assert_eq!(report.class_counts.get("Insufficient Data"), Some(&1));
    assert_eq!(report.class_percentage(QualityClass::SafePotable), 25.0);
}

#[test]
fn report_water_body_averages_are_grouped() {
    let (_dir, path) = write_dataset(DATASET);
    let samples = load_samples(&path).unwrap();
    let report = SurveyReport::from_samples(&samples, &StandardsCatalog::who_bis());

    // Two Musi samples with defined scores (93.58 and 66.84).
    let musi = report.water_bodies.get("River Musi").unwrap();
    assert_eq!(musi.samples, 2);
    assert!((musi.average_wqi.value() - 80.2125).abs() < 1e-2);

    // Only one Hussain Sagar sample produced a score; the sentinel-only one
    // is excluded from the average.
    let sagar = report.water_bodies.get("Hussain Sagar").unwrap();
    assert_eq!(sagar.samples, 1);
    assert!((sagar.average_wqi.value() - 25.0794).abs() < 1e-2);
}

#[test]
fn report_histogram_partitions_defined_scores() {
    let (_dir, path) = write_dataset(DATASET);
    let samples = load_samples(&path).unwrap();
    let report = SurveyReport::from_samples(&samples, &StandardsCatalog::who_bis());

    let total: usize = report.histogram.iter().map(|b| b.count).sum();
    assert_eq!(total, report.evaluated_count);

    // 93.58 -> 90-100, 66.84 -> 60-70, 25.08 -> 20-30
    let bucket = |range: &str| {
        report
            .histogram
            .iter()
            .find(|b| b.range == range)
            .map(|b| b.count)
            .unwrap_or(0)
    };
    assert_eq!(bucket("90-100"), 1);
    assert_eq!(bucket("60-70"), 1);
    assert_eq!(bucket("20-30"), 1);
}
