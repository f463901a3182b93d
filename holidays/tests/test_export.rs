//! End-to-end: compute a year, export it, read the files back.

use std::fs;
use std::path::PathBuf;

use holidays::export::{export_with_stem, file_stem};
use holidays::{compute_aggregate, export, OutputFormat};

fn scratch_dir(name: &str) -> PathBuf {
    let stem = file_stem(chrono::Utc::now(), &mut rand::thread_rng());
    let dir = std::env::temp_dir().join(format!("{name}-{stem}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn json_file_round_trips_through_serde_json() {
    let dir = scratch_dir("json");
    let record = compute_aggregate(2022).unwrap();
    let report = export_with_stem(&record, &dir, &[OutputFormat::Json], "holidays-test");
    assert!(report.is_complete());
    assert_eq!(report.written, vec![dir.join("holidays-test.json")]);

    let text = fs::read_to_string(&report.written[0]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["Year"], 2022);
    assert_eq!(value["AsiaPacific"]["JapanBankHolidays"]["NewYearsEve"], "2021-12-31");
    assert_eq!(value["Europe"]["ECBTarget2Holidays"]["ChristmasHoliday"], "2022-12-27");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn every_format_shares_one_stem() {
    let dir = scratch_dir("all");
    let record = compute_aggregate(2024).unwrap();
    let formats = [OutputFormat::Json, OutputFormat::Yaml, OutputFormat::Xml];
    let report = export(&record, &dir, &formats);
    assert!(report.is_complete());
    assert_eq!(report.written.len(), 3);

    let stems: Vec<_> = report
        .written
        .iter()
        .map(|p| p.file_stem().unwrap().to_string_lossy().into_owned())
        .collect();
    assert!(stems.iter().all(|s| *s == stems[0]));
    assert!(stems[0].starts_with("holidays-"));
    assert_eq!(report.written[1].extension().unwrap(), "yaml");
    assert_eq!(report.written[2].extension().unwrap(), "xml");

    let xml = fs::read_to_string(&report.written[2]).unwrap();
    assert!(xml.contains("<AustralianHolidays>"));

    fs::remove_dir_all(&dir).unwrap();
}
