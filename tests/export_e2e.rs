// tests/export_e2e.rs
mod common;

use std::fs;
use std::path::PathBuf;

use common::{listing_page, CannedSource, Row};
use kosdaq_discl::config::options::{ExportFormat, ExportOptions, ScrapeOptions};
use kosdaq_discl::file::write_export;
use kosdaq_discl::progress::NullProgress;
use kosdaq_discl::runner::run_with;
use kosdaq_discl::specs::disclosures::RowExtractor;
use kosdaq_discl::{DisclosureForms, EligibleRoster};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kosdaq_discl_{name}_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn report_exports_as_csv_into_fresh_directory() {
    let rows = [
        Row { company: "에이, 비", ..Row::new("00123", "반기보고서", "20240814000123") },
        Row::new("77777", "반기보고서", "20240814000124"),
    ];
    let src = CannedSource::new([(1, Ok(listing_page(2, 1, 1, &rows)))]);
    let report = run_with(
        &src,
        &RowExtractor::default(),
        &ScrapeOptions::for_date(common::date()),
        &DisclosureForms::new(["반기보고서"]),
        &EligibleRoster::from_codes(["123"]),
        Some(&mut NullProgress),
    )
    .unwrap();
    assert_eq!(report.announcements.len(), 1);

    let dir = scratch_dir("csv");
    let mut export = ExportOptions::default();
    export.set_path(&dir.join("nested").join("today").to_string_lossy());

    let path = write_export(&export, &report.announcements).unwrap();
    assert_eq!(path, dir.join("nested").join("today.csv"));

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Time,Company code,Company,Note,Title,Submitter,Detail URL");
    assert!(lines[1].starts_with("17:30,00123,\"에이, 비\",,반기보고서,\"에이, 비\",https://kind.krx.co.kr/"));
    assert!(lines[1].contains("acptno=20240814000123"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn tsv_export_keeps_explicit_file_name() {
    let dir = scratch_dir("tsv");
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Tsv;
    export.set_path(&dir.join("list.txt").to_string_lossy());

    let path = write_export(&export, &[]).unwrap();
    assert_eq!(path, dir.join("list.txt"));
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Time\tCompany code\tCompany\tNote\tTitle\tSubmitter\tDetail URL\n"
    );

    fs::remove_dir_all(&dir).unwrap();
}
