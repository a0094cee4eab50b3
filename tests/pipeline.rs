// tests/pipeline.rs
//
// Whole runs against in-memory pages: fetch → extract → build → append → report.
//
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use milgram_monitor::config::{Registry, RunOptions};
use milgram_monitor::core::{PageSource, StaticPage};
use milgram_monitor::error::{FetchError, RunError};
use milgram_monitor::report::ConsoleReporter;
use milgram_monitor::runner::{execute_at, run_at};
use milgram_monitor::progress::NullProgress;
use milgram_monitor::store::AppendOutcome;

const PAGE: &str = r#"<!doctype html>
<html><head><title>JUDGE RESULT | MILGRAM</title></head>
<body>
  <p>Site is 100% fan-made. Voting closed.</p>
  <ul class="result">
    <li><span class="name">YUNO</span><span class="pct">62.5%</span><span>―</span></li>
    <li><span class="name">FUUTA</span><span class="pct">40%</span><span>―</span></li>
    <li><span class="name">MUU</span><span class="pct">77.25%</span><span>―</span></li>
  </ul>
</body></html>"#;

struct Unreachable;

impl PageSource for Unreachable {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Status { url: url.to_string(), status: 503 })
    }
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(12, 0, 0).unwrap()
}

fn opts_in(dir: &Path) -> RunOptions {
    let mut opts = RunOptions::default();
    opts.export.set_path(dir.join("milgram_voting_data.csv"));
    opts
}

#[test]
fn season_3_page_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let mut rep = ConsoleReporter::new(Vec::new());

    let summary = execute_at(&opts, &StaticPage(PAGE.into()), noon(), &mut rep).unwrap();
    assert_eq!(summary.outcome, AppendOutcome::Created);

    let got: Vec<(&str, f64, f64)> = summary
        .snapshot
        .records
        .iter()
        .map(|r| (r.label.as_str(), r.innocent, r.guilty))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Yuno (002)", 37.5, 62.5),
            ("Fuuta (003)", 60.0, 40.0),
            ("Muu (004)", 22.75, 77.25),
        ]
    );

    let text = fs::read_to_string(&summary.path).unwrap();
    assert!(text.contains("Muu (004),2026-10-16,12:00:00,22.75,77.25\n"));

    let out = String::from_utf8(rep.into_inner()).unwrap();
    assert!(out.contains("Vote percentages found: [62.5, 40, 77.25]"));
    assert!(out.contains("Yuno (002)      → Innocent:  37.50% | Guilty:  62.50%"));
    assert!(out.contains("✓ Created new file"));
    assert!(!out.contains("Failed"));
}

#[test]
fn second_run_appends() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let page = StaticPage(PAGE.into());

    execute_at(&opts, &page, noon(), &mut NullProgress).unwrap();
    let second = execute_at(&opts, &page, noon(), &mut NullProgress).unwrap();
    assert_eq!(second.outcome, AppendOutcome::Appended { previous_rows: 3 });
}

#[test]
fn two_matches_fail_cleanly_and_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let page = StaticPage("<p>62.5%―</p><p>40%―</p><p>30% 60% 70%</p>".into());
    let mut rep = ConsoleReporter::new(Vec::new());

    assert!(execute_at(&opts, &page, noon(), &mut rep).is_none());
    assert!(!opts.export.out_path().exists());

    let out = String::from_utf8(rep.into_inner()).unwrap();
    assert!(out.contains("found only 2 percentages, expected 3"));
    assert!(out.contains("❌ Failed to get voting data"));
}

#[test]
fn fetch_failure_fails_cleanly_and_write_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());

    let err = run_at(&opts, &Unreachable, noon(), &mut NullProgress).unwrap_err();
    assert!(matches!(err, RunError::Fetch(FetchError::Status { status: 503, .. })));

    assert!(execute_at(&opts, &Unreachable, noon(), &mut NullProgress).is_none());
    assert!(!opts.export.out_path().exists());
}

#[test]
fn fallback_page_uses_filtered_percentages() {
    let dir = tempfile::tempdir().unwrap();
    let opts = opts_in(dir.path());
    let page = StaticPage(
        "<p>100% secure</p><p>Yuno 55.5%</p><p>tie 50%</p><p>Fuuta 44%</p><p>0% off</p><p>Muu 81%</p>".into(),
    );

    let summary = run_at(&opts, &page, noon(), &mut NullProgress).unwrap();
    let guilty: Vec<f64> = summary.snapshot.records.iter().map(|r| r.guilty).collect();
    assert_eq!(guilty, vec![55.5, 44.0, 81.0]);
}

#[test]
fn alternate_registry_sets_how_many_values_are_needed() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = opts_in(dir.path());
    opts.registry = Registry::from_specs(&["010=Es", "001=Kotoko"]).unwrap();

    let page = StaticPage("<p>62.5%―</p><p>40%―</p>".into());
    let summary = run_at(&opts, &page, noon(), &mut NullProgress).unwrap();
    let labels: Vec<&str> = summary.snapshot.records.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["Es (010)", "Kotoko (001)"]);
}
