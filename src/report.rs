// src/report.rs
use std::io::{self, Stdout, Write};

use chrono::NaiveDateTime;

use crate::progress::Progress;
use crate::record::VotingRecord;
use crate::specs::voting::Pass;

const RULE_WIDTH: usize = 60;

/// Human-readable console output for one run.
/// Write errors are ignored: losing a console line must not fail the run.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, s: &str) {
        let _ = writeln!(self.out, "{s}");
    }
}

/// `Yuno (002)      → Innocent:  37.50% | Guilty:  62.50%`
pub fn summary_line(r: &VotingRecord) -> String {
    format!(
        "{:15} → Innocent: {:6.2}% | Guilty: {:6.2}%",
        r.label, r.innocent, r.guilty
    )
}

fn fmt_values(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

impl<W: Write> Progress for ConsoleReporter<W> {
    fn begin(&mut self, url: &str, at: NaiveDateTime) {
        let rule = "=".repeat(RULE_WIDTH);
        self.line(&rule);
        self.line(&format!("MONITOR RUN - {}", at.format("%Y-%m-%d %H:%M:%S")));
        self.line(&rule);
        self.line(&format!("Source: {url}"));
    }

    fn log(&mut self, msg: &str) {
        self.line(msg);
    }

    fn matches(&mut self, pass: Pass, values: &[f64]) {
        let what = match pass {
            Pass::Primary => "Vote percentages found",
            Pass::FallbackAll => "All percentages on page",
            Pass::FallbackFiltered => "Filtered percentages (5-95%, not 50%)",
        };
        self.line(&format!("{what}: {}", fmt_values(values)));
    }

    fn warn(&mut self, msg: &str) {
        self.line(&format!("⚠️  {msg}"));
    }

    fn results(&mut self, records: &[VotingRecord]) {
        let rule = "─".repeat(RULE_WIDTH);
        self.line("");
        self.line("📊 CURRENT RESULTS:");
        self.line(&rule);
        for r in records {
            self.line(&format!("  {}", summary_line(r)));
        }
        self.line(&rule);
    }

    fn finish(&mut self, ok: bool) {
        if !ok {
            self.line("❌ Failed to get voting data");
        }
        self.line("");
        self.line("✓ Done!");
        let _ = self.out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(label: &str, innocent: f64, guilty: f64) -> VotingRecord {
        VotingRecord {
            label: s!(label),
            date: s!("2026-10-16"),
            time: s!("08:00:00"),
            innocent,
            guilty,
        }
    }

    #[test]
    fn summary_line_pads_label_and_percentages() {
        assert_eq!(
            summary_line(&record("Yuno (002)", 37.5, 62.5)),
            "Yuno (002)      → Innocent:  37.50% | Guilty:  62.50%"
        );
        assert_eq!(
            summary_line(&record("Muu (004)", 0.0, 100.0)),
            "Muu (004)       → Innocent:   0.00% | Guilty: 100.00%"
        );
    }

    #[test]
    fn full_run_output() {
        let mut rep = ConsoleReporter::new(Vec::new());
        let at = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap().and_hms_opt(8, 0, 0).unwrap();
        rep.begin("https://example.test/", at);
        rep.matches(Pass::Primary, &[62.5, 40.0]);
        rep.results(&[record("Fuuta (003)", 60.0, 40.0)]);
        rep.finish(true);

        let out = String::from_utf8(rep.into_inner()).unwrap();
        assert!(out.contains("MONITOR RUN - 2026-10-16 08:00:00"));
        assert!(out.contains("Vote percentages found: [62.5, 40]"));
        assert!(out.contains("  Fuuta (003)     → Innocent:  60.00% | Guilty:  40.00%"));
        assert!(out.trim_end().ends_with("✓ Done!"));
        assert!(!out.contains("Failed"));
    }

    #[test]
    fn failure_marker() {
        let mut rep = ConsoleReporter::new(Vec::new());
        rep.finish(false);
        let out = String::from_utf8(rep.into_inner()).unwrap();
        assert!(out.contains("❌ Failed to get voting data"));
    }
}
