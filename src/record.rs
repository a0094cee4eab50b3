// src/record.rs
use chrono::NaiveDateTime;

use crate::config::Registry;
use crate::config::consts::{COLUMNS, DATE_FORMAT, TIME_FORMAT};

/// One table row: one identity's share in one run.
#[derive(Clone, Debug, PartialEq)]
pub struct VotingRecord {
    pub label: String,
    pub date: String,
    pub time: String,
    pub innocent: f64,
    pub guilty: f64,
}

impl VotingRecord {
    /// Cells in `COLUMNS` order. Percentages always carry two decimals.
    pub fn to_row(&self) -> Vec<String> {
        row![
            self.label,
            self.date,
            self.time,
            format!("{:.2}", self.innocent),
            format!("{:.2}", self.guilty),
        ]
    }
}

pub fn header_row() -> Vec<String> {
    COLUMNS.iter().map(|c| s!(*c)).collect()
}

/// Round to two decimals from the exact binary value, ties to even.
/// `round2(2.675)` is 2.67 because 2.675 is stored as 2.67499…
pub fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

/// Everything one run produced, sharing one timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub taken_at: NaiveDateTime,
    pub records: Vec<VotingRecord>,
}

impl Snapshot {
    /// Pair `guilty` values with identities by position. Values past the end of
    /// the registry are ignored; the extractor guarantees there are enough.
    pub fn build(guilty: &[f64], identities: &Registry, now: NaiveDateTime) -> Self {
        let date = now.format(DATE_FORMAT).to_string();
        let time = now.format(TIME_FORMAT).to_string();

        let records = identities
            .iter()
            .zip(guilty)
            .map(|(id, &guilty)| VotingRecord {
                label: id.label(),
                date: date.clone(),
                time: time.clone(),
                innocent: round2(100.0 - guilty),
                guilty,
            })
            .collect();

        Self { taken_at: now, records }
    }
}
