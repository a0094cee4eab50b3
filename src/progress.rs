// src/progress.rs
use chrono::NaiveDateTime;

use crate::record::VotingRecord;
use crate::specs::voting::Pass;

/// Lightweight reporting hooks for one monitoring run.
/// Frontends implement this to surface status to users; nothing here feeds back into the run.
pub trait Progress {
    /// Called once, before fetching.
    fn begin(&mut self, _url: &str, _at: NaiveDateTime) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Percentages seen by one extraction pass, in document order.
    fn matches(&mut self, _pass: Pass, _values: &[f64]) {}

    /// Something went wrong but the run carries on (or ends cleanly).
    fn warn(&mut self, _msg: &str) {}

    /// Records that made it into the table.
    fn results(&mut self, _records: &[VotingRecord]) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
