// src/store.rs
//! Persisted voting log.
//!
//! The log is a single CSV/TSV table, header first, one row per identity per
//! run. Every append reads the whole table, adds the new rows at the end and
//! rewrites it. If the existing file cannot be read as one of our tables
//! (unreadable, not UTF-8, broken quoting, foreign columns) it is replaced by a
//! table holding only the new rows. That loses the old history; the caller is
//! told through [`AppendOutcome::Recovered`] and a warning.
//!
//! There is no locking. Two runs writing the same file at once race.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::ExportFormat;
use crate::csv::{parse_rows, rows_to_bytes};
use crate::error::PersistenceError;
use crate::file::{WriteStrategy, ensure_parent};
use crate::progress::Progress;
use crate::record::{VotingRecord, header_row};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// What `append` did to the file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppendOutcome {
    /// No file existed; a fresh table was written.
    Created,
    /// New rows went after `previous_rows` existing ones.
    Appended { previous_rows: usize },
    /// The existing file was unusable and has been replaced by the new rows only.
    Recovered { reason: String },
}

/// Append-or-create table file.
pub struct TableFile {
    path: PathBuf,
    format: ExportFormat,
    strategy: Box<dyn WriteStrategy>,
}

impl TableFile {
    pub fn new(path: impl Into<PathBuf>, format: ExportFormat, strategy: Box<dyn WriteStrategy>) -> Self {
        Self { path: path.into(), format, strategy }
    }

    pub fn path(&self) -> &Path { &self.path }

    /// Read the existing table. `Ok(None)` when there is no file yet.
    pub fn load(&self) -> Result<Option<DataSet>, PersistenceError> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(PersistenceError::Read { path: self.path.clone(), source }),
        };

        let malformed = |reason: String| PersistenceError::Malformed { path: self.path.clone(), reason };

        let text = String::from_utf8(bytes).map_err(|_| malformed(s!("not UTF-8 text")))?;
        let mut rows = parse_rows(&text, self.format.delim()).map_err(|e| malformed(e.to_string()))?;
        if rows.is_empty() {
            return Err(malformed(s!("no header row")));
        }

        let headers = rows.remove(0);
        let expected = header_row();
        if headers != expected {
            return Err(malformed(format!("columns {headers:?}, expected {expected:?}")));
        }
        if let Some(i) = rows.iter().position(|r| r.len() != expected.len()) {
            return Err(malformed(format!(
                "row {} has {} cells, expected {}",
                i + 2,
                rows[i].len(),
                expected.len()
            )));
        }

        Ok(Some(DataSet { headers, rows }))
    }

    /// Append `records` after any existing rows and rewrite the file.
    /// Only a failure to write the new table is returned as an error.
    pub fn append(
        &self,
        records: &[VotingRecord],
        progress: &mut dyn Progress,
    ) -> Result<AppendOutcome, PersistenceError> {
        let new_rows: Vec<Vec<String>> = records.iter().map(VotingRecord::to_row).collect();

        let (rows, outcome) = match self.load() {
            Ok(None) => (new_rows, AppendOutcome::Created),
            Ok(Some(mut existing)) => {
                let previous_rows = existing.rows.len();
                existing.rows.extend(new_rows);
                (existing.rows, AppendOutcome::Appended { previous_rows })
            }
            Err(e) => {
                logw!(error = %e, "existing table unusable; overwriting with the new rows only");
                progress.warn(&format!("Could not read existing file: {e}"));
                progress.warn("Creating a new file; previous rows are lost.");
                (new_rows, AppendOutcome::Recovered { reason: e.to_string() })
            }
        };

        let write_err = |source| PersistenceError::Write { path: self.path.clone(), source };
        ensure_parent(&self.path).map_err(write_err)?;

        let contents = rows_to_bytes(&header_row(), &rows, self.format.delim());
        self.strategy.write(&self.path, &contents).map_err(write_err)?;

        logd!(path = %self.path.display(), rows = rows.len(), ?outcome, "table written");
        Ok(outcome)
    }
}
