// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use super::registry::Registry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub url: String,
    pub export: ExportOptions,
    pub registry: Registry,
    /// `None` waits forever, as a plain GET does.
    pub timeout: Option<Duration>,
    /// Exit non-zero when the run fails.
    pub strict: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            url: s!(RESULTS_URL),
            export: ExportOptions::default(),
            registry: Registry::default(),
            timeout: None,
            strict: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

/// How the rewritten table reaches disk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and write in place. A crash mid-write can leave a truncated file.
    Overwrite,
    /// Write a sibling temp file, then rename it over the target.
    AtomicRename,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub write_mode: WriteMode,
    /// Explicit output path; `None` means `<DEFAULT_FILE>.<ext>` in the working dir.
    out_path: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            write_mode: WriteMode::Overwrite,
            out_path: None,
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        match &self.out_path {
            Some(p) => p.clone(),
            None => PathBuf::from(format!("{DEFAULT_FILE}.{}", self.format.ext())),
        }
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.out_path = Some(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("milgram_voting_data.csv"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("milgram_voting_data.tsv"));
    }

    #[test]
    fn explicit_path_keeps_user_extension() {
        let mut export = ExportOptions::default();
        export.set_path(PathBuf::from("logs/votes.txt"));
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("logs/votes.txt"));
    }
}
