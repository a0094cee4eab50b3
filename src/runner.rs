// src/runner.rs
use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

use crate::{
    config::RunOptions,
    core::PageSource,
    error::RunError,
    file::strategy_for,
    progress::Progress,
    record::Snapshot,
    specs::voting,
    store::{AppendOutcome, TableFile},
};

/// Summary of what a successful run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub snapshot: Snapshot,
    pub path: PathBuf,
    pub outcome: AppendOutcome,
}

/// fetch → extract → build → append. Nothing is written unless extraction succeeds.
pub fn run_at(
    opts: &RunOptions,
    source: &dyn PageSource,
    now: NaiveDateTime,
    progress: &mut dyn Progress,
) -> Result<RunSummary, RunError> {
    let raw = source.fetch(&opts.url)?;

    let percentages = voting::extract(&raw, opts.registry.len(), progress)?;
    let snapshot = Snapshot::build(&percentages, &opts.registry, now);

    let table = TableFile::new(
        opts.export.out_path(),
        opts.export.format,
        strategy_for(opts.export.write_mode),
    );
    let outcome = table.append(&snapshot.records, progress)?;
    let verb = match &outcome {
        AppendOutcome::Created => "Created new file",
        AppendOutcome::Appended { .. } => "Data appended to existing file",
        AppendOutcome::Recovered { .. } => "Wrote fresh file",
    };
    progress.log(&format!("✓ {verb} {}", table.path().display()));

    Ok(RunSummary { snapshot, path: table.path().to_path_buf(), outcome })
}

/// One complete monitoring run at `now`, with every failure caught and reported.
/// Returns `None` when the run failed; the failure has already been reported.
pub fn execute_at(
    opts: &RunOptions,
    source: &dyn PageSource,
    now: NaiveDateTime,
    progress: &mut dyn Progress,
) -> Option<RunSummary> {
    progress.begin(&opts.url, now);

    match run_at(opts, source, now, progress) {
        Ok(summary) => {
            logf!(path = %summary.path.display(), rows = summary.snapshot.records.len(), "run complete");
            progress.results(&summary.snapshot.records);
            progress.finish(true);
            Some(summary)
        }
        Err(e) => {
            loge!(error = %e, "run failed");
            progress.warn(&format!("Error while getting data: {e}"));
            progress.finish(false);
            None
        }
    }
}

/// [`execute_at`] stamped with the local wall clock.
pub fn execute(
    opts: &RunOptions,
    source: &dyn PageSource,
    progress: &mut dyn Progress,
) -> Option<RunSummary> {
    execute_at(opts, source, Local::now().naive_local(), progress)
}
