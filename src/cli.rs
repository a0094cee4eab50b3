// src/cli.rs
use std::{env, error::Error, fs, path::PathBuf, time::Duration};

use crate::config::{ExportFormat, Registry, RunOptions, WriteMode};
use crate::config::consts::DEFAULT_FILE;
use crate::core::{HttpSource, PageSource, StaticPage};
use crate::file::resolve_out_path;
use crate::report::ConsoleReporter;

pub type CliError = Box<dyn Error + Send + Sync>;

pub enum Command {
    Help,
    Run(CliArgs),
}

pub struct CliArgs {
    pub opts: RunOptions,
    /// Replay a saved page instead of fetching `opts.url`.
    pub page_file: Option<PathBuf>,
}

/// Parse the process arguments and run once.
/// `Ok(false)` means the run failed and `--strict` asks for a failing exit code.
pub fn run() -> Result<bool, CliError> {
    let args = match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{}", include_str!("cli_help.txt"));
            return Ok(true);
        }
        Command::Run(args) => args,
    };
    let opts = &args.opts;

    let source: Box<dyn PageSource> = match &args.page_file {
        Some(p) => Box::new(StaticPage(fs::read(p)?)),
        None => Box::new(HttpSource::new(opts.timeout)?),
    };

    let mut reporter = ConsoleReporter::stdout();
    let ok = crate::runner::execute(opts, source.as_ref(), &mut reporter).is_some();
    Ok(ok || !opts.strict)
}

pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Command, CliError> {
    let mut opts = RunOptions::default();
    let mut page_file = None;
    let mut out: Option<String> = None;
    let mut identities: Vec<String> = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--url" => opts.url = args.next().ok_or("Missing value for --url")?,
            "-o" | "--out" => out = Some(args.next().ok_or("Missing output path")?),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--atomic" => opts.export.write_mode = WriteMode::AtomicRename,
            "--timeout" => {
                let secs: f64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                if !(secs > 0.0 && secs.is_finite()) { return Err("Timeout must be a positive number of seconds".into()); }
                opts.timeout = Some(Duration::from_secs_f64(secs)); }
            "--identity" => identities.push(args.next().ok_or("Missing value for --identity")?),
            "--page-file" => page_file = Some(PathBuf::from(args.next().ok_or("Missing page file path")?)),
            "--strict" => opts.strict = true,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !identities.is_empty() {
        opts.registry = Registry::from_specs(&identities)?;
    }
    // Resolved last so the default file name follows --format wherever the flags appear.
    if let Some(o) = out {
        let default_name = format!("{DEFAULT_FILE}.{}", opts.export.format.ext());
        opts.export.set_path(resolve_out_path(&o, &default_name));
    }

    Ok(Command::Run(CliArgs { opts, page_file }))
}
