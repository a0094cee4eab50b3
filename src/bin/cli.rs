// src/bin/cli.rs
use color_eyre::eyre::eyre;
use milgram_monitor::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    match cli::run() {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => Err(eyre!("{e}")),
    }
}
