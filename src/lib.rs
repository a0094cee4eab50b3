// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod file;
pub mod progress;
pub mod record;
pub mod report;
pub mod runner;
pub mod specs;
pub mod store;

pub use error::{ExtractionError, FetchError, PersistenceError, RunError};
pub use runner::{RunSummary, execute, execute_at};
