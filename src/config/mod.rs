// src/config/mod.rs
pub mod consts;
pub mod options;
pub mod registry;

pub use options::{ExportFormat, ExportOptions, RunOptions, WriteMode};
pub use registry::{Identity, Registry};
