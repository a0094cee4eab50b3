// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Network or HTTP failure while fetching the results page.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },
}

/// Too few usable percentages on the page.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("found only {found} percentages, expected {wanted}")]
pub struct ExtractionError {
    pub found: usize,
    pub wanted: usize,
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Existing table could not be read. Recovered by overwriting.
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Existing table was read but does not look like ours. Recovered by overwriting.
    #[error("{} is not a valid voting table: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },

    /// New table could not be written. Fails the run.
    #[error("could not write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
