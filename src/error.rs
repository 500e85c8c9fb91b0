//! Error types for the cleaning pipeline.
//!
//! Only two things can go wrong: the tabular source cannot be read, or the
//! stop-word list is not installed. Individual cell values never fail; the
//! normalizer coerces whatever it is given.

use std::path::PathBuf;
use thiserror::Error;

/// The input table is missing, unreadable, or lacks a required column.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DataSourceError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed csv in {origin}: {source}")]
    Csv {
        origin: String,
        #[source]
        source: csv::Error,
    },

    #[error("{origin} has no '{column}' column (found: {found:?})")]
    MissingColumn {
        origin: String,
        column: String,
        found: Vec<String>,
    },

    #[error("{origin} line {line}: expected {expected} fields, saw {found}")]
    RaggedRow {
        origin: String,
        line: u64,
        expected: usize,
        found: usize,
    },
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PipelineError {
    #[error(transparent)]
    DataSource(#[from] DataSourceError),

    /// The stop-word resource for `language` is not present in any searched location.
    #[error("stop words for '{language}' are not installed (searched: {searched:?})")]
    StopWordsUnavailable {
        language: String,
        searched: Vec<PathBuf>,
    },
}

pub type Result<T, E = PipelineError> = std::result::Result<T, E>;
