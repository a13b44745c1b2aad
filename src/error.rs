//! Error taxonomy for the conversion pipeline.
//!
//! Every failure aborts the run. Nothing here is recovered internally; the
//! variants exist so callers (and tests) can tell the kinds apart.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input could not be read or an output file could not be created.
    #[error("cannot access {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The CSV parser rejected a row, typically a field-count mismatch.
    #[error("malformed CSV at line {line}: {source}")]
    Parse {
        line: u64,
        #[source]
        source: csv::Error,
    },
    /// A field holds bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in CSV at line {line}")]
    Decode { line: u64 },
    /// One or more required columns are absent from the header row.
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },
}

impl ConvertError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(source: csv::Error) -> Self {
        let line = source.position().map(|pos| pos.line()).unwrap_or(0);
        ConvertError::Parse { line, source }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
