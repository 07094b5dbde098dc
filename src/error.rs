//! Error types for the scanner family.

use thiserror::Error;

/// Errors produced while scanning, looking up columns, or populating records.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading a line from the underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader rejected a record.
    #[error("csv error: {0}")]
    Csv(#[from] ::csv::Error),

    /// A record did not have the configured number of fields.
    #[error("record on line {line}: wrong number of fields (expected {expected}, found {found})")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    /// The source ended before a header record could be read.
    #[error("could not read header: no records")]
    EmptyInput,

    /// The source failed while reading the header record.
    #[error("could not read header: {0}")]
    Header(#[source] Box<Error>),

    /// A column name is not present in the header.
    #[error("column not found: {0:?}")]
    ColumnNotFound(String),

    /// `populate` was called without a current record.
    #[error("no current record to populate from (call scan first)")]
    NoRecord,
}

impl Error {
    /// Whether scanning can resume past this error.
    ///
    /// Record-level parse failures are recoverable; I/O failures are not,
    /// since the reader would keep reporting them.
    pub fn is_record_error(&self) -> bool {
        match self {
            Error::FieldCount { .. } => true,
            Error::Csv(e) => !matches!(e.kind(), ::csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
