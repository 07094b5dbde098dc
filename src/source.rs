//! Scan-loop contracts shared by every scanner.
//!
//! Each source is a cursor: call `scan` until it returns `false`, read the
//! current value in between, then check the error accessor once the loop
//! has ended.

use crate::Error;

/// A source of pre-split records.
///
/// Implemented by [`crate::csv::Scanner`] and [`crate::fields::Scanner`];
/// consumed by [`crate::csv::ColumnScanner`].
pub trait RecordSource {
    /// Advance to the next record. Once this returns `false` it keeps
    /// returning `false`.
    fn scan(&mut self) -> bool;

    /// The current record. Empty before the first successful `scan`.
    fn record(&self) -> &[String];

    /// The error that ended scanning, or `None` after a clean end of input.
    fn error(&self) -> Option<&Error>;

    /// Consume the source, returning its terminal error.
    fn into_error(self) -> Option<Error>
    where
        Self: Sized;
}

/// A source of raw text lines.
///
/// Implemented by [`crate::lines::Scanner`]; consumed by
/// [`crate::fixedwidth::Scanner`] and [`crate::fields::Scanner`].
pub trait LineSource {
    /// Advance to the next line. Once this returns `false` it keeps
    /// returning `false`.
    fn scan(&mut self) -> bool;

    /// The current line without its terminator.
    fn text(&self) -> &str;

    /// The error that ended scanning, or `None` after a clean end of input.
    fn err(&self) -> Option<&Error>;

    /// Consume the source, returning its terminal error.
    fn into_err(self) -> Option<Error>
    where
        Self: Sized;
}
