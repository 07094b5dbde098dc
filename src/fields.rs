//! Whitespace-separated field scanner.
//!
//! Fields are split on runs of whitespace, so field values cannot contain
//! whitespace themselves. For tab-separated files whose values may contain
//! spaces, use [`crate::csv::Scanner`] with `Options::new().comma(b'\t')`.

use std::io::{BufReader, Read};

use crate::{Error, LineSource, RecordSource, lines};

/// Splits each line of the underlying line source into fields.
///
/// ```
/// use scanners_rs::RecordSource;
/// use scanners_rs::fields::Scanner;
///
/// let mut scanner = Scanner::new("  a\t  1   foo    i  \n  b\t 10   bar    ii ".as_bytes());
/// assert!(scanner.scan());
/// assert_eq!(scanner.fields(), ["a", "1", "foo", "i"]);
/// assert!(scanner.scan());
/// assert_eq!(scanner.fields(), ["b", "10", "bar", "ii"]);
/// assert!(!scanner.scan());
/// assert!(scanner.error().is_none());
/// ```
pub struct Scanner<S> {
    lines: S,
    fields: Vec<String>,
}

impl<R: Read> Scanner<lines::Scanner<BufReader<R>>> {
    pub fn new(reader: R) -> Self {
        Self::from_source(lines::Scanner::new(reader))
    }
}

impl<S: LineSource> Scanner<S> {
    pub fn from_source(lines: S) -> Self {
        Self {
            lines,
            fields: Vec::new(),
        }
    }

    /// The fields of the current line.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The current line, unsplit.
    pub fn text(&self) -> &str {
        self.lines.text()
    }
}

impl<S: LineSource> RecordSource for Scanner<S> {
    fn scan(&mut self) -> bool {
        self.fields.clear();
        if !self.lines.scan() {
            return false;
        }
        self.fields
            .extend(self.lines.text().split_whitespace().map(str::to_owned));
        true
    }

    fn record(&self) -> &[String] {
        &self.fields
    }

    fn error(&self) -> Option<&Error> {
        self.lines.err()
    }

    fn into_error(self) -> Option<Error> {
        self.lines.into_err()
    }
}
