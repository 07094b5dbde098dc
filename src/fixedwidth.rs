//! Fixed-width column scanner.
//!
//! There is no header: every line, including a title line, is data. Values
//! are addressed by byte position or by a caller-supplied [`Extractor`].
//!
//! ## Truncation
//!
//! [`field`] and [`trimmed`] take byte offsets. Both ends of the range are
//! clamped to the length of the line and then moved down to the nearest
//! UTF-8 character boundary, so a short line yields whatever part of the
//! range it has (`""` when the line ends before `start`). Nothing is padded
//! and nothing panics.

use std::borrow::Cow;
use std::io::{BufReader, Read};

use crate::{Error, LineSource, lines};

/// Pulls one value out of a raw line.
pub trait Extractor {
    fn extract<'a>(&self, line: &'a str) -> Cow<'a, str>;
}

impl<F> Extractor for F
where
    F: Fn(&str) -> String,
{
    fn extract<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(line))
    }
}

/// Bytes `[start, start + length)` of the line, see [`field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: usize,
    pub length: usize,
}

impl Range {
    /// The clamped slice of `line` covered by this range.
    pub fn slice<'a>(&self, line: &'a str) -> &'a str {
        let start = floor_char_boundary(line, self.start);
        let end = floor_char_boundary(line, self.start.saturating_add(self.length));
        &line[start..end.max(start)]
    }
}

impl Extractor for Range {
    fn extract<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(self.slice(line))
    }
}

/// A [`Range`] with surrounding whitespace removed, see [`trimmed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trimmed(pub Range);

impl Extractor for Trimmed {
    fn extract<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(self.0.slice(line).trim())
    }
}

/// Several ranges joined with a separator, for values split across
/// non-adjacent columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Concat {
    pub ranges: Vec<Range>,
    pub separator: String,
}

impl Concat {
    pub fn new(ranges: Vec<Range>, separator: impl Into<String>) -> Self {
        Self {
            ranges,
            separator: separator.into(),
        }
    }
}

impl Extractor for Concat {
    fn extract<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let parts: Vec<&str> = self.ranges.iter().map(|r| r.slice(line)).collect();
        Cow::Owned(parts.join(&self.separator))
    }
}

/// Extract bytes `[start, start + length)` verbatim.
pub fn field(start: usize, length: usize) -> Range {
    Range { start, length }
}

/// Extract bytes `[start, start + length)` without surrounding whitespace.
pub fn trimmed(start: usize, length: usize) -> Trimmed {
    Trimmed(field(start, length))
}

fn floor_char_boundary(line: &str, index: usize) -> usize {
    let mut index = index.min(line.len());
    while !line.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Scans lines and extracts fixed-width fields from each.
///
/// ```
/// use scanners_rs::fixedwidth::{self, Scanner};
///
/// let input = "name             username\nRob Pike         rob     \n";
/// let mut scanner = Scanner::new(input.as_bytes());
/// let mut rows = Vec::new();
/// while scanner.scan() {
///     let name = scanner.field(&fixedwidth::field(0, 16)).into_owned();
///     let username = scanner.field(&fixedwidth::field(17, 8)).into_owned();
///     rows.push(format!("* {name}* {username} *"));
/// }
/// assert!(scanner.err().is_none());
/// assert_eq!(rows, ["* name            * username *", "* Rob Pike        * rob      *"]);
/// ```
pub struct Scanner<S> {
    lines: S,
}

impl<R: Read> Scanner<lines::Scanner<BufReader<R>>> {
    pub fn new(reader: R) -> Self {
        Self::from_source(lines::Scanner::new(reader))
    }
}

impl<S: LineSource> Scanner<S> {
    pub fn from_source(lines: S) -> Self {
        Self { lines }
    }

    /// Advance to the next line.
    pub fn scan(&mut self) -> bool {
        self.lines.scan()
    }

    /// The current line.
    pub fn text(&self) -> &str {
        self.lines.text()
    }

    /// Apply `extractor` to the current line.
    pub fn field<E: Extractor + ?Sized>(&self, extractor: &E) -> Cow<'_, str> {
        extractor.extract(self.lines.text())
    }

    /// The error that ended scanning, or `None` after a clean end of input.
    pub fn err(&self) -> Option<&Error> {
        self.lines.err()
    }
}
