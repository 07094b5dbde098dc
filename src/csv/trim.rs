//! Leading-space removal ahead of the CSV grammar.
//!
//! Whitespace at the start of each field is dropped from the byte stream
//! before the `csv` reader sees it, so `a, "b, c"` reaches the reader as
//! `a,"b, c"` and the second field still parses as quoted. Bytes inside
//! quoted fields and comment lines pass through untouched.

use std::io::{self, Read};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// At the first byte of a field.
    FieldStart,
    /// Inside an unquoted field.
    Unquoted,
    /// Inside a quoted field.
    Quoted,
    /// Just read a quote inside a quoted field: either an escaped quote or
    /// the closing one.
    QuoteInQuoted,
    /// Inside a comment line.
    Comment,
}

/// Reader adapter that strips leading whitespace from every field when
/// enabled, and passes bytes through unchanged otherwise.
pub(crate) struct LeadingSpace<R> {
    inner: R,
    enabled: bool,
    delimiter: u8,
    comment: Option<u8>,
    state: State,
    line_start: bool,
}

impl<R: Read> LeadingSpace<R> {
    pub(crate) fn new(inner: R, enabled: bool, delimiter: u8, comment: Option<u8>) -> Self {
        Self {
            inner,
            enabled,
            delimiter,
            comment,
            state: State::FieldStart,
            line_start: true,
        }
    }

    /// Advance the state machine by one byte; returns whether to keep it.
    fn keep(&mut self, b: u8) -> bool {
        match self.state {
            State::Comment => {
                if b == b'\n' {
                    self.end_field(b);
                }
                return true;
            }
            State::Quoted => {
                if b == b'"' {
                    self.state = State::QuoteInQuoted;
                }
                return true;
            }
            State::QuoteInQuoted if b == b'"' => {
                self.state = State::Quoted;
                return true;
            }
            _ => {}
        }

        if self.line_start && Some(b) == self.comment {
            self.state = State::Comment;
            self.line_start = false;
            return true;
        }
        if self.state == State::FieldStart && is_space(b) {
            self.line_start = false;
            return false;
        }
        self.line_start = false;

        if b == self.delimiter || b == b'\n' {
            self.end_field(b);
        } else if self.state == State::FieldStart && b == b'"' {
            self.state = State::Quoted;
        } else {
            self.state = State::Unquoted;
        }
        true
    }

    fn end_field(&mut self, b: u8) {
        self.state = State::FieldStart;
        self.line_start = b == b'\n';
    }
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0b | 0x0c)
}

impl<R: Read> Read for LeadingSpace<R> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        if !self.enabled || out.is_empty() {
            return self.inner.read(out);
        }
        loop {
            let n = self.inner.read(out)?;
            if n == 0 {
                return Ok(0);
            }
            let mut kept = 0;
            for i in 0..n {
                let b = out[i];
                if self.keep(b) {
                    out[kept] = b;
                    kept += 1;
                }
            }
            if kept > 0 {
                return Ok(kept);
            }
        }
    }
}
