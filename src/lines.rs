//! Line scanner over any buffered reader.
//!
//! Lines are split on `\n`; a trailing `\r` is dropped, and a final line
//! without a terminator is still returned.

use std::io::{BufRead, BufReader, Read};

use crate::{Error, LineSource};

/// Yields one line of text per call to `scan`.
pub struct Scanner<R> {
    reader: R,
    line: String,
    error: Option<Error>,
    done: bool,
}

impl<R: Read> Scanner<BufReader<R>> {
    /// Wrap an unbuffered reader.
    pub fn new(reader: R) -> Self {
        Self::from_buf_read(BufReader::new(reader))
    }
}

impl<R: BufRead> Scanner<R> {
    /// Wrap a reader that is already buffered.
    pub fn from_buf_read(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            error: None,
            done: false,
        }
    }

    fn read_line(&mut self) -> Result<bool, Error> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        if self.line.ends_with('\n') {
            self.line.pop();
            if self.line.ends_with('\r') {
                self.line.pop();
            }
        }
        Ok(true)
    }
}

impl<R: BufRead> LineSource for Scanner<R> {
    fn scan(&mut self) -> bool {
        if self.done {
            return false;
        }
        match self.read_line() {
            Ok(true) => true,
            Ok(false) => {
                self.done = true;
                false
            }
            Err(e) => {
                self.line.clear();
                self.error = Some(e);
                self.done = true;
                false
            }
        }
    }

    fn text(&self) -> &str {
        &self.line
    }

    fn err(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    fn into_err(self) -> Option<Error> {
        self.error
    }
}
