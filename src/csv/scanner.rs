use std::io::Read;

use tracing::{debug, warn};

use super::trim::LeadingSpace;
use super::{FieldsPerRecord, Options};
use crate::{Error, RecordSource};

/// Delimited-record scanner backed by the `csv` crate.
///
/// ```
/// use scanners_rs::RecordSource;
/// use scanners_rs::csv::Scanner;
///
/// let input = "first_name,last_name,username\n\"Rob\",\"Pike\",rob\n";
/// let mut scanner = Scanner::new(input.as_bytes());
/// let mut records = Vec::new();
/// while scanner.scan() {
///     records.push(scanner.record().join(" "));
/// }
/// assert!(scanner.error().is_none());
/// assert_eq!(records, ["first_name last_name username", "Rob Pike rob"]);
/// ```
pub struct Scanner<R> {
    reader: ::csv::Reader<LeadingSpace<R>>,
    buffer: ::csv::StringRecord,
    record: Vec<String>,
    options: Options,
    expected: Option<usize>,
    error: Option<Error>,
    done: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, Options::default())
    }

    /// Build a scanner, then pre-consume `options.skip` records.
    pub fn with_options(reader: R, options: Options) -> Self {
        let expected = match options.fields_per_record {
            FieldsPerRecord::Exactly(n) => Some(n),
            _ => None,
        };
        let mut scanner = Self {
            reader: options.reader_builder().from_reader(LeadingSpace::new(
                reader,
                options.trim_leading_space,
                options.comma,
                options.comment,
            )),
            buffer: ::csv::StringRecord::new(),
            record: Vec::new(),
            options,
            expected,
            error: None,
            done: false,
        };
        let skip = scanner.options.skip;
        if skip > 0 {
            let skipped = (0..skip).take_while(|_| scanner.scan()).count();
            debug!(requested = skip, skipped, "skipped leading records");
        }
        scanner
    }

    fn line(&self) -> u64 {
        self.buffer.position().map_or(0, |p| p.line())
    }

    fn read(&mut self) -> Result<bool, Error> {
        if !self.reader.read_record(&mut self.buffer)? {
            return Ok(false);
        }
        self.check_field_count()?;

        if self.options.reuse_record {
            self.record.clear();
        } else {
            self.record = Vec::with_capacity(self.buffer.len());
        }
        self.record.extend(self.buffer.iter().map(str::to_owned));
        Ok(true)
    }

    fn check_field_count(&mut self) -> Result<(), Error> {
        let found = self.buffer.len();
        match (self.options.fields_per_record, self.expected) {
            (FieldsPerRecord::Any, _) => Ok(()),
            (_, None) => {
                self.expected = Some(found);
                Ok(())
            }
            (_, Some(expected)) if expected == found => Ok(()),
            (_, Some(expected)) => Err(Error::FieldCount {
                line: self.line(),
                expected,
                found,
            }),
        }
    }
}

impl<R: Read> RecordSource for Scanner<R> {
    fn scan(&mut self) -> bool {
        if self.done {
            return false;
        }
        loop {
            match self.read() {
                Ok(true) => return true,
                Ok(false) => break,
                Err(e) if self.options.continue_on_error && e.is_record_error() => {
                    warn!(line = self.line(), error = %e, "skipping bad record");
                }
                Err(e) => {
                    self.error = Some(e);
                    break;
                }
            }
        }
        self.record.clear();
        self.done = true;
        false
    }

    fn record(&self) -> &[String] {
        &self.record
    }

    fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    fn into_error(self) -> Option<Error> {
        self.error
    }
}
