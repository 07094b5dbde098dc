//! Configuration for [`super::Scanner`] and [`super::ColumnScanner`].

use std::fmt;

/// How many fields each record must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldsPerRecord {
    /// Every record must match the field count of the first record read.
    #[default]
    Consistent,
    /// Every record must have exactly this many fields.
    Exactly(usize),
    /// No check; records may be ragged.
    Any,
}

/// Options for the CSV record scanner, applied at construction.
///
/// ```
/// use scanners_rs::csv::{FieldsPerRecord, Options};
///
/// let options = Options::new()
///     .comma(b';')
///     .comment(b'#')
///     .fields_per_record(FieldsPerRecord::Any)
///     .skip_header_record();
/// assert_eq!(options.skip, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    pub comma: u8,
    pub comment: Option<u8>,
    pub fields_per_record: FieldsPerRecord,
    pub lazy_quotes: bool,
    pub reuse_record: bool,
    pub trim_leading_space: bool,
    pub continue_on_error: bool,
    /// Records consumed and discarded at construction.
    pub skip: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            comma: b',',
            comment: None,
            fields_per_record: FieldsPerRecord::Consistent,
            lazy_quotes: false,
            reuse_record: false,
            trim_leading_space: false,
            continue_on_error: false,
            skip: 0,
        }
    }
}

impl Options {
    /// Comma-delimited, no comments, consistent field counts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Field delimiter. Defaults to `,`.
    pub fn comma(mut self, comma: u8) -> Self {
        self.comma = comma;
        self
    }

    /// Lines beginning with `comment` are ignored.
    pub fn comment(mut self, comment: u8) -> Self {
        self.comment = Some(comment);
        self
    }

    /// Field-count check applied to every record.
    pub fn fields_per_record(mut self, fields: FieldsPerRecord) -> Self {
        self.fields_per_record = fields;
        self
    }

    /// Accept stray quotes. The `csv` grammar already takes a quote inside
    /// an unquoted field literally and never rejects a record for one, so
    /// both settings parse the same way; quoted fields are always honored.
    pub fn lazy_quotes(mut self, lazy: bool) -> Self {
        self.lazy_quotes = lazy;
        self
    }

    /// Refill the current record's buffer in place on each scan.
    pub fn reuse_record(mut self, reuse: bool) -> Self {
        self.reuse_record = reuse;
        self
    }

    /// Strip leading whitespace from every field. Whitespace is removed
    /// before quote parsing, so `a, "b, c"` yields `["a", "b, c"]`; spaces
    /// inside quotes are kept.
    pub fn trim_leading_space(mut self, trim: bool) -> Self {
        self.trim_leading_space = trim;
        self
    }

    /// When set, a record that fails to parse is skipped and scanning goes
    /// on until end of input. Otherwise (the default) any error ends the
    /// scan and is reported by `error()`. I/O errors always end the scan.
    pub fn continue_on_error(mut self, continue_: bool) -> Self {
        self.continue_on_error = continue_;
        self
    }

    /// Discard the first record.
    pub fn skip_header_record(self) -> Self {
        self.skip_records(1)
    }

    /// Discard the first `count` records.
    pub fn skip_records(mut self, count: usize) -> Self {
        self.skip += count;
        self
    }

    pub(crate) fn reader_builder(&self) -> ::csv::ReaderBuilder {
        let mut builder = ::csv::ReaderBuilder::new();
        builder
            .has_headers(false)
            .flexible(true)
            .delimiter(self.comma)
            .comment(self.comment);
        builder
    }
}

pub(crate) type HeaderTransform = Box<dyn Fn(&str) -> String>;

/// Options for [`super::ColumnScanner`].
#[derive(Default)]
pub struct ColumnOptions {
    pub(crate) header_transform: Option<HeaderTransform>,
}

impl ColumnOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite every header name before the column index is built. Names
    /// passed to lookups are rewritten the same way.
    pub fn header_transform<F>(mut self, transform: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.header_transform = Some(Box::new(transform));
        self
    }

    /// Upper-case every header name.
    pub fn to_upper_header(self) -> Self {
        self.header_transform(str::to_uppercase)
    }
}

impl fmt::Debug for ColumnOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnOptions")
            .field("header_transform", &self.header_transform.is_some())
            .finish()
    }
}
