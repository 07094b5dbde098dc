use std::borrow::Cow;
use std::collections::HashMap;

use tracing::debug;

use super::{ColumnOptions, options::HeaderTransform};
use crate::{Error, RecordSource};

/// Maps the field values of each record to column names.
///
/// The first record of the source is taken as the header. When a name
/// repeats in the header, lookups resolve to its last occurrence.
///
/// ```
/// use scanners_rs::csv::{ColumnScanner, Scanner};
///
/// let input = "first_name,last_name,username\n\"Rob\",\"Pike\",rob\nKen,Thompson,ken\n";
/// let mut scanner = ColumnScanner::new(Scanner::new(input.as_bytes())).unwrap();
/// let mut names = Vec::new();
/// while scanner.scan() {
///     names.push(format!("{} {}", scanner.column("last_name"), scanner.column("first_name")));
/// }
/// assert!(scanner.error().is_none());
/// assert_eq!(names, ["Pike Rob", "Thompson Ken"]);
/// ```
pub struct ColumnScanner<S> {
    source: S,
    header: Vec<String>,
    index: HashMap<String, usize>,
    transform: Option<HeaderTransform>,
    scanned: bool,
    done: bool,
}

impl<S: RecordSource> ColumnScanner<S> {
    /// Read the header from `source`. Fails if the source is empty or errors
    /// on its first record.
    pub fn new(source: S) -> Result<Self, Error> {
        Self::with_options(source, ColumnOptions::default())
    }

    pub fn with_options(mut source: S, options: ColumnOptions) -> Result<Self, Error> {
        if !source.scan() {
            return Err(match source.into_error() {
                Some(e) => Error::Header(Box::new(e)),
                None => Error::EmptyInput,
            });
        }

        let transform = options.header_transform;
        let header: Vec<String> = source
            .record()
            .iter()
            .map(|name| match &transform {
                Some(f) => f(name.as_str()),
                None => name.clone(),
            })
            .collect();

        let mut index = HashMap::with_capacity(header.len());
        for (position, name) in header.iter().enumerate() {
            if let Some(previous) = index.insert(name.clone(), position) {
                debug!(column = %name, previous, position, "duplicate column name, using last");
            }
        }
        debug!(columns = header.len(), "read header");

        Ok(Self {
            source,
            header,
            index,
            transform,
            scanned: false,
            done: false,
        })
    }

    /// Advance to the next record.
    pub fn scan(&mut self) -> bool {
        if self.done {
            return false;
        }
        if !self.source.scan() {
            self.done = true;
            return false;
        }
        self.scanned = true;
        true
    }

    /// Column names in header order, after any header transform.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// The current record. Empty before the first `scan`.
    pub fn record(&self) -> &[String] {
        if self.scanned {
            self.source.record()
        } else {
            &[]
        }
    }

    /// Value of the named column in the current record.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a column of the header. Use
    /// [`column_err`](Self::column_err) for names that are not known ahead
    /// of time.
    pub fn column(&self, name: &str) -> &str {
        match self.lookup(name) {
            Ok(value) => value,
            Err(e) => panic!("{e}"),
        }
    }

    /// Value of the named column, or [`Error::ColumnNotFound`].
    pub fn column_err(&self, name: &str) -> Result<&str, Error> {
        self.lookup(name)
    }

    /// Whether a record is current, i.e. `scan` has returned `true` and the
    /// scan loop has not ended.
    pub fn has_record(&self) -> bool {
        self.scanned && !self.done
    }

    /// Whether `name` is a column of the header.
    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Position that lookups of `name` resolve to.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(&*self.key(name)).copied()
    }

    /// The error that ended scanning, or `None` after a clean end of input.
    pub fn error(&self) -> Option<&Error> {
        self.source.error()
    }

    /// Consume the scanner, returning the underlying source.
    pub fn into_inner(self) -> S {
        self.source
    }

    fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match &self.transform {
            Some(f) => Cow::Owned(f(name)),
            None => Cow::Borrowed(name),
        }
    }

    fn lookup(&self, name: &str) -> Result<&str, Error> {
        let position = self
            .index_of(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
        Ok(self
            .record()
            .get(position)
            .map(String::as_str)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::csv::{Options, Scanner};
    use std::io::{self, Read};

    const CANON: [&str; 4] = [
        "first_name,last_name,username",
        "\"Rob\",\"Pike\",rob",
        "Ken,Thompson,ken",
        "\"Robert\",\"Griesemer\",\"gri\"",
    ];

    #[derive(Debug, PartialEq)]
    struct User {
        first_name: String,
        last_name: String,
        username: String,
    }

    fn user(first_name: &str, last_name: &str, username: &str) -> User {
        User {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            username: username.to_string(),
        }
    }

    fn canon_users() -> Vec<User> {
        vec![
            user("Rob", "Pike", "rob"),
            user("Ken", "Thompson", "ken"),
            user("Robert", "Griesemer", "gri"),
        ]
    }

    fn scanner_for(lines: &[&str]) -> ColumnScanner<Scanner<io::Cursor<Vec<u8>>>> {
        let input = lines.join("\n").into_bytes();
        ColumnScanner::new(Scanner::new(io::Cursor::new(input))).unwrap()
    }

    fn scan_all_users<S: RecordSource>(scanner: &mut ColumnScanner<S>) -> Vec<User> {
        let header = scanner.header().to_vec();
        let mut users = Vec::new();
        while scanner.scan() {
            users.push(User {
                first_name: scanner.column(&header[0]).to_string(),
                last_name: scanner.column(&header[1]).to_string(),
                username: scanner.column(&header[2]).to_string(),
            });
        }
        users
    }

    struct ErrorReader;

    impl Read for ErrorReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("ERROR"))
        }
    }

    #[test]
    fn test_header_is_first_record() {
        let scanner = scanner_for(&CANON);
        assert_eq!(scanner.header(), ["first_name", "last_name", "username"]);
        assert!(scanner.record().is_empty());
    }

    #[test]
    fn test_read_columns() {
        let mut scanner = scanner_for(&CANON);
        let users = scan_all_users(&mut scanner);
        assert!(scanner.error().is_none());
        assert_eq!(users, canon_users());
    }

    #[test]
    fn test_cannot_read_header() {
        for _ in 0..2 {
            let result = ColumnScanner::new(Scanner::new(ErrorReader));
            let err = result.err().expect("construction should fail");
            assert!(matches!(err, Error::Header(_)));
            assert!(err.to_string().contains("could not read header"));
        }
    }

    #[test]
    fn test_empty_input_has_no_header() {
        let result = ColumnScanner::new(Scanner::new(io::empty()));
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_column_not_found_error() {
        let mut scanner = scanner_for(&CANON);
        assert!(scanner.scan());
        let err = scanner.column_err("nope").unwrap_err();
        assert!(matches!(err, Error::ColumnNotFound(ref name) if name == "nope"));
        assert_eq!(scanner.column_err("nope").unwrap_or_default(), "");
        assert_eq!(scanner.column_err("username").unwrap(), "rob");
    }

    #[test]
    #[should_panic(expected = "column not found")]
    fn test_column_not_found_panics() {
        let mut scanner = scanner_for(&CANON);
        scanner.scan();
        scanner.column("nope");
    }

    #[test]
    fn test_duplicate_column_names_use_last() {
        let mut scanner = scanner_for(&["Col1,Col2,Col2", "foo,bar,baz"]);
        assert_eq!(scanner.header(), ["Col1", "Col2", "Col2"]);
        assert_eq!(scanner.index_of("Col2"), Some(2));
        assert!(scanner.scan());
        assert_eq!(scanner.column("Col2"), "baz");
        assert_eq!(scanner.column("Col1"), "foo");
    }

    #[test]
    fn test_to_upper_header() {
        let mut lines = vec!["first_name,LAST_NAME,uSeRNaMe"];
        lines.extend_from_slice(&CANON[1..]);
        let input = lines.join("\n");
        let mut scanner = ColumnScanner::with_options(
            Scanner::new(input.as_bytes()),
            ColumnOptions::new().to_upper_header(),
        )
        .unwrap();
        assert_eq!(scanner.header(), ["FIRST_NAME", "LAST_NAME", "USERNAME"]);

        let mut users = Vec::new();
        while scanner.scan() {
            users.push(User {
                first_name: scanner.column("FIRST_NAME").to_string(),
                last_name: scanner.column("LAST_NAME").to_string(),
                username: scanner.column("USERNAME").to_string(),
            });
        }
        assert!(scanner.error().is_none());
        assert_eq!(users, canon_users());
    }

    #[test]
    fn test_header_transform_applies_to_lookups() {
        let input = "Id,Name\n7,seven\n";
        let mut scanner = ColumnScanner::with_options(
            Scanner::new(input.as_bytes()),
            ColumnOptions::new().header_transform(|name| name.to_lowercase()),
        )
        .unwrap();
        assert!(scanner.scan());
        assert_eq!(scanner.column("NAME"), "seven");
        assert_eq!(scanner.column("id"), "7");
        assert!(scanner.has_column("Id"));
    }

    #[test]
    fn test_short_record_yields_empty_value() {
        let input = "a,b,c\n1\n";
        let options = Options::new().fields_per_record(crate::csv::FieldsPerRecord::Any);
        let mut scanner =
            ColumnScanner::new(Scanner::with_options(input.as_bytes(), options)).unwrap();
        assert!(scanner.scan());
        assert_eq!(scanner.column("a"), "1");
        assert_eq!(scanner.column("c"), "");
    }

    #[test]
    fn test_skip_header_then_take_next_as_header() {
        let input = "# generated\nfirst,last\nRob,Pike\n";
        let options = Options::new()
            .fields_per_record(crate::csv::FieldsPerRecord::Any)
            .skip_header_record();
        let mut scanner =
            ColumnScanner::new(Scanner::with_options(input.as_bytes(), options)).unwrap();
        assert_eq!(scanner.header(), ["first", "last"]);
        assert!(scanner.scan());
        assert_eq!(scanner.column("last"), "Pike");
    }

    #[test]
    fn test_terminal_error_after_header() {
        let input = "a,b\n1,2\n3\n5,6\n";
        let mut scanner = scanner_for(&[input]);
        assert!(scanner.scan());
        assert!(!scanner.scan());
        assert!(matches!(scanner.error(), Some(Error::FieldCount { .. })));
        assert!(!scanner.scan());
    }

    #[test]
    fn test_scan_stays_false_after_end() {
        let mut scanner = scanner_for(&CANON);
        assert_eq!(scan_all_users(&mut scanner).len(), 3);
        assert!(!scanner.scan());
        assert!(!scanner.scan());
        assert!(scanner.error().is_none());
    }
}
