use std::io::Read;
use std::ops::{Deref, DerefMut};

use super::{ColumnScanner, Options, Scanner};
use crate::{Error, RecordSource};

/// Binds one string field of `T` to a column name.
pub struct Tag<T> {
    pub column: &'static str,
    pub set: fn(&mut T, String),
}

/// A record type whose string fields are bound to column names.
///
/// Fields without a tag are never touched by
/// [`StructScanner::populate`]. Implement with the [`tagged!`](crate::tagged)
/// macro:
///
/// ```
/// #[derive(Default)]
/// struct Person {
///     firstname: String,
///     lastname: String,
///     age: u32,
/// }
///
/// scanners_rs::tagged!(Person {
///     firstname => "first_name",
///     lastname => "last_name",
/// });
/// ```
pub trait Tagged: Sized + 'static {
    /// Tags in field declaration order.
    fn tags() -> &'static [Tag<Self>];
}

/// Implement [`Tagged`](crate::csv::Tagged) for a struct from
/// `field => "column"` pairs. Only `String` fields can be bound.
#[macro_export]
macro_rules! tagged {
    ($ty:ty { $($field:ident => $column:expr),* $(,)? }) => {
        impl $crate::csv::Tagged for $ty {
            fn tags() -> &'static [$crate::csv::Tag<Self>] {
                const TAGS: &[$crate::csv::Tag<$ty>] = &[
                    $($crate::csv::Tag {
                        column: $column,
                        set: |target: &mut $ty, value: String| target.$field = value,
                    }),*
                ];
                TAGS
            }
        }
    };
}

/// Populates tagged struct fields from the columns of each record.
///
/// Dereferences to its [`ColumnScanner`], so the scan loop, header, and
/// column lookups are all available directly.
///
/// ```
/// use scanners_rs::csv::{Options, StructScanner};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Person {
///     firstname: String,
///     lastname: String,
///     username: String,
/// }
///
/// scanners_rs::tagged!(Person {
///     firstname => "first_name",
///     lastname => "last_name",
///     username => "username",
/// });
///
/// let input = "first_name,last_name,username\n\"Rob\",\"Pike\",rob\n";
/// let mut scanner = StructScanner::new(input.as_bytes(), Options::new()).unwrap();
/// while scanner.scan() {
///     let mut p = Person::default();
///     scanner.populate(&mut p).unwrap();
///     assert_eq!(p.lastname, "Pike");
/// }
/// assert!(scanner.error().is_none());
/// ```
pub struct StructScanner<S> {
    columns: ColumnScanner<S>,
}

impl<R: Read> StructScanner<Scanner<R>> {
    /// Scan CSV from `reader`, taking the first record (after any skipped
    /// records) as the header.
    pub fn new(reader: R, options: Options) -> Result<Self, Error> {
        ColumnScanner::new(Scanner::with_options(reader, options)).map(Self::from_columns)
    }
}

impl<S: RecordSource> StructScanner<S> {
    pub fn from_columns(columns: ColumnScanner<S>) -> Self {
        Self { columns }
    }

    /// Copy the current record's values into the tagged fields of `target`.
    ///
    /// Tags with an empty column name or a name missing from the header are
    /// skipped, leaving those fields as they were. Fails with
    /// [`Error::NoRecord`] when no record is current.
    pub fn populate<T: Tagged>(&self, target: &mut T) -> Result<(), Error> {
        if !self.columns.has_record() {
            return Err(Error::NoRecord);
        }
        for tag in T::tags() {
            if tag.column.is_empty() || !self.columns.has_column(tag.column) {
                continue;
            }
            (tag.set)(target, self.columns.column(tag.column).to_string());
        }
        Ok(())
    }

    pub fn into_inner(self) -> ColumnScanner<S> {
        self.columns
    }
}

impl<S> Deref for StructScanner<S> {
    type Target = ColumnScanner<S>;

    fn deref(&self) -> &Self::Target {
        &self.columns
    }
}

impl<S> DerefMut for StructScanner<S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.columns
    }
}
