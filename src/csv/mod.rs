//! CSV scanning: raw records, named columns, and tagged structs.
//!
//! The splitting and quoting grammar is delegated to the `csv` crate.
//! [`Scanner`] yields each record as a list of fields, [`ColumnScanner`]
//! maps those fields to the names in the header record, and
//! [`StructScanner`] copies them into the tagged fields of a struct.

mod column_scanner;
mod options;
mod scanner;
mod struct_scanner;
mod trim;

pub use column_scanner::ColumnScanner;
pub use options::{ColumnOptions, FieldsPerRecord, Options};
pub use scanner::Scanner;
pub use struct_scanner::{StructScanner, Tag, Tagged};
