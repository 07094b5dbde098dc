//! # scanners-rs
//!
//! Scanners for text files that encode data as CSV, whitespace-separated
//! fields, or fixed-width columns.
//!
//! ## Overview
//!
//! Every scanner follows the same scan-loop shape:
//! - **Advance**: `scan()` moves to the next record and returns `false` at
//!   the end of input or on error
//! - **Read**: accessors expose the current record, line, or column values
//! - **Check**: the error accessor, consulted once after the loop, reports
//!   what ended it (`None` for a clean end of input)
//!
//! The scanners:
//! - [`csv::Scanner`]: delimited records, split by the `csv` crate
//! - [`csv::ColumnScanner`]: values addressed by header column name
//! - [`csv::StructScanner`]: values copied into tagged struct fields
//! - [`fields::Scanner`]: whitespace-separated fields
//! - [`fixedwidth::Scanner`]: values addressed by byte range or extractor
//!
//! ## Example
//!
//! ```
//! use scanners_rs::csv::{ColumnScanner, Scanner};
//!
//! let input = "first_name,last_name,username\nRob,Pike,rob\nKen,Thompson,ken\n";
//! let mut scanner = ColumnScanner::new(Scanner::new(input.as_bytes()))?;
//!
//! let mut usernames = Vec::new();
//! while scanner.scan() {
//!     usernames.push(scanner.column("username").to_string());
//! }
//! if let Some(err) = scanner.error() {
//!     panic!("{err}");
//! }
//!
//! assert_eq!(usernames, ["rob", "ken"]);
//! # Ok::<(), scanners_rs::Error>(())
//! ```

pub mod csv;
pub mod error;
pub mod fields;
pub mod fixedwidth;
pub mod lines;
pub mod source;

pub use error::{Error, Result};
pub use source::{LineSource, RecordSource};
