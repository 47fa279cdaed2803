//! Boundary scanning for CQL literal text.
//!
//! A skip scanner used by value parsers to delimit sub-values before
//! recursively parsing them: given a source string and a byte offset known
//! to point at the start of a token, the scanners return the exclusive end
//! offset of that token without building a parse tree. The crate also
//! carries the quote/unquote transforms for single-quoted CQL strings.
//!
//! Scanning is a single linear pass tracking three bracket-nesting counters
//! and an in-string flag. The scanners validate as they go: an unterminated
//! string, an unbalanced bracket, or a start offset that violates the
//! contract surfaces as a [`ScanError`] rather than a truncated boundary.
//!
//! # Example
//!
//! Delimiting the first element of a collection literal:
//!
//! ```
//! use cql_scan_core::{skip_spaces, skip_value};
//!
//! let text = "{1, [2, 3], 'it''s'}";
//! assert_eq!(skip_value(text, 0), Ok(text.len()));
//!
//! let idx = skip_spaces(text, 1);
//! let end = skip_value(text, idx)?;
//! assert_eq!(&text[idx..end], "1");
//! # Ok::<(), cql_scan_core::ScanError>(())
//! ```

mod chars;
mod cursor;
mod error;
mod quoting;
mod scan;

pub use chars::{is_blank, is_identifier_char};
pub use error::{ScanError, ScanErrorKind};
pub use quoting::{is_quoted, quote, unquote};
pub use scan::{skip_identifier, skip_spaces, skip_value};
