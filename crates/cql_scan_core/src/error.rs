//! Scan fault type.
//!
//! The scanners never guess or recover: malformed input surfaces immediately
//! as a [`ScanError`] and no boundary is returned. The caller decides whether
//! to retry at a different offset, abort, or report a syntax error.

use thiserror::Error;

/// Malformed input at a scan position.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("{kind} at byte {pos}")]
pub struct ScanError {
    /// Byte offset the fault was detected at: the scan start for
    /// precondition violations, the end of input for unterminated forms.
    pub pos: usize,
    /// What made the input malformed.
    pub kind: ScanErrorKind,
}

impl ScanError {
    pub(crate) fn new(pos: usize, kind: ScanErrorKind) -> Self {
        Self { pos, kind }
    }
}

/// What made the input malformed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ScanErrorKind {
    /// The scan started at or past the end of the input.
    #[error("scan started past the end of input")]
    StartPastEnd,
    /// A value scan started on a blank character; callers must skip
    /// whitespace first.
    #[error("scan started on a blank character")]
    StartOnBlank,
    /// A single-quoted string was still open when the input ended.
    #[error("unterminated single-quoted string")]
    UnterminatedString,
    /// One or more brackets were still open when the input ended.
    #[error("unbalanced brackets")]
    UnbalancedBrackets,
    /// A double-quoted identifier was still open when the input ended.
    #[error("unterminated double-quoted identifier")]
    UnterminatedQuotedIdentifier,
    /// An identifier scan started on a byte that can begin neither an
    /// unquoted nor a quoted identifier.
    #[error("invalid identifier start byte {found:#04x}")]
    InvalidIdentifierStart {
        /// The offending byte.
        found: u8,
    },
}
