//! Skip scanners: boundary finding for CQL values and identifiers.
//!
//! Each scanner takes the source text and a start offset known to point at
//! the first character of a token, and returns the exclusive end offset of
//! that token. No token representation is built; the value parser slices
//! `&text[idx..end]` and recurses on the sub-token.

use crate::chars::{is_blank_byte, is_identifier_byte};
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanErrorKind};

/// Bracket nesting depth for one value scan.
///
/// The three counters plus the in-string flag are the complete scan state.
/// Their joint "all zero" condition decides whether a closing bracket or an
/// unexpected byte ends the value, so it lives behind a single query.
#[derive(Clone, Copy, Debug, Default)]
struct Nesting {
    brace: u32,
    bracket: u32,
    paren: u32,
}

impl Nesting {
    /// Returns `true` when no bracket of any kind is open.
    fn is_top_level(&self) -> bool {
        self.brace == 0 && self.bracket == 0 && self.paren == 0
    }

    /// The counter matching a closing bracket byte.
    fn depth_mut(&mut self, closer: u8) -> &mut u32 {
        match closer {
            b'}' => &mut self.brace,
            b']' => &mut self.bracket,
            b')' => &mut self.paren,
            other => unreachable!("not a closing bracket byte: {other:#04x}"),
        }
    }
}

/// Returns the index of the first byte at or after `idx` that is not blank.
///
/// Blank means space, tab, or newline. Returns `text.len()` when everything
/// from `idx` on is blank; an `idx` already at or past the end is returned
/// unchanged. Never fails.
pub fn skip_spaces(text: &str, idx: usize) -> usize {
    let mut cursor = Cursor::new(text, idx);
    cursor.eat_while(is_blank_byte);
    cursor.pos()
}

/// Returns the exclusive end offset of the CQL value starting at `idx`.
///
/// A value is a quoted string (`'it''s'`), a bracketed collection of any of
/// the three kinds (`{..}`, `[..]`, `(..)`, freely nested, strings
/// included), or a bare run ended by the first blank or non-identifier byte.
/// A closing bracket whose counter is already zero belongs to the enclosing
/// collection and ends the value without being consumed. The returned offset
/// is the first byte *not* part of the value, so `&text[idx..end]` is
/// exactly the value's text.
///
/// # Errors
///
/// Fails when `idx` is at or past the end of the text, when the byte at
/// `idx` is blank (the caller must [`skip_spaces`] first), and when the
/// text ends inside a string or with a bracket still open.
pub fn skip_value(text: &str, idx: usize) -> Result<usize, ScanError> {
    let mut cursor = Cursor::new(text, idx);
    if cursor.is_eof() {
        return Err(ScanError::new(idx, ScanErrorKind::StartPastEnd));
    }
    if is_blank_byte(cursor.current()) {
        return Err(ScanError::new(idx, ScanErrorKind::StartOnBlank));
    }

    let mut nesting = Nesting::default();
    let mut in_string = false;

    while !cursor.is_eof() {
        if in_string {
            // Only the quote character is significant inside a string.
            cursor.eat_until(b'\'');
            if cursor.is_eof() {
                break;
            }
            if cursor.peek() == b'\'' {
                // Escaped quote; consume the pair and stay in the string.
                cursor.advance_n(2);
            } else {
                in_string = false;
                cursor.advance();
                if nesting.is_top_level() {
                    return Ok(cursor.pos());
                }
            }
            continue;
        }

        match cursor.current() {
            b'\'' => in_string = true,
            b'{' => nesting.brace += 1,
            b'[' => nesting.bracket += 1,
            b'(' => nesting.paren += 1,
            closer @ (b'}' | b']' | b')') => {
                let depth = nesting.depth_mut(closer);
                if *depth == 0 {
                    // Closer of the enclosing collection; not part of
                    // this value.
                    return Ok(cursor.pos());
                }
                *depth -= 1;
                if nesting.is_top_level() {
                    return Ok(cursor.pos() + 1);
                }
            }
            b => {
                if (is_blank_byte(b) || !is_identifier_byte(b)) && nesting.is_top_level() {
                    return Ok(cursor.pos());
                }
            }
        }
        cursor.advance();
    }

    if in_string {
        return Err(ScanError::new(cursor.pos(), ScanErrorKind::UnterminatedString));
    }
    if !nesting.is_top_level() {
        return Err(ScanError::new(cursor.pos(), ScanErrorKind::UnbalancedBrackets));
    }
    Ok(cursor.pos())
}

/// Returns the exclusive end offset of the CQL identifier starting at `idx`.
///
/// An unquoted identifier is a maximal run of identifier characters. A
/// quoted identifier starts with `"` and runs to the first `"` not
/// immediately followed by another `"` (a doubled `""` is an escaped quote,
/// consumed as literal content); the returned offset is just past the
/// closing quote.
///
/// # Errors
///
/// Fails when `idx` is at or past the end of the text, when the byte at
/// `idx` can begin neither form, and when a quoted identifier is still open
/// at the end of the text.
pub fn skip_identifier(text: &str, idx: usize) -> Result<usize, ScanError> {
    let mut cursor = Cursor::new(text, idx);
    if cursor.is_eof() {
        return Err(ScanError::new(idx, ScanErrorKind::StartPastEnd));
    }

    let first = cursor.current();
    if is_identifier_byte(first) {
        cursor.eat_while(is_identifier_byte);
        return Ok(cursor.pos());
    }
    if first != b'"' {
        return Err(ScanError::new(
            idx,
            ScanErrorKind::InvalidIdentifierStart { found: first },
        ));
    }

    cursor.advance();
    loop {
        cursor.eat_until(b'"');
        if cursor.is_eof() {
            return Err(ScanError::new(
                cursor.pos(),
                ScanErrorKind::UnterminatedQuotedIdentifier,
            ));
        }
        if cursor.peek() == b'"' {
            // Escaped double quote; consume the pair.
            cursor.advance_n(2);
        } else {
            cursor.advance();
            return Ok(cursor.pos());
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
