//! Character classes for CQL literal text.
//!
//! Two fixed ASCII sets drive the scanners: identifier characters
//! (`[0-9a-zA-Z-+._&]`) and blanks (space, tab, newline). The byte-level
//! predicates map `0x00` to `false`, so the cursor's EOF byte naturally
//! terminates `eat_while` loops.

/// Lookup table for identifier bytes: `[0-9a-zA-Z-+._&]`.
///
/// Built at compile time; one load per byte in the scanner's hottest loop.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENTIFIER_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'-' | b'+' | b'.' | b'_' | b'&'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is valid in an unquoted identifier.
#[inline]
pub(crate) fn is_identifier_byte(b: u8) -> bool {
    IS_IDENTIFIER_TABLE[b as usize]
}

/// Returns `true` if `b` is a blank byte (space, tab, or newline).
#[inline]
pub(crate) fn is_blank_byte(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n')
}

/// Returns `true` if `c` is valid in an unquoted CQL identifier.
///
/// The set is fixed and ASCII-only: digits, upper and lower letters, and
/// `- + . _ &`. Every other codepoint, ASCII or not, is rejected.
#[inline]
pub fn is_identifier_char(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_identifier_byte)
}

/// Returns `true` if `c` is a blank character (space, tab, or newline).
///
/// Note that carriage return is not in the set.
#[inline]
pub fn is_blank(c: char) -> bool {
    u8::try_from(c).is_ok_and(is_blank_byte)
}

#[cfg(test)]
mod tests;
