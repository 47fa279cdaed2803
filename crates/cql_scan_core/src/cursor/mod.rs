//! Byte cursor over CQL literal text.
//!
//! The cursor advances byte-by-byte from a caller-supplied start offset.
//! `current()` is bounds-checked and returns `0x00` at or past the end of
//! the input, so scanning loops terminate on the same sentinel contract a
//! padded buffer would provide, without copying the input. An interior NUL
//! byte also reads as `0x00`; [`Cursor::is_eof`] distinguishes the two.

/// Byte cursor with sentinel-style EOF semantics.
///
/// Cheap to construct per scan call: holds only the borrowed bytes and a
/// position. The cursor is [`Copy`], enabling cheap state snapshots.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `text` positioned at byte offset `pos`.
    ///
    /// `pos` may be at or past the end of `text`; the cursor then starts
    /// at EOF.
    pub(crate) fn new(text: &'a str, pos: usize) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(0)
    }

    /// Returns the byte one position ahead, or `0x00` past the end.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.bytes.get(self.pos + 1).copied().unwrap_or(0)
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Returns `true` once the position has reached the end of the input.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false` so the EOF byte stops the loop. This
    /// holds for every predicate in [`crate::chars`].
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance until `byte` is found or EOF is reached, whichever is first.
    ///
    /// SIMD-accelerated search; the cursor lands on the found byte, or at
    /// EOF when the rest of the input does not contain it.
    pub(crate) fn eat_until(&mut self, byte: u8) {
        let Some(remaining) = self.bytes.get(self.pos..) else {
            return;
        };
        match memchr::memchr(byte, remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.bytes.len(),
        }
    }
}
