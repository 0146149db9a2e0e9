//! Character cursor over a literal's tail.
//!
//! The scanner walks the source from the literal's first character onward;
//! this cursor owns that traversal and counts the characters it consumes,
//! which becomes the `skip` value the driver resynchronizes with. Line and
//! column are deliberately not tracked here: the driver supplies the
//! literal's starting location, and the scanner never reports any other.

/// A cursor over the remaining source text, starting at a literal.
///
/// Returns the NUL character (`'\0'`) as an end-of-input sentinel, so the
/// scan loop can treat exhaustion like any other token boundary.
///
/// # Example
///
/// ```
/// use numlex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("42;", 0);
/// assert_eq!(cursor.current_char(), '4');
/// cursor.advance();
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ';');
/// assert_eq!(cursor.consumed(), 2);
/// ```
pub struct Cursor<'a> {
    /// The source text from the literal's first character to end of buffer.
    tail: &'a str,

    /// Current byte position within `tail`.
    position: usize,

    /// Characters consumed so far.
    consumed: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor over `source` starting at byte offset `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` is out of bounds or not a character boundary. The
    /// scanner's caller contract (the offset points at an ASCII digit)
    /// rules both out.
    pub fn new(source: &'a str, start: usize) -> Self {
        Self {
            tail: &source[start..],
            position: 0,
            consumed: 0,
        }
    }

    /// Returns the character at the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character `offset` bytes ahead of the cursor, or `'\0'`
    /// past the end of input.
    ///
    /// Byte offsets and character offsets coincide for the ASCII characters
    /// a numeric literal is made of; peeking is only ever done across them.
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.tail.len() {
            return '\0';
        }

        // Fast path for ASCII (always hit while inside a literal)
        let b = self.tail.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.tail[pos..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor one character. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.position >= self.tail.len() {
            return;
        }

        let b = self.tail.as_bytes()[self.position];
        if b < 128 {
            self.position += 1;
        } else if let Some(c) = self.tail[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
        self.consumed += 1;
    }

    /// Returns true if the cursor has reached the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.tail.len()
    }

    /// Returns the number of characters consumed since construction.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_offset() {
        let cursor = Cursor::new("x = 42;", 4);
        assert_eq!(cursor.current_char(), '4');
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn test_advance_counts_characters() {
        let mut cursor = Cursor::new("123", 0);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.consumed(), 2);
        assert_eq!(cursor.current_char(), '3');
    }

    #[test]
    fn test_end_of_input_sentinel() {
        let mut cursor = Cursor::new("7", 0);
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');

        // Advancing past the end neither moves nor counts.
        cursor.advance();
        assert_eq!(cursor.consumed(), 1);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let cursor = Cursor::new("0x1F", 0);
        assert_eq!(cursor.peek_char(0), '0');
        assert_eq!(cursor.peek_char(1), 'x');
        assert_eq!(cursor.peek_char(3), 'F');
        assert_eq!(cursor.peek_char(4), '\0');
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn test_non_ascii_after_literal() {
        // A literal can be terminated by a non-ASCII character; the cursor
        // must still report it without slicing mid-codepoint.
        let mut cursor = Cursor::new("12π", 0);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_char(), 'π');
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.consumed(), 3);
    }
}
