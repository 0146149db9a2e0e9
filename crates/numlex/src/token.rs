//! Token and position types produced and consumed by the scanner.

/// Starting location of a literal, supplied by the lexer driver.
///
/// The driver owns cursor and line/column tracking; the scanner only reads
/// this value and copies `line`/`column` onto whatever it returns. It never
/// recomputes them from `offset`.
///
/// # Example
///
/// ```
/// use numlex::ScanPosition;
///
/// let pos = ScanPosition::new(4, 2, 5);
/// assert_eq!(pos.offset, 4);
/// assert_eq!(pos.line, 2);
/// assert_eq!(pos.column, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanPosition {
    /// Byte offset of the literal's first character in the source buffer.
    /// The caller guarantees this points at an ASCII decimal digit.
    pub offset: usize,

    /// Line number of that character (1-based).
    pub line: u32,

    /// Column number of that character (1-based).
    pub column: u32,
}

impl ScanPosition {
    /// Creates a position from an offset and its line/column.
    #[inline]
    pub fn new(offset: usize, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Position at the start of a buffer, line 1 column 1.
    ///
    /// # Example
    ///
    /// ```
    /// use numlex::ScanPosition;
    ///
    /// assert_eq!(ScanPosition::start(), ScanPosition::new(0, 1, 1));
    /// ```
    #[inline]
    pub fn start() -> Self {
        Self::new(0, 1, 1)
    }
}

/// A successfully decoded numeric literal.
///
/// Exactly one variant is produced per scan. `Long` is an integer literal
/// carrying the `L` suffix; `Float` is only reachable from decimal literals.
/// Line and column are the literal's starting location as supplied by the
/// caller, never an intermediate position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumericToken {
    /// Plain integer literal: `42`, `017`, `0x1F`.
    Int {
        /// Decoded value.
        value: i64,
        /// Line of the literal's first character (1-based).
        line: u32,
        /// Column of the literal's first character (1-based).
        column: u32,
    },

    /// Integer literal with the long suffix: `123L`, `0xFFL`.
    Long {
        /// Decoded value.
        value: i64,
        /// Line of the literal's first character (1-based).
        line: u32,
        /// Column of the literal's first character (1-based).
        column: u32,
    },

    /// Decimal floating-point literal: `3.14`.
    Float {
        /// Decoded value.
        value: f64,
        /// Line of the literal's first character (1-based).
        line: u32,
        /// Column of the literal's first character (1-based).
        column: u32,
    },
}

impl NumericToken {
    /// Returns the line of the literal's first character.
    pub fn line(&self) -> u32 {
        match *self {
            NumericToken::Int { line, .. }
            | NumericToken::Long { line, .. }
            | NumericToken::Float { line, .. } => line,
        }
    }

    /// Returns the column of the literal's first character.
    pub fn column(&self) -> u32 {
        match *self {
            NumericToken::Int { column, .. }
            | NumericToken::Long { column, .. }
            | NumericToken::Float { column, .. } => column,
        }
    }
}
