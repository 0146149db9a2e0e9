//! Scanner error types.
//!
//! Malformed numeric text is a normal, recoverable outcome: every failure is
//! reported as a [`ScanError`] value and the scan's `skip` count still tells
//! the driver how far to resynchronize. Nothing here panics.

use thiserror::Error;

/// The closed set of ways a numeric literal scan can fail.
///
/// Each kind carries the structured fields a caller needs to build its own
/// diagnostics; the `Display` implementation is the default human-readable
/// rendering.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// A leading `0` is followed by a character that is neither a hex
    /// marker, a digit, a `.`, nor a token boundary.
    #[error("unsupported base prefix: '0' followed by '{found}'")]
    UnsupportedBasePrefix {
        /// The character found after the leading zero.
        found: char,
    },

    /// A `.` was encountered while scanning an octal or hexadecimal literal.
    #[error("float literal not supported in base-{base} literal")]
    UnsupportedFractionalBase {
        /// The base in effect when the `.` appeared (8 or 16).
        base: u32,
    },

    /// The long suffix `L` was applied to a literal already in
    /// floating-point mode.
    #[error("a fractional literal cannot carry the long suffix 'L'")]
    LongSuffixOnFloat,

    /// A character that is not a valid digit for the current base, not a
    /// recognized special character (`.`, `L`), and not a token boundary.
    #[error("unexpected character '{found}' in numeric literal")]
    UnexpectedChar {
        /// The offending character.
        found: char,
    },

    /// The integer accumulator exceeded the `i64` range. Overflow fails the
    /// scan rather than wrapping or saturating.
    #[error("integer literal out of range")]
    IntegerOverflow,
}

/// A scan failure with the location the literal started at.
///
/// `line` and `column` are carried through from the caller's
/// [`ScanPosition`](crate::ScanPosition) unchanged.
///
/// # Example
///
/// ```
/// use numlex::{ScanError, ScanErrorKind};
///
/// let err = ScanError::new(ScanErrorKind::UnexpectedChar { found: 'a' }, 3, 9);
/// assert_eq!(
///     err.to_string(),
///     "3:9: unexpected character 'a' in numeric literal"
/// );
/// ```
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{line}:{column}: {kind}")]
pub struct ScanError {
    /// What went wrong.
    pub kind: ScanErrorKind,

    /// Line the literal started on (1-based).
    pub line: u32,

    /// Column the literal started at (1-based).
    pub column: u32,
}

impl ScanError {
    /// Creates a scan error at the given starting location.
    #[inline]
    pub fn new(kind: ScanErrorKind, line: u32, column: u32) -> Self {
        Self { kind, line, column }
    }
}
