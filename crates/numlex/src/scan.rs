//! The numeric literal scanner.
//!
//! This module contains [`scan_number`], the single operation this crate
//! exists for: recognizing one integer, long, or floating-point literal at
//! a given position in a source buffer and decoding its value.

use crate::classify::{digit_value, is_token_boundary};
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanErrorKind};
use crate::token::{NumericToken, ScanPosition};

/// The result of one scan attempt.
///
/// `skip` is produced on both success and failure: it is the number of
/// characters the scan consumed from the starting offset, and the driver is
/// expected to advance its own cursor by exactly that many characters before
/// lexing the next token. On failure it equals the index of the offending
/// character relative to the start of the literal; on success it is the
/// literal's full length, never including the terminating boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanOutcome {
    /// The decoded token, or the error that stopped the scan.
    pub result: Result<NumericToken, ScanError>,

    /// Characters consumed from the starting offset.
    pub skip: usize,
}

impl ScanOutcome {
    fn token(token: NumericToken, skip: usize) -> Self {
        Self {
            result: Ok(token),
            skip,
        }
    }

    fn error(kind: ScanErrorKind, pos: ScanPosition, skip: usize) -> Self {
        Self {
            result: Err(ScanError::new(kind, pos.line, pos.column)),
            skip,
        }
    }
}

/// Scans one numeric literal with the default boundary predicate.
///
/// Convenience wrapper around [`scan_number`] using
/// [`is_token_boundary`](crate::classify::is_token_boundary), which matches
/// C-style tokenization.
///
/// # Example
///
/// ```
/// use numlex::{scan_number_default, NumericToken, ScanPosition};
///
/// let outcome = scan_number_default("123L;", ScanPosition::start());
/// assert_eq!(outcome.skip, 4);
/// assert_eq!(
///     outcome.result,
///     Ok(NumericToken::Long { value: 123, line: 1, column: 1 })
/// );
/// ```
pub fn scan_number_default(source: &str, pos: ScanPosition) -> ScanOutcome {
    scan_number(source, pos, is_token_boundary)
}

/// Scans one numeric literal starting at `pos.offset`.
///
/// The caller guarantees that `source[pos.offset]` is an ASCII decimal
/// digit; `pos.line`/`pos.column` describe that character and pass through
/// to the returned token or error unchanged. `boundary` classifies the
/// characters that legally end a numeric or identifier token (whitespace
/// and end of input always do, whatever the predicate says).
///
/// # Recognized forms
///
/// - Decimal: `42`, `0`, and floats `3.14` (fraction only, no exponent)
/// - Octal: leading zero followed by a digit, `017`
/// - Hexadecimal: `0x1F` / `0X1f`, case-insensitive digits
/// - Long suffix: trailing `L` on any integer form, `123L`, `0xFFL`
///
/// A `.` in an octal or hex literal, an `L` on a float, a character that
/// fits none of the above, and an accumulator overflowing `i64` each stop
/// the scan with the corresponding [`ScanErrorKind`]. Failures are ordinary
/// values: the scanner never panics on malformed input and never retries;
/// recovery is the driver's job, using the returned skip count.
///
/// The function is pure. It holds no state across calls, mutates nothing,
/// and returns only owned values, so identical inputs always produce
/// identical outcomes.
pub fn scan_number<F>(source: &str, pos: ScanPosition, boundary: F) -> ScanOutcome
where
    F: Fn(char) -> bool,
{
    let mut cursor = Cursor::new(source, pos.offset);
    debug_assert!(
        cursor.current_char().is_ascii_digit(),
        "caller must position the scan on a decimal digit"
    );

    // Base detection, once, before the main loop.
    let mut base = 10u32;
    if cursor.current_char() == '0' && cursor.peek_char(1) != '\0' {
        match cursor.peek_char(1) {
            'x' | 'X' => {
                base = 16;
                cursor.advance();
                cursor.advance();
            }
            // "0." and "0" before a boundary stay decimal: the zero is the
            // first decimal digit.
            '.' => {}
            c if c.is_ascii_digit() => {
                base = 8;
                cursor.advance();
            }
            c if ends_token(c, &boundary) => {}
            c => {
                cursor.advance();
                return ScanOutcome::error(
                    ScanErrorKind::UnsupportedBasePrefix { found: c },
                    pos,
                    cursor.consumed(),
                );
            }
        }
    }

    let mut int_acc: i64 = 0;
    let mut frac_acc: f64 = 0.0;
    let mut frac_scale: f64 = 1.0;
    let mut is_float = false;
    let mut is_long = false;

    loop {
        let c = cursor.current_char();

        if ends_token(c, &boundary) {
            break;
        }

        if let Some(d) = digit_value(c, base) {
            if is_float {
                // Fractional position: first digit contributes d/base,
                // the next d/base^2, and so on.
                frac_scale /= base as f64;
                frac_acc += f64::from(d) * frac_scale;
            } else {
                int_acc = match int_acc
                    .checked_mul(i64::from(base))
                    .and_then(|v| v.checked_add(i64::from(d)))
                {
                    Some(v) => v,
                    None => {
                        return ScanOutcome::error(
                            ScanErrorKind::IntegerOverflow,
                            pos,
                            cursor.consumed(),
                        );
                    }
                };
            }
            cursor.advance();
            continue;
        }

        match c {
            '.' => {
                if base != 10 {
                    return ScanOutcome::error(
                        ScanErrorKind::UnsupportedFractionalBase { base },
                        pos,
                        cursor.consumed(),
                    );
                }
                // The digits seen so far become the integral part.
                is_float = true;
                frac_acc = int_acc as f64;
                cursor.advance();
            }
            'L' => {
                if is_float {
                    return ScanOutcome::error(
                        ScanErrorKind::LongSuffixOnFloat,
                        pos,
                        cursor.consumed(),
                    );
                }
                is_long = true;
                cursor.advance();
            }
            c => {
                return ScanOutcome::error(
                    ScanErrorKind::UnexpectedChar { found: c },
                    pos,
                    cursor.consumed(),
                );
            }
        }
    }

    let token = if is_float {
        NumericToken::Float {
            value: frac_acc,
            line: pos.line,
            column: pos.column,
        }
    } else if is_long {
        NumericToken::Long {
            value: int_acc,
            line: pos.line,
            column: pos.column,
        }
    } else {
        NumericToken::Int {
            value: int_acc,
            line: pos.line,
            column: pos.column,
        }
    };

    ScanOutcome::token(token, cursor.consumed())
}

/// End-of-input and whitespace always end the literal; everything else is
/// up to the caller's predicate.
#[inline]
fn ends_token<F: Fn(char) -> bool>(c: char, boundary: &F) -> bool {
    c == '\0' || c.is_whitespace() || boundary(c)
}
