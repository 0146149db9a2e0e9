//! Character classification for numeric scanning.
//!
//! These helpers decide which characters count as digits for a given base
//! and which characters legally end a numeric or identifier token.

/// Checks if a character is a valid digit in the given numeric base.
///
/// Hex digits are case-insensitive.
///
/// # Arguments
///
/// * `c` - The character to check
/// * `base` - The numeric base (8, 10, or 16)
///
/// # Example
///
/// ```
/// use numlex::classify::is_digit_in_base;
///
/// assert!(is_digit_in_base('7', 8));
/// assert!(!is_digit_in_base('8', 8));
/// assert!(is_digit_in_base('9', 10));
/// assert!(is_digit_in_base('f', 16));
/// assert!(is_digit_in_base('F', 16));
/// assert!(!is_digit_in_base('g', 16));
/// ```
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    digit_value(c, base).is_some()
}

/// Returns the numeric value of a digit character in the given base, or
/// `None` if the character is not a digit of that base.
///
/// # Example
///
/// ```
/// use numlex::classify::digit_value;
///
/// assert_eq!(digit_value('7', 8), Some(7));
/// assert_eq!(digit_value('8', 8), None);
/// assert_eq!(digit_value('a', 16), Some(10));
/// assert_eq!(digit_value('F', 16), Some(15));
/// ```
pub fn digit_value(c: char, base: u32) -> Option<u32> {
    debug_assert!(base == 8 || base == 10 || base == 16);
    c.to_digit(base)
}

/// Checks if a character legally ends a numeric or identifier token.
///
/// This is the default boundary predicate handed to
/// [`scan_number`](crate::scan_number): whitespace and any character that
/// cannot continue a numeric or identifier token (alphanumerics, `_`, and
/// `.` continue one). The NUL sentinel used for end-of-input also counts.
///
/// # Example
///
/// ```
/// use numlex::classify::is_token_boundary;
///
/// assert!(is_token_boundary(' '));
/// assert!(is_token_boundary(';'));
/// assert!(is_token_boundary('+'));
/// assert!(is_token_boundary('\0'));
/// assert!(!is_token_boundary('a'));
/// assert!(!is_token_boundary('3'));
/// assert!(!is_token_boundary('_'));
/// assert!(!is_token_boundary('.'));
/// ```
pub fn is_token_boundary(c: char) -> bool {
    if c == '\0' || c.is_whitespace() {
        return true;
    }
    !(c.is_alphanumeric() || c == '_' || c == '.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_digits() {
        for c in '0'..='9' {
            assert!(is_digit_in_base(c, 10));
        }
        assert!(!is_digit_in_base('a', 10));
        assert!(!is_digit_in_base(' ', 10));
    }

    #[test]
    fn test_octal_digits() {
        for c in '0'..='7' {
            assert!(is_digit_in_base(c, 8));
        }
        assert!(!is_digit_in_base('8', 8));
        assert!(!is_digit_in_base('9', 8));
    }

    #[test]
    fn test_hex_digits_both_cases() {
        assert_eq!(digit_value('a', 16), Some(10));
        assert_eq!(digit_value('A', 16), Some(10));
        assert_eq!(digit_value('f', 16), Some(15));
        assert_eq!(digit_value('F', 16), Some(15));
        assert_eq!(digit_value('0', 16), Some(0));
        assert_eq!(digit_value('g', 16), None);
        assert_eq!(digit_value('G', 16), None);
    }

    #[test]
    fn test_boundary_punctuation() {
        for c in [';', ',', ')', '(', '+', '-', '*', '/', '=', '<', '>'] {
            assert!(is_token_boundary(c), "expected '{c}' to end a token");
        }
    }

    #[test]
    fn test_boundary_excludes_token_continuations() {
        for c in ['a', 'Z', '0', '9', '_', '.'] {
            assert!(!is_token_boundary(c), "'{c}' must not end a token");
        }
    }
}
