//! numlex - Numeric Literal Scanner
//!
//! This crate recognizes and decodes one C-style numeric literal out of a
//! source buffer: a decimal, octal, or hexadecimal integer, an integer with
//! the `L` long suffix, or a decimal floating-point literal. It is the
//! numeric-literal stage of a lexer, packaged as a pure function so the
//! surrounding driver stays in charge of cursor movement and location
//! tracking.
//!
//! # Example Usage
//!
//! ```
//! use numlex::{scan_number_default, NumericToken, ScanPosition};
//!
//! let source = "count = 0x2A;";
//! // The driver has already determined that offset 8 holds a digit and
//! // that it sits at line 1, column 9.
//! let outcome = scan_number_default(source, ScanPosition::new(8, 1, 9));
//!
//! assert_eq!(
//!     outcome.result,
//!     Ok(NumericToken::Int { value: 42, line: 1, column: 9 })
//! );
//! // The driver advances its cursor past the literal.
//! assert_eq!(outcome.skip, 4);
//! ```
//!
//! # Contract with the driver
//!
//! The caller guarantees the starting offset points at an ASCII decimal
//! digit, and supplies the line/column it tracked for that offset; both are
//! copied onto the result verbatim. Independently of success or failure the
//! outcome carries a `skip` count, and the driver is expected to advance by
//! exactly that many characters before continuing to lex. A malformed
//! literal is therefore non-fatal to the overall lex pass: record the
//! [`ScanError`], skip, and keep going.
//!
//! # Module Structure
//!
//! - [`scan`] - The scanner state machine and [`ScanOutcome`]
//! - [`token`] - [`NumericToken`] and [`ScanPosition`]
//! - [`error`] - [`ScanError`] and its closed [`ScanErrorKind`] set
//! - [`cursor`] - Character cursor over the literal's tail
//! - [`classify`] - Digit and token-boundary classification
//!
//! # Literal Forms
//!
//! | Form        | Example        | Token    |
//! |-------------|----------------|----------|
//! | Decimal     | `42`, `0`      | `Int`    |
//! | Octal       | `017`          | `Int`    |
//! | Hexadecimal | `0x1F`, `0X1f` | `Int`    |
//! | Long        | `123L`, `0xFFL`| `Long`   |
//! | Float       | `3.14`, `0.5`  | `Float`  |
//!
//! Floats are decimal-only; a fractional part in an octal or hex literal is
//! an error, as is the `L` suffix on a float. Integer values that exceed
//! the `i64` range fail the scan rather than wrapping.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod error;
pub mod scan;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use classify::{digit_value, is_digit_in_base, is_token_boundary};
pub use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind};
pub use scan::{scan_number, scan_number_default, ScanOutcome};
pub use token::{NumericToken, ScanPosition};
