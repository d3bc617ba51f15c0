//! Radix classifier for numeric literal prefixes.
//!
//! A small hand-built DFA reads a literal byte-by-byte and reports whether
//! it is binary (`0b`), octal (`0o`), decimal (`0d` or bare digits), or
//! hexadecimal (`0h`). Values are never evaluated.
//!
//! # Layers
//!
//! - [`classify`] maps a byte to one of seven [`CharClass`] columns.
//! - [`dfa`] holds the constant transition table, the prefix
//!   disambiguator, and the unified `finalize` lookup.
//! - [`InputCursor`] is the caller-owned bounded buffer with one-step putback.
//! - [`scan`] / [`gettoken`] drive the DFA to a [`Token`] or [`TokenKind`].
//! - [`Tokenizer`] / [`tokenize`] split a buffer of blank-separated literals.
//!
//! # Example
//!
//! ```
//! use radix_lexer_core::{gettoken, InputCursor, TokenKind};
//!
//! let mut cursor = InputCursor::new("9x");
//! assert_eq!(gettoken(&mut cursor), TokenKind::Decimal);
//! assert_eq!(cursor.remaining(), b"x");
//! ```

mod class;
mod cursor;
pub mod dfa;
mod error;
mod scanner;
mod token;

pub use class::{classify, CharClass};
pub use cursor::{InputCursor, INPUT_CAPACITY, MAX_INPUT_LEN};
pub use dfa::{ScanState, Transition};
pub use error::{ScanError, ScanErrorKind};
pub use scanner::{gettoken, scan, tokenize, Tokenizer};
pub use token::{token_name, Span, Token, TokenKind};
