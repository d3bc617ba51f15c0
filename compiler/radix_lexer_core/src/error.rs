//! Structured reasons for an `Error` scan outcome.
//!
//! [`gettoken`](crate::gettoken) collapses all of these into
//! [`TokenKind::Error`](crate::TokenKind::Error); [`scan`](crate::scan)
//! keeps the reason and the consumed span for diagnostics.

use crate::token::Span;

/// A failed scan: what went wrong and which bytes were consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub span: Span,
}

impl ScanError {
    pub const fn new(kind: ScanErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    /// End of input before any byte was read.
    #[error("expected a numeric literal, found end of input")]
    EmptyInput,
    /// The first byte is not a digit.
    #[error("numeric literal cannot start with {found:?}")]
    LeadingNonDigit { found: char },
    /// A letter after `0` that is not `b`, `o`, `d`, or `h`.
    #[error("unknown radix marker {found:?} after `0` (expected `b`, `o`, `d`, or `h`)")]
    UnknownRadixMarker { found: char },
    /// A hex letter directly after `0`, without the `h` marker.
    #[error("hex digit {found:?} after `0` needs the `0h` prefix")]
    HexLetterAfterZero { found: char },
}
