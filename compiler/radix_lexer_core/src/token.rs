//! Token kinds, spans, and the token reporter.

use std::fmt;

use crate::dfa::ScanState;

/// Radix category of a scanned literal, or `Error`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `0b` prefix; body restricted to `0`/`1`.
    Binary,
    /// `0o` prefix; body restricted to `0`-`7`.
    Octal,
    /// Bare digits, a lone `0`, or the `0d` prefix.
    Decimal,
    /// `0h` prefix; body of digits and `A`-`F`/`a`-`f`.
    Hexadecimal,
    /// Malformed or unrecognized literal prefix.
    Error,
}

impl TokenKind {
    /// Report the token kind for a final DFA state.
    ///
    /// Any non-final state is a contract violation and reports `Error`.
    pub const fn from_final_state(state: ScanState) -> Self {
        match state {
            ScanState::FinalBinary => TokenKind::Binary,
            ScanState::FinalOctal => TokenKind::Octal,
            ScanState::FinalDecimal => TokenKind::Decimal,
            ScanState::FinalHexadecimal => TokenKind::Hexadecimal,
            _ => TokenKind::Error,
        }
    }

    /// Fixed display name for diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Binary => "BIN",
            TokenKind::Octal => "OCT",
            TokenKind::Decimal => "DEC",
            TokenKind::Hexadecimal => "HEX",
            TokenKind::Error => "ERROR",
        }
    }

    /// Numeric base of the category. `None` for `Error`.
    pub const fn radix(self) -> Option<u32> {
        match self {
            TokenKind::Binary => Some(2),
            TokenKind::Octal => Some(8),
            TokenKind::Decimal => Some(10),
            TokenKind::Hexadecimal => Some(16),
            TokenKind::Error => None,
        }
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        matches!(self, TokenKind::Error)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Display name of a token kind.
pub const fn token_name(kind: TokenKind) -> &'static str {
    kind.name()
}

/// Half-open byte range `start..end` into the cursor's input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.end <= self.start
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A scanned literal: its radix category and the bytes it consumed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}
