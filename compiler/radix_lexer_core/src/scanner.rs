//! Scanner loop driving the DFA over an [`InputCursor`].
//!
//! One call scans one literal. The loop ends on end of input, on a
//! [`Transition::Stop`] (the byte is put back for the next call), or on a
//! failure. Reaching a final state does not end it: `0b101` keeps
//! consuming while the bytes are valid binary digits.

use tracing::{debug, trace};

use crate::class::classify;
use crate::cursor::InputCursor;
use crate::dfa::{
    disambiguate_prefix, finalize, is_radix_marker, transition, ScanState, Transition,
};
use crate::error::{ScanError, ScanErrorKind};
use crate::token::{Span, Token, TokenKind};

/// Scan one literal starting at the cursor's position.
///
/// On success the cursor sits just past the literal. On failure it sits
/// past the offending byte; failures are never rewound.
pub fn scan(cursor: &mut InputCursor) -> Result<Token, ScanError> {
    let start = cursor.pos();
    let mut state = ScanState::Start;

    loop {
        let Some(byte) = cursor.next_byte() else {
            return finish(state, Span::new(start, cursor.pos()));
        };

        if state == ScanState::AfterLeadingZero && is_radix_marker(byte) {
            match disambiguate_prefix(byte) {
                Ok(next) => {
                    trace!(?state, byte, ?next, "radix marker");
                    state = next;
                    continue;
                }
                Err(kind) => return Err(ScanError::new(kind, Span::new(start, cursor.pos()))),
            }
        }

        let class = classify(byte);
        let outcome = transition(state, class);
        trace!(?state, byte, ?class, ?outcome, "dfa step");

        match outcome {
            Transition::Next(next) => state = next,
            Transition::Stop => {
                cursor.putback();
                debug!(byte, pos = cursor.pos(), "put back overshoot byte");
                return finish(state, Span::new(start, cursor.pos()));
            }
            Transition::Reject => {
                let found = char::from(byte);
                // Only the Start and AfterLeadingZero rows hold Reject cells.
                let kind = if state == ScanState::Start {
                    ScanErrorKind::LeadingNonDigit { found }
                } else {
                    ScanErrorKind::HexLetterAfterZero { found }
                };
                return Err(ScanError::new(kind, Span::new(start, cursor.pos())));
            }
        }
    }
}

fn finish(state: ScanState, span: Span) -> Result<Token, ScanError> {
    match finalize(state) {
        Some(kind) => {
            debug!(%kind, %span, "token");
            Ok(Token::new(kind, span))
        }
        None => Err(ScanError::new(ScanErrorKind::EmptyInput, span)),
    }
}

/// Scan one literal and report only its kind.
///
/// Callable repeatedly: bytes left unread (including a put-back byte) are
/// available to the next call.
pub fn gettoken(cursor: &mut InputCursor) -> TokenKind {
    match scan(cursor) {
        Ok(token) => token.kind,
        Err(err) => {
            debug!(%err, "scan failed");
            TokenKind::Error
        }
    }
}

/// Iterator over blank-separated literals in a cursor.
///
/// Failed scans are yielded as [`TokenKind::Error`] tokens spanning the
/// consumed bytes. Every yielded token consumes at least one byte.
pub struct Tokenizer<'c> {
    cursor: &'c mut InputCursor,
}

impl<'c> Tokenizer<'c> {
    pub fn new(cursor: &'c mut InputCursor) -> Self {
        Self { cursor }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.cursor.eat_blanks();
        if self.cursor.is_eof() {
            return None;
        }
        Some(match scan(self.cursor) {
            Ok(token) => token,
            Err(err) => Token::new(TokenKind::Error, err.span),
        })
    }
}

/// Tokenize a whole string of blank-separated literals.
///
/// Input past [`MAX_INPUT_LEN`](crate::MAX_INPUT_LEN) bytes is ignored.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut cursor = InputCursor::new(text);
    Tokenizer::new(&mut cursor).collect()
}
