//! Hand-built DFA for numeric literal prefixes.
//!
//! # Shape
//!
//! ```text
//! Start --0--> AfterLeadingZero --b--> AfterZeroB --[01]-----> FinalBinary
//!   |                           --o--> AfterZeroO --[0-7]----> FinalOctal
//!   |                           --d--> AfterZeroD --[0-9]----> FinalDecimal
//!   |                           --h--> AfterZeroH --[0-9A-F]-> FinalHexadecimal
//!   |                           -[0-9]-----------------------> FinalDecimal
//!   +--[1-9]-------------------------------------------------> FinalDecimal
//! ```
//!
//! The table is addressed by [`CharClass`], but the four radix markers share
//! one class. The step out of `AfterLeadingZero` on a letter is therefore
//! taken by [`disambiguate_prefix`], keyed on the raw byte, before the table
//! is consulted.
//!
//! Failure is a [`Transition`] outcome, never a state.

use crate::class::CharClass;
use crate::error::ScanErrorKind;
use crate::token::TokenKind;

/// DFA progress through one literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ScanState {
    Start = 0,
    AfterLeadingZero = 1,
    AfterZeroH = 2,
    AfterZeroB = 3,
    AfterZeroO = 4,
    AfterZeroD = 5,
    FinalBinary = 6,
    FinalOctal = 7,
    FinalDecimal = 8,
    FinalHexadecimal = 9,
}

impl ScanState {
    /// Number of states (table height).
    pub const COUNT: usize = 10;

    /// All states in row order.
    pub const ALL: [ScanState; Self::COUNT] = [
        ScanState::Start,
        ScanState::AfterLeadingZero,
        ScanState::AfterZeroH,
        ScanState::AfterZeroB,
        ScanState::AfterZeroO,
        ScanState::AfterZeroD,
        ScanState::FinalBinary,
        ScanState::FinalOctal,
        ScanState::FinalDecimal,
        ScanState::FinalHexadecimal,
    ];

    /// Row index into the transition table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Final states can report a token. Reaching one does not stop the scan.
    #[inline]
    pub const fn is_final(self) -> bool {
        matches!(
            self,
            ScanState::FinalBinary
                | ScanState::FinalOctal
                | ScanState::FinalDecimal
                | ScanState::FinalHexadecimal
        )
    }
}

/// Outcome of feeding one byte to the DFA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Consume the byte and move to the state.
    Next(ScanState),
    /// The byte belongs to the next token: put it back and finalize.
    Stop,
    /// The literal is malformed.
    Reject,
}

const R: Transition = Transition::Reject;
const S: Transition = Transition::Stop;
const LZ: Transition = Transition::Next(ScanState::AfterLeadingZero);
const BIN: Transition = Transition::Next(ScanState::FinalBinary);
const OCT: Transition = Transition::Next(ScanState::FinalOctal);
const DEC: Transition = Transition::Next(ScanState::FinalDecimal);
const HEX: Transition = Transition::Next(ScanState::FinalHexadecimal);

/// `[state][class]` transition table.
#[rustfmt::skip]
static TRANSITIONS: [[Transition; CharClass::COUNT]; ScanState::COUNT] = [
    //                     0    1    2-7  8-9  bodh A-F  other
    /* Start            */ [LZ,  DEC, DEC, DEC, R,   R,   R],
    /* AfterLeadingZero */ [DEC, DEC, DEC, DEC, R,   R,   S],
    /* AfterZeroH       */ [HEX, HEX, HEX, HEX, S,   HEX, S],
    /* AfterZeroB       */ [BIN, BIN, S,   S,   S,   S,   S],
    /* AfterZeroO       */ [OCT, OCT, OCT, S,   S,   S,   S],
    /* AfterZeroD       */ [DEC, DEC, DEC, DEC, S,   S,   S],
    /* FinalBinary      */ [BIN, BIN, S,   S,   S,   S,   S],
    /* FinalOctal       */ [OCT, OCT, OCT, S,   S,   S,   S],
    /* FinalDecimal     */ [DEC, DEC, DEC, DEC, S,   S,   S],
    /* FinalHexadecimal */ [HEX, HEX, HEX, HEX, S,   HEX, S],
];

/// Look up the table edge for `(state, class)`.
///
/// The `AfterLeadingZero` row's letter column is never reached by the
/// scanner; letters there go through [`disambiguate_prefix`].
#[inline]
pub fn transition(state: ScanState, class: CharClass) -> Transition {
    TRANSITIONS[state.index()][class.index()]
}

/// Returns `true` if `byte`, read right after a leading `0`, is a radix
/// marker to be resolved by [`disambiguate_prefix`].
///
/// Every ASCII letter except the hex letters qualifies, so unsupported
/// markers like `x` are rejected instead of ending a decimal `0`.
#[inline]
pub fn is_radix_marker(byte: u8) -> bool {
    byte.is_ascii_alphabetic() && !matches!(crate::classify(byte), CharClass::HexLetter)
}

/// Resolve the raw radix marker after a leading `0`.
pub fn disambiguate_prefix(byte: u8) -> Result<ScanState, ScanErrorKind> {
    match byte {
        b'b' => Ok(ScanState::AfterZeroB),
        b'o' => Ok(ScanState::AfterZeroO),
        b'd' => Ok(ScanState::AfterZeroD),
        b'h' => Ok(ScanState::AfterZeroH),
        _ => Err(ScanErrorKind::UnknownRadixMarker {
            found: char::from(byte),
        }),
    }
}

/// Token kind for a literal that ends while the DFA is in `state`.
///
/// Shared by the end-of-input and overshoot paths. Prefix states with an
/// empty body resolve to their radix (`0b` is a binary zero). `Start` has
/// consumed nothing and yields `None`.
pub const fn finalize(state: ScanState) -> Option<TokenKind> {
    match state {
        ScanState::Start => None,
        ScanState::AfterLeadingZero | ScanState::AfterZeroD => Some(TokenKind::Decimal),
        ScanState::AfterZeroH => Some(TokenKind::Hexadecimal),
        ScanState::AfterZeroB => Some(TokenKind::Binary),
        ScanState::AfterZeroO => Some(TokenKind::Octal),
        ScanState::FinalBinary
        | ScanState::FinalOctal
        | ScanState::FinalDecimal
        | ScanState::FinalHexadecimal => Some(TokenKind::from_final_state(state)),
    }
}
