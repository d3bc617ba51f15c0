//! Byte classification for the transition table columns.

/// Equivalence class of a single input byte.
///
/// The discriminant is the column index into the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CharClass {
    /// `0`
    Zero = 0,
    /// `1`
    One = 1,
    /// `2` through `7`
    TwoToSeven = 2,
    /// `8` or `9`
    EightOrNine = 3,
    /// One of the radix markers `b`, `o`, `d`, `h`.
    PrefixLetter = 4,
    /// `A`-`F` or `a`-`f`, minus the lowercase markers `b` and `d`.
    HexLetter = 5,
    /// Everything else.
    Other = 6,
}

impl CharClass {
    /// Number of classes (table width).
    pub const COUNT: usize = 7;

    /// All classes in column order.
    pub const ALL: [CharClass; Self::COUNT] = [
        CharClass::Zero,
        CharClass::One,
        CharClass::TwoToSeven,
        CharClass::EightOrNine,
        CharClass::PrefixLetter,
        CharClass::HexLetter,
        CharClass::Other,
    ];

    /// Column index into the transition table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for the four digit columns.
    #[inline]
    pub const fn is_digit(self) -> bool {
        matches!(
            self,
            CharClass::Zero | CharClass::One | CharClass::TwoToSeven | CharClass::EightOrNine
        )
    }
}

/// Classify one byte.
///
/// Total over all 256 byte values. Arms are checked in priority order, so
/// `b` and `d` land in [`CharClass::PrefixLetter`] even though they are
/// also hex digits.
#[inline]
pub const fn classify(byte: u8) -> CharClass {
    match byte {
        b'0' => CharClass::Zero,
        b'1' => CharClass::One,
        b'2'..=b'7' => CharClass::TwoToSeven,
        b'8' | b'9' => CharClass::EightOrNine,
        b'b' | b'o' | b'd' | b'h' => CharClass::PrefixLetter,
        b'A'..=b'F' | b'a'..=b'f' => CharClass::HexLetter,
        _ => CharClass::Other,
    }
}
