//! 7-segment glyph table and encoder.
//!
//! Segment layout (standard convention):
//!
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD   dp
//! ```
//!
//! The glyph table covers the clock's full output alphabet: the ten digits
//! plus space (blank tens-of-hour in 12-hour mode).  The decimal point is
//! not part of any glyph — the multiplexer drives it from the per-digit dot
//! flag.

use crate::error::{Error, Result};

/// One of the eight drive lines of a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Segment {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    Dp = 7,
}

impl Segment {
    /// Bit position of this segment within a [`SegmentSet`].
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Bit-packed set of segments, one bit per [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SegmentSet(u8);

impl SegmentSet {
    pub const EMPTY: Self = Self(0);

    pub const fn contains(self, segment: Segment) -> bool {
        self.0 & segment.mask() != 0
    }

    pub const fn with(self, segment: Segment) -> Self {
        Self(self.0 | segment.mask())
    }

    /// Number of lit segments.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

// Segment masks, local shorthand for the glyph table below.
const A: u8 = Segment::A.mask();
const B: u8 = Segment::B.mask();
const C: u8 = Segment::C.mask();
const D: u8 = Segment::D.mask();
const E: u8 = Segment::E.mask();
const F: u8 = Segment::F.mask();
const G: u8 = Segment::G.mask();

/// Map a displayable character to the segments that must be lit.
///
/// Total over `'0'..='9'` and space; anything else is a contract violation
/// and fails with [`Error::UnsupportedGlyph`] — no silent degradation.
pub fn encode(ch: char) -> Result<SegmentSet> {
    let bits = match ch {
        ' ' => 0,
        '0' => A | B | C | D | E | F,
        '1' => B | C,
        '2' => A | B | D | E | G,
        '3' => A | B | C | D | G,
        '4' => B | C | F | G,
        '5' => A | C | D | F | G,
        '6' => A | C | D | E | F | G,
        '7' => A | B | C,
        '8' => A | B | C | D | E | F | G,
        '9' => A | B | C | D | F | G,
        other => return Err(Error::UnsupportedGlyph(other)),
    };
    Ok(SegmentSet(bits))
}
