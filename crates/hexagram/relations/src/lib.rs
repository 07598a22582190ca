//! Structural relationship derivation between hexagrams.
//!
//! Three fixed transformations of a hexagram's line pattern, each a total,
//! pure function over the 64 canonical ids:
//!
//! - [`mutual`]: the nuclear hexagram hidden inside the pattern
//! - [`reversed`]: the pattern read upside down
//! - [`opposite`]: the pattern with every line inverted
//!
//! All three derive their result from the codec tables alone; nothing here
//! holds state or can fail.

#![deny(unsafe_code)]

use hexagram_types::{codec, HexagramId, LineVector};

/// Mutual (nuclear) hexagram: lines 2 through 4 form the new lower trigram
/// and lines 3 through 5 the new upper trigram.
///
/// Total by construction: the extracted pattern is always one of the 64
/// canonical patterns. The two pure hexagrams (1 and 2) are their own
/// mutual.
pub fn mutual(id: HexagramId) -> HexagramId {
    let lines = *codec::encode(id).lines();
    LineVector::new([
        lines[1], lines[2], lines[3], // lower trigram from lines 2-4
        lines[2], lines[3], lines[4], // upper trigram from lines 3-5
    ])
    .hexagram()
}

/// Reversed hexagram: the pattern read from the other side, top line first.
///
/// An involution. The eight palindromic hexagrams (1, 2, 27, 28, 29, 30,
/// 61, 62) map to themselves; that is the documented behavior, not an error.
pub fn reversed(id: HexagramId) -> HexagramId {
    codec::encode(id).reversed().hexagram()
}

/// Opposite hexagram: every line inverted.
///
/// An involution with no fixed points: a pattern can never equal its own
/// inversion.
pub fn opposite(id: HexagramId) -> HexagramId {
    codec::encode(id).inverted().hexagram()
}
