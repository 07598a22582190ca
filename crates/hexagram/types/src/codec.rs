//! Bidirectional mapping between hexagram ids and six-line patterns.
//!
//! The canonical table is a compile-time constant; the reverse index is
//! derived from it at compile time as well, so decoding never allocates and
//! the bijection can be checked exhaustively in tests.

use crate::error::HexagramError;
use crate::id::HexagramId;
use crate::lines::{Line, LineVector, LINE_COUNT};

/// Canonical line patterns in King Wen order, one entry per id.
/// Bit `i` set means line `i + 1` (counting from the bottom) is yang.
const CANONICAL_BITS: [u8; HexagramId::COUNT] = [
    0b111111, //  1 Qian (The Creative)
    0b000000, //  2 Kun (The Receptive)
    0b010001, //  3 Zhun (Difficulty at the Beginning)
    0b100010, //  4 Meng (Youthful Folly)
    0b010111, //  5 Xu (Waiting)
    0b111010, //  6 Song (Conflict)
    0b000010, //  7 Shi (The Army)
    0b010000, //  8 Bi (Holding Together)
    0b110111, //  9 Xiao Chu (Small Taming)
    0b111011, // 10 Lu (Treading)
    0b000111, // 11 Tai (Peace)
    0b111000, // 12 Pi (Standstill)
    0b111101, // 13 Tong Ren (Fellowship)
    0b101111, // 14 Da You (Great Possession)
    0b000100, // 15 Qian (Modesty)
    0b001000, // 16 Yu (Enthusiasm)
    0b011001, // 17 Sui (Following)
    0b100110, // 18 Gu (Work on the Decayed)
    0b000011, // 19 Lin (Approach)
    0b110000, // 20 Guan (Contemplation)
    0b101001, // 21 Shi He (Biting Through)
    0b100101, // 22 Bi (Grace)
    0b100000, // 23 Bo (Splitting Apart)
    0b000001, // 24 Fu (Return)
    0b111001, // 25 Wu Wang (Innocence)
    0b100111, // 26 Da Chu (Great Taming)
    0b100001, // 27 Yi (Nourishment)
    0b011110, // 28 Da Guo (Great Exceeding)
    0b010010, // 29 Kan (The Abysmal)
    0b101101, // 30 Li (The Clinging)
    0b011100, // 31 Xian (Influence)
    0b001110, // 32 Heng (Duration)
    0b111100, // 33 Dun (Retreat)
    0b001111, // 34 Da Zhuang (Great Power)
    0b101000, // 35 Jin (Progress)
    0b000101, // 36 Ming Yi (Darkening of the Light)
    0b110101, // 37 Jia Ren (The Family)
    0b101011, // 38 Kui (Opposition)
    0b010100, // 39 Jian (Obstruction)
    0b001010, // 40 Xie (Deliverance)
    0b100011, // 41 Sun (Decrease)
    0b110001, // 42 Yi (Increase)
    0b011111, // 43 Guai (Breakthrough)
    0b111110, // 44 Gou (Coming to Meet)
    0b011000, // 45 Cui (Gathering Together)
    0b000110, // 46 Sheng (Pushing Upward)
    0b011010, // 47 Kun (Oppression)
    0b010110, // 48 Jing (The Well)
    0b011101, // 49 Ge (Revolution)
    0b101110, // 50 Ding (The Cauldron)
    0b001001, // 51 Zhen (The Arousing)
    0b100100, // 52 Gen (Keeping Still)
    0b110100, // 53 Jian (Development)
    0b001011, // 54 Gui Mei (The Marrying Maiden)
    0b001101, // 55 Feng (Abundance)
    0b101100, // 56 Lu (The Wanderer)
    0b110110, // 57 Xun (The Gentle)
    0b011011, // 58 Dui (The Joyous)
    0b110010, // 59 Huan (Dispersion)
    0b010011, // 60 Jie (Limitation)
    0b110011, // 61 Zhong Fu (Inner Truth)
    0b001100, // 62 Xiao Guo (Small Exceeding)
    0b010101, // 63 Ji Ji (After Completion)
    0b101010, // 64 Wei Ji (Before Completion)
];

/// Traditional names, romanized with a short translation.
const NAMES: [&str; HexagramId::COUNT] = [
    "Qian (The Creative)",
    "Kun (The Receptive)",
    "Zhun (Difficulty at the Beginning)",
    "Meng (Youthful Folly)",
    "Xu (Waiting)",
    "Song (Conflict)",
    "Shi (The Army)",
    "Bi (Holding Together)",
    "Xiao Chu (Small Taming)",
    "Lu (Treading)",
    "Tai (Peace)",
    "Pi (Standstill)",
    "Tong Ren (Fellowship)",
    "Da You (Great Possession)",
    "Qian (Modesty)",
    "Yu (Enthusiasm)",
    "Sui (Following)",
    "Gu (Work on the Decayed)",
    "Lin (Approach)",
    "Guan (Contemplation)",
    "Shi He (Biting Through)",
    "Bi (Grace)",
    "Bo (Splitting Apart)",
    "Fu (Return)",
    "Wu Wang (Innocence)",
    "Da Chu (Great Taming)",
    "Yi (Nourishment)",
    "Da Guo (Great Exceeding)",
    "Kan (The Abysmal)",
    "Li (The Clinging)",
    "Xian (Influence)",
    "Heng (Duration)",
    "Dun (Retreat)",
    "Da Zhuang (Great Power)",
    "Jin (Progress)",
    "Ming Yi (Darkening of the Light)",
    "Jia Ren (The Family)",
    "Kui (Opposition)",
    "Jian (Obstruction)",
    "Xie (Deliverance)",
    "Sun (Decrease)",
    "Yi (Increase)",
    "Guai (Breakthrough)",
    "Gou (Coming to Meet)",
    "Cui (Gathering Together)",
    "Sheng (Pushing Upward)",
    "Kun (Oppression)",
    "Jing (The Well)",
    "Ge (Revolution)",
    "Ding (The Cauldron)",
    "Zhen (The Arousing)",
    "Gen (Keeping Still)",
    "Jian (Development)",
    "Gui Mei (The Marrying Maiden)",
    "Feng (Abundance)",
    "Lu (The Wanderer)",
    "Xun (The Gentle)",
    "Dui (The Joyous)",
    "Huan (Dispersion)",
    "Jie (Limitation)",
    "Zhong Fu (Inner Truth)",
    "Xiao Guo (Small Exceeding)",
    "Ji Ji (After Completion)",
    "Wei Ji (Before Completion)",
];

/// Reverse index: pattern mask to King Wen number. Because the 64 canonical
/// patterns are pairwise distinct they cover the whole six-bit space, making
/// the index total.
const REVERSE: [u8; 64] = build_reverse();

const fn build_reverse() -> [u8; 64] {
    let mut reverse = [0u8; 64];
    let mut i = 0;
    while i < HexagramId::COUNT {
        reverse[CANONICAL_BITS[i] as usize] = (i as u8) + 1;
        i += 1;
    }
    reverse
}

/// Line pattern for `id`.
pub fn encode(id: HexagramId) -> LineVector {
    LineVector::from_mask(CANONICAL_BITS[id.index()])
}

/// Decode a line pattern back to its canonical id.
///
/// Fails with [`HexagramError::UnknownPattern`] when `lines` does not hold
/// exactly six lines; every full six-line pattern is canonical.
pub fn decode(lines: &[Line]) -> Result<HexagramId, HexagramError> {
    let lines: [Line; LINE_COUNT] = lines
        .try_into()
        .map_err(|_| HexagramError::UnknownPattern { lines: lines.len() })?;
    Ok(LineVector::new(lines).hexagram())
}

/// Traditional name of `id`.
pub fn name(id: HexagramId) -> &'static str {
    NAMES[id.index()]
}

pub(crate) fn id_of_mask(mask: u8) -> HexagramId {
    HexagramId::from_table(REVERSE[(mask & 0b111111) as usize])
}
