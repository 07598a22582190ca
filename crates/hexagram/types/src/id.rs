use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::HexagramError;

/// Identifier of one of the 64 canonical hexagrams, in King Wen order.
///
/// Construction validates the range, so every `HexagramId` in circulation
/// is known-good and all table lookups keyed by it are total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HexagramId(u8);

impl HexagramId {
    /// Number of canonical hexagrams.
    pub const COUNT: usize = 64;

    /// Validating constructor; ids live in [1, 64].
    pub fn new(id: u8) -> Result<Self, HexagramError> {
        if (1..=Self::COUNT as u8).contains(&id) {
            Ok(Self(id))
        } else {
            Err(HexagramError::InvalidId { id })
        }
    }

    /// Raw King Wen number, 1-based.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based index into the 64-entry tables.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All 64 ids in King Wen order.
    pub fn all() -> impl Iterator<Item = HexagramId> {
        (1..=Self::COUNT as u8).map(HexagramId)
    }

    /// Table-internal constructor for values the const tables guarantee valid.
    pub(crate) const fn from_table(id: u8) -> Self {
        Self(id)
    }
}

impl TryFrom<u8> for HexagramId {
    type Error = HexagramError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<HexagramId> for u8 {
    fn from(id: HexagramId) -> u8 {
        id.0
    }
}

impl fmt::Display for HexagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
