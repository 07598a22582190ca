//! Canonical successor relation and thematic stages.
//!
//! The King Wen ordering reads as a directed chain: each hexagram names the
//! situation that necessarily follows it, with a short rationale inherited
//! from the Sequence commentary. The 64 positions also partition into five
//! thematic stages, each spanning a fixed contiguous range.

#![deny(unsafe_code)]

mod tables;

use serde::{Deserialize, Serialize};

use hexagram_types::HexagramId;

/// One of the five thematic stages partitioning the King Wen sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Hexagrams 1-12.
    Creation,
    /// Hexagrams 13-24.
    Development,
    /// Hexagrams 25-36.
    Cultivation,
    /// Hexagrams 37-48.
    Relationship,
    /// Hexagrams 49-64.
    Transformation,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::Creation,
        Stage::Development,
        Stage::Cultivation,
        Stage::Relationship,
        Stage::Transformation,
    ];

    /// Inclusive id range this stage covers.
    pub fn range(self) -> (u8, u8) {
        match self {
            Stage::Creation => (1, 12),
            Stage::Development => (13, 24),
            Stage::Cultivation => (25, 36),
            Stage::Relationship => (37, 48),
            Stage::Transformation => (49, 64),
        }
    }

    /// Thematic label of the stage.
    pub fn theme(self) -> &'static str {
        match self {
            Stage::Creation => "creation and the laying of foundations",
            Stage::Development => "development and the meeting of needs",
            Stage::Cultivation => "self-cultivation and completion",
            Stage::Relationship => "relationship and harmony",
            Stage::Transformation => "transformation and fulfillment",
        }
    }
}

/// Canonical next hexagram in the King Wen chain.
///
/// `None` is a valid answer for an id outside the mapped region, never an
/// error; the shipped table happens to be complete, with 64 wrapping back
/// to 1.
pub fn successor_of(id: HexagramId) -> Option<HexagramId> {
    HexagramId::new(tables::SUCCESSOR[id.index()]).ok()
}

/// Stage containing `id`. Total over [1, 64].
pub fn stage_of(id: HexagramId) -> Stage {
    match id.get() {
        1..=12 => Stage::Creation,
        13..=24 => Stage::Development,
        25..=36 => Stage::Cultivation,
        37..=48 => Stage::Relationship,
        _ => Stage::Transformation,
    }
}

/// Rationale for the transition out of `id`, after the Sequence commentary.
pub fn necessity_of(id: HexagramId) -> Option<&'static str> {
    let text = tables::NECESSITY[id.index()];
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
