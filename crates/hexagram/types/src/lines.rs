use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::id::HexagramId;

/// Number of lines in a hexagram.
pub const LINE_COUNT: usize = 6;

/// One line of a hexagram: broken (yin) or solid (yang).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Yin,
    Yang,
}

impl Line {
    /// Yin becomes yang, yang becomes yin.
    pub fn inverted(self) -> Line {
        match self {
            Line::Yin => Line::Yang,
            Line::Yang => Line::Yin,
        }
    }

    pub fn is_yang(self) -> bool {
        matches!(self, Line::Yang)
    }
}

/// Ordered six-line pattern, bottom line first.
///
/// A `LineVector` always holds exactly six lines, and every six-line
/// pattern is one of the 64 canonical hexagrams, so [`LineVector::hexagram`]
/// is total. Fallible decoding of arbitrary input lives in
/// [`codec::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineVector([Line; LINE_COUNT]);

impl LineVector {
    pub const fn new(lines: [Line; LINE_COUNT]) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[Line; LINE_COUNT] {
        &self.0
    }

    /// Line at `position`, 1 (bottom) through 6 (top).
    pub fn line(&self, position: u8) -> Option<Line> {
        if (1..=LINE_COUNT as u8).contains(&position) {
            Some(self.0[(position - 1) as usize])
        } else {
            None
        }
    }

    /// Copy of this pattern with the line at `position` inverted.
    /// Returns `None` for positions outside [1, 6].
    pub fn with_line_inverted(self, position: u8) -> Option<Self> {
        if !(1..=LINE_COUNT as u8).contains(&position) {
            return None;
        }
        let mut lines = self.0;
        let idx = (position - 1) as usize;
        lines[idx] = lines[idx].inverted();
        Some(Self(lines))
    }

    /// Pattern with the line order reversed (top becomes bottom).
    pub fn reversed(self) -> Self {
        let mut lines = self.0;
        lines.reverse();
        Self(lines)
    }

    /// Pattern with every line inverted.
    pub fn inverted(self) -> Self {
        Self(self.0.map(Line::inverted))
    }

    /// Canonical id of this pattern. Total: the canonical table covers the
    /// whole six-line pattern space.
    pub fn hexagram(self) -> HexagramId {
        codec::id_of_mask(self.mask())
    }

    /// Bit `i` set means line `i + 1` (counting from the bottom) is yang.
    pub(crate) fn mask(self) -> u8 {
        self.0
            .iter()
            .enumerate()
            .fold(0, |mask, (i, line)| match line {
                Line::Yang => mask | (1 << i),
                Line::Yin => mask,
            })
    }

    pub(crate) fn from_mask(mask: u8) -> Self {
        let mut lines = [Line::Yin; LINE_COUNT];
        for (i, line) in lines.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                *line = Line::Yang;
            }
        }
        Self(lines)
    }
}

impl fmt::Display for LineVector {
    /// Renders bottom line first: yang as `1`, yin as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.0 {
            write!(f, "{}", if line.is_yang() { '1' } else { '0' })?;
        }
        Ok(())
    }
}
