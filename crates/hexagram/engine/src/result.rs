use serde::{Deserialize, Serialize};

use hexagram_elements::{ElementTag, Season};
use hexagram_sequence::Stage;
use hexagram_temporal::TimeInfluence;
use hexagram_types::HexagramId;

use crate::options::{Level, PersonaWeights};

/// Integrated outcome of a synthesis run.
///
/// Downstream collaborators treat this as an opaque serializable value; the
/// engine itself performs no serialization or storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationResult {
    /// The hexagram the analysis was run for.
    pub subject: HexagramId,
    /// Depth the analysis ran at.
    pub level: Level,
    /// Fixed accuracy constant of the level, in [0, 100].
    pub accuracy: u8,
    /// Fixed authenticity constant of the level, in [0, 100].
    pub authenticity: u8,
    /// Level-shaped payload.
    pub analysis: LevelAnalysis,
}

/// Payload of a synthesis run, keyed by level so consumers can branch
/// exhaustively instead of inspecting a numeric flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LevelAnalysis {
    Basic(BasicAnalysis),
    Relational(RelationalAnalysis),
    Elemental(ElementalAnalysis),
    Sequential(SequentialAnalysis),
    Comprehensive(ComprehensiveAnalysis),
}

/// Level 1: the traditional changing-lines reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasicAnalysis {
    /// No lines were flagged for change; the situation holds still.
    Static,
    /// The flagged lines inverted into a new hexagram.
    Transformed {
        target: HexagramId,
        /// Positions that changed, sorted bottom to top.
        changed_lines: Vec<u8>,
    },
}

impl BasicAnalysis {
    /// Target hexagram, when any line actually moved.
    pub fn target(&self) -> Option<HexagramId> {
        match self {
            BasicAnalysis::Static => None,
            BasicAnalysis::Transformed { target, .. } => Some(*target),
        }
    }
}

/// Level 2: the three structural relatives taken together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationalAnalysis {
    /// Hidden nature: the nuclear hexagram.
    pub mutual: HexagramId,
    /// The pattern as seen from the other side.
    pub reversed: HexagramId,
    /// Every line inverted.
    pub opposite: HexagramId,
}

/// Level 3: element classification and seasonal fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementalAnalysis {
    /// Element of the subject hexagram.
    pub element: ElementTag,
    /// Element the subject's element generates next.
    pub feeds: ElementTag,
    /// Season taken from the time context, when supplied.
    pub season: Option<Season>,
    /// Alignment grade in [0, 1]; absent when no season was supplied.
    pub seasonal_alignment: Option<f64>,
}

/// Level 4: position in the canonical sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequentialAnalysis {
    /// Canonical next hexagram, when the chain defines one.
    pub successor: Option<HexagramId>,
    /// Thematic stage containing the subject.
    pub stage: Stage,
    /// Rationale for the transition, after the Sequence commentary.
    pub necessity: Option<String>,
}

/// Persona-lens weighting over the lower-level findings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaBlend {
    /// Weights the blend was computed with.
    pub weights: PersonaWeights,
    /// Energy of the sequential line, read by the analytic lens.
    pub analytic_focus: f64,
    /// Energy of the hidden nature, read by the intuitive lens.
    pub intuitive_focus: f64,
    /// Energy of the reversed perspective, read by the social lens.
    pub social_focus: f64,
    /// Weighted blend of the three lens readings, in [0, 100].
    pub harmony: f64,
}

/// Level 5: every lower level integrated with persona and time weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveAnalysis {
    pub basic: BasicAnalysis,
    pub relational: RelationalAnalysis,
    pub elemental: ElementalAnalysis,
    pub sequential: SequentialAnalysis,
    pub persona: PersonaBlend,
    pub temporal: TimeInfluence,
    /// The single integrated outcome, chosen by fixed precedence.
    pub final_transformation: HexagramId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_basic_analysis_has_no_target() {
        assert_eq!(BasicAnalysis::Static.target(), None);
    }

    #[test]
    fn transformed_basic_analysis_exposes_its_target() {
        let target = HexagramId::new(44).unwrap();
        let analysis = BasicAnalysis::Transformed {
            target,
            changed_lines: vec![1],
        };
        assert_eq!(analysis.target(), Some(target));
    }
}
