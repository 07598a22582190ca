use tracing::debug;

use hexagram_sequence::{necessity_of, stage_of, successor_of};
use hexagram_types::{codec, HexagramId, LineVector};

use crate::error::SynthesisError;
use crate::options::{Level, SynthesisOptions, TimeContext};
use crate::result::{
    BasicAnalysis, ComprehensiveAnalysis, ElementalAnalysis, LevelAnalysis, PersonaBlend,
    RelationalAnalysis, SequentialAnalysis, TransformationResult,
};

/// Stateless orchestrator of the five analysis levels.
///
/// Construct one explicitly and hand it to whatever needs it; the engine
/// keeps no mutable state across calls, so a single instance serves any
/// number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer;

impl Synthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Run the analysis selected by `options.level` for `subject`.
    ///
    /// Fails fast with [`SynthesisError::InvalidId`] or
    /// [`SynthesisError::MalformedOptions`] before any level executes;
    /// missing optional context never changes control flow.
    pub fn synthesize(
        &self,
        subject: u8,
        options: &SynthesisOptions,
    ) -> Result<TransformationResult, SynthesisError> {
        let subject =
            HexagramId::new(subject).map_err(|_| SynthesisError::InvalidId { id: subject })?;
        options.validate()?;

        debug!(subject = %subject, level = options.level.get(), "synthesizing transformation");

        let analysis = match options.level {
            Level::Basic => LevelAnalysis::Basic(self.basic(subject, &options.line_changes)),
            Level::Relational => LevelAnalysis::Relational(self.relational(subject)),
            Level::Elemental => {
                LevelAnalysis::Elemental(self.elemental(subject, options.time_context.as_ref()))
            }
            Level::Sequential => LevelAnalysis::Sequential(self.sequential(subject)),
            Level::Comprehensive => {
                LevelAnalysis::Comprehensive(self.comprehensive(subject, options))
            }
        };

        let quality = options.level.quality();
        Ok(TransformationResult {
            subject,
            level: options.level,
            accuracy: quality.accuracy,
            authenticity: quality.authenticity,
            analysis,
        })
    }

    /// Level 1: invert the flagged lines. An empty set is the static
    /// sentinel, not an error.
    fn basic(&self, subject: HexagramId, line_changes: &[u8]) -> BasicAnalysis {
        if line_changes.is_empty() {
            return BasicAnalysis::Static;
        }

        let mut changed_lines = line_changes.to_vec();
        changed_lines.sort_unstable();

        // Positions were validated to [1, 6] before any level ran.
        let mut lines = *codec::encode(subject).lines();
        for &position in &changed_lines {
            let idx = usize::from(position - 1);
            lines[idx] = lines[idx].inverted();
        }

        BasicAnalysis::Transformed {
            target: LineVector::new(lines).hexagram(),
            changed_lines,
        }
    }

    /// Level 2: the three structural relatives taken together.
    fn relational(&self, subject: HexagramId) -> RelationalAnalysis {
        RelationalAnalysis {
            mutual: hexagram_relations::mutual(subject),
            reversed: hexagram_relations::reversed(subject),
            opposite: hexagram_relations::opposite(subject),
        }
    }

    /// Level 3: element classification, graded against the season when the
    /// time context names one.
    fn elemental(
        &self,
        subject: HexagramId,
        time_context: Option<&TimeContext>,
    ) -> ElementalAnalysis {
        let element = hexagram_elements::element_of(subject);
        let season = time_context.and_then(|tc| tc.season);
        ElementalAnalysis {
            element,
            feeds: element.feeds(),
            season,
            seasonal_alignment: season
                .map(|season| hexagram_elements::seasonal_alignment(subject, season)),
        }
    }

    /// Level 4: position in the canonical sequence.
    fn sequential(&self, subject: HexagramId) -> SequentialAnalysis {
        SequentialAnalysis {
            successor: successor_of(subject),
            stage: stage_of(subject),
            necessity: necessity_of(subject).map(str::to_owned),
        }
    }

    /// Level 5: run levels 1 through 4, then blend in the persona lenses
    /// and the time axis.
    fn comprehensive(&self, subject: HexagramId, options: &SynthesisOptions) -> ComprehensiveAnalysis {
        let basic = self.basic(subject, &options.line_changes);
        let relational = self.relational(subject);
        let elemental = self.elemental(subject, options.time_context.as_ref());
        let sequential = self.sequential(subject);

        let weights = options.persona_context.unwrap_or_default();
        let analytic_focus =
            hexagram_temporal::energy(sequential.successor.unwrap_or(subject));
        let intuitive_focus = hexagram_temporal::energy(relational.mutual);
        let social_focus = hexagram_temporal::energy(relational.reversed);
        let persona = PersonaBlend {
            weights,
            analytic_focus,
            intuitive_focus,
            social_focus,
            harmony: weights.analytic * analytic_focus
                + weights.intuitive * intuitive_focus
                + weights.social * social_focus,
        };

        // Absent time samples fall back to the subject hexagram.
        let time_context = options.time_context.unwrap_or_default();
        let temporal = hexagram_temporal::weigh(
            time_context.past.unwrap_or(subject),
            time_context.present.unwrap_or(subject),
            time_context.future.unwrap_or(subject),
        );

        // Fixed precedence for the integrated outcome: the sequence
        // successor when defined, else the mutual hexagram, else the
        // level-1 target, else the subject itself. The mutual hexagram is
        // total, so the last two arms never engage here.
        let final_transformation = match sequential.successor {
            Some(next) => next,
            None => relational.mutual,
        };

        debug!(
            subject = %subject,
            final_transformation = %final_transformation,
            dominant_time = ?temporal.dominant_time,
            "comprehensive integration complete"
        );

        ComprehensiveAnalysis {
            basic,
            relational,
            elemental,
            sequential,
            persona,
            temporal,
            final_transformation,
        }
    }
}
