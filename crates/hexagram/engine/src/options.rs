use serde::{Deserialize, Serialize};

use hexagram_elements::Season;
use hexagram_types::HexagramId;

use crate::error::SynthesisError;

/// Tolerance when checking that persona weights sum to 1.0.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Analysis depth. Each level strictly supersedes the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Apply the flagged line changes only.
    Basic,
    /// Derive the mutual, reversed, and opposite hexagrams.
    Relational,
    /// Classify the element and its seasonal alignment.
    Elemental,
    /// Follow the canonical sequence: successor, stage, rationale.
    Sequential,
    /// Run every lower level and integrate the results.
    Comprehensive,
}

/// Quality constants attached to a level. Fixed design values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityMetrics {
    pub accuracy: u8,
    pub authenticity: u8,
}

impl Level {
    pub const ALL: [Level; 5] = [
        Level::Basic,
        Level::Relational,
        Level::Elemental,
        Level::Sequential,
        Level::Comprehensive,
    ];

    /// Numeric rank, 1 through 5.
    pub fn get(self) -> u8 {
        match self {
            Level::Basic => 1,
            Level::Relational => 2,
            Level::Elemental => 3,
            Level::Sequential => 4,
            Level::Comprehensive => 5,
        }
    }

    /// Fixed quality constants for this level.
    pub fn quality(self) -> QualityMetrics {
        let (accuracy, authenticity) = match self {
            Level::Basic => (30, 40),
            Level::Relational => (50, 70),
            Level::Elemental => (70, 80),
            Level::Sequential => (85, 95),
            Level::Comprehensive => (92, 98),
        };
        QualityMetrics {
            accuracy,
            authenticity,
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Comprehensive
    }
}

impl TryFrom<u8> for Level {
    type Error = SynthesisError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        match rank {
            1 => Ok(Level::Basic),
            2 => Ok(Level::Relational),
            3 => Ok(Level::Elemental),
            4 => Ok(Level::Sequential),
            5 => Ok(Level::Comprehensive),
            _ => Err(SynthesisError::MalformedOptions {
                reason: format!("level {rank} outside 1..=5"),
            }),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> u8 {
        level.get()
    }
}

/// Optional time samples and season accompanying a reading.
///
/// Absent samples default to the subject hexagram at synthesis time; an
/// absent season simply leaves the seasonal alignment unassessed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeContext {
    pub past: Option<HexagramId>,
    pub present: Option<HexagramId>,
    pub future: Option<HexagramId>,
    pub season: Option<Season>,
}

/// The three persona lenses and their blend weights.
///
/// The analytic lens reads the logical line of the sequence, the intuitive
/// lens the hidden nature, and the social lens the pattern as others see
/// it. Weights must sum to 1.0 within [`WEIGHT_EPSILON`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonaWeights {
    pub analytic: f64,
    pub intuitive: f64,
    pub social: f64,
}

impl PersonaWeights {
    pub fn sum(&self) -> f64 {
        self.analytic + self.intuitive + self.social
    }
}

impl Default for PersonaWeights {
    fn default() -> Self {
        Self {
            analytic: 0.4,
            intuitive: 0.3,
            social: 0.3,
        }
    }
}

/// Options accepted by the synthesizer. Every field has a documented
/// default; validation is eager and happens before any level executes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Line positions (1 = bottom .. 6 = top) flagged for inversion.
    /// Consumed only by the basic level. Default: none.
    pub line_changes: Vec<u8>,
    /// Past, present, and future samples plus the current season.
    /// Default: absent; samples fall back to the subject hexagram.
    pub time_context: Option<TimeContext>,
    /// Persona lens weights. Default: analytic 0.4, intuitive 0.3,
    /// social 0.3.
    pub persona_context: Option<PersonaWeights>,
    /// Analysis depth. Default: comprehensive (level 5).
    pub level: Level,
}

impl SynthesisOptions {
    /// Check every option against its documented constraints.
    pub fn validate(&self) -> Result<(), SynthesisError> {
        let mut seen = [false; 6];
        for &position in &self.line_changes {
            if !(1..=6).contains(&position) {
                return Err(SynthesisError::MalformedOptions {
                    reason: format!("line change position {position} outside 1..=6"),
                });
            }
            let idx = usize::from(position - 1);
            if seen[idx] {
                return Err(SynthesisError::MalformedOptions {
                    reason: format!("duplicate line change position {position}"),
                });
            }
            seen[idx] = true;
        }

        if let Some(weights) = &self.persona_context {
            for (name, value) in [
                ("analytic", weights.analytic),
                ("intuitive", weights.intuitive),
                ("social", weights.social),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(SynthesisError::MalformedOptions {
                        reason: format!("persona weight {name} must be finite and non-negative"),
                    });
                }
            }
            let sum = weights.sum();
            if (sum - 1.0).abs() > WEIGHT_EPSILON {
                return Err(SynthesisError::MalformedOptions {
                    reason: format!("persona weights sum to {sum}, expected 1.0"),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_documented_ones() {
        let options = SynthesisOptions::default();
        assert!(options.line_changes.is_empty());
        assert!(options.time_context.is_none());
        assert!(options.persona_context.is_none());
        assert_eq!(options.level, Level::Comprehensive);
    }

    #[test]
    fn default_persona_weights_sum_to_one() {
        let weights = PersonaWeights::default();
        assert!((weights.sum() - 1.0).abs() < WEIGHT_EPSILON);
    }

    #[test]
    fn level_ranks_roundtrip() {
        for level in Level::ALL {
            assert_eq!(Level::try_from(level.get()).unwrap(), level);
        }
        assert!(Level::try_from(0).is_err());
        assert!(Level::try_from(6).is_err());
    }

    #[test]
    fn quality_constants_match_the_design() {
        assert_eq!(Level::Basic.quality().accuracy, 30);
        assert_eq!(Level::Basic.quality().authenticity, 40);
        assert_eq!(Level::Comprehensive.quality().accuracy, 92);
        assert_eq!(Level::Comprehensive.quality().authenticity, 98);
    }

    #[test]
    fn quality_never_decreases_with_level() {
        for window in Level::ALL.windows(2) {
            let (lower, upper) = (window[0].quality(), window[1].quality());
            assert!(upper.accuracy >= lower.accuracy);
            assert!(upper.authenticity >= lower.authenticity);
        }
    }

    #[test]
    fn rejects_out_of_range_line_positions() {
        let options = SynthesisOptions {
            line_changes: vec![0],
            ..Default::default()
        };
        assert!(matches!(
            options.validate(),
            Err(SynthesisError::MalformedOptions { .. })
        ));

        let options = SynthesisOptions {
            line_changes: vec![7],
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn rejects_duplicate_line_positions() {
        let options = SynthesisOptions {
            line_changes: vec![3, 3],
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn rejects_persona_weights_off_unity() {
        let options = SynthesisOptions {
            persona_context: Some(PersonaWeights {
                analytic: 0.5,
                intuitive: 0.5,
                social: 0.5,
            }),
            ..Default::default()
        };
        let err = options.validate().unwrap_err();
        assert!(matches!(err, SynthesisError::MalformedOptions { .. }));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn rejects_negative_and_non_finite_weights() {
        for bad in [-0.1, f64::NAN, f64::INFINITY] {
            let options = SynthesisOptions {
                persona_context: Some(PersonaWeights {
                    analytic: bad,
                    intuitive: 0.5,
                    social: 0.5,
                }),
                ..Default::default()
            };
            assert!(options.validate().is_err());
        }
    }

    #[test]
    fn accepts_a_fully_specified_context() {
        let options = SynthesisOptions {
            line_changes: vec![1, 4, 6],
            time_context: Some(TimeContext {
                past: Some(HexagramId::new(3).unwrap()),
                present: Some(HexagramId::new(17).unwrap()),
                future: Some(HexagramId::new(42).unwrap()),
                season: Some(Season::Spring),
            }),
            persona_context: Some(PersonaWeights::default()),
            level: Level::Comprehensive,
        };
        assert!(options.validate().is_ok());
    }

    #[test]
    fn options_serialization_roundtrip() {
        let options = SynthesisOptions {
            line_changes: vec![2, 5],
            time_context: Some(TimeContext {
                past: None,
                present: Some(HexagramId::new(29).unwrap()),
                future: None,
                season: Some(Season::Winter),
            }),
            persona_context: Some(PersonaWeights::default()),
            level: Level::Elemental,
        };
        let json = serde_json::to_string(&options).unwrap();
        let restored: SynthesisOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(options, restored);
    }
}
