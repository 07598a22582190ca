//! Time-axis weighting of past, present, and future hexagrams.
//!
//! Blends the fixed energy scores of three hexagram samples into a single
//! influence figure, names the dominant axis, and classifies how fast the
//! present-to-future transition is expected to unfold. All inputs are
//! immutable tables; the weights are design constants summing to 1.0.

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use hexagram_types::HexagramId;

/// Weight of the past sample in the influence blend.
pub const PAST_WEIGHT: f64 = 0.3;
/// Weight of the present sample in the influence blend.
pub const PRESENT_WEIGHT: f64 = 0.5;
/// Weight of the future sample in the influence blend.
pub const FUTURE_WEIGHT: f64 = 0.2;

/// Fixed energy score per hexagram, in King Wen order, range [0, 100].
/// Qian (1) anchors the top at 100 and Kun (2) the bottom at 0; every yang
/// line adds 16, with 4 more when the ruling fifth line is yang.
const ENERGY: [u8; HexagramId::COUNT] = [
    100, 0, 36, 32, 68, 68, 16, 20, // 1-8
    84, 84, 48, 52, 84, 80, 16, 16, // 9-16
    52, 48, 32, 36, 48, 48, 16, 16, // 17-24
    68, 64, 32, 68, 36, 64, 52, 48, // 25-32
    68, 64, 32, 32, 68, 64, 36, 32, // 33-40
    48, 52, 84, 84, 36, 32, 52, 52, // 41-48
    68, 64, 32, 32, 52, 48, 48, 48, // 49-56
    68, 68, 52, 52, 68, 32, 52, 48, // 57-64
];

/// One of the three time axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeAxis {
    Past,
    Present,
    Future,
}

/// How fast a present-to-future transition is expected to unfold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangeSpeed {
    Rapid,
    Moderate,
    Gradual,
    Slow,
}

impl ChangeSpeed {
    /// Velocity coefficient of this bucket.
    pub fn coefficient(self) -> f64 {
        match self {
            ChangeSpeed::Rapid => 4.0,
            ChangeSpeed::Moderate => 2.0,
            ChangeSpeed::Gradual => 1.0,
            ChangeSpeed::Slow => 0.5,
        }
    }

    /// Descriptive label in the manner of the exemplar hexagrams.
    pub fn description(self) -> &'static str {
        match self {
            ChangeSpeed::Rapid => "revolutionary upheaval",
            ChangeSpeed::Moderate => "stepwise advance",
            ChangeSpeed::Gradual => "enduring steady change",
            ChangeSpeed::Slow => "stillness before movement",
        }
    }
}

/// Fixed classification of (present, future) pairs. Pairs absent from the
/// table default to [`ChangeSpeed::Gradual`]. Entries follow the exemplar
/// hexagrams: Revolution and the Cauldron mark rapid change, Development
/// and the Marrying Maiden stepwise change, Duration steady change, and
/// Keeping Still the slow bucket.
const SPEED_PAIRS: [(u8, u8, ChangeSpeed); 12] = [
    (49, 50, ChangeSpeed::Rapid),
    (50, 49, ChangeSpeed::Rapid),
    (49, 49, ChangeSpeed::Rapid),
    (50, 50, ChangeSpeed::Rapid),
    (53, 54, ChangeSpeed::Moderate),
    (54, 53, ChangeSpeed::Moderate),
    (53, 53, ChangeSpeed::Moderate),
    (54, 54, ChangeSpeed::Moderate),
    (32, 32, ChangeSpeed::Gradual),
    (52, 52, ChangeSpeed::Slow),
    (52, 53, ChangeSpeed::Slow),
    (51, 52, ChangeSpeed::Slow),
];

/// Result of weighing the three time samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInfluence {
    /// Weighted blend of the three energy scores, in [0, 100].
    pub total_influence: f64,
    /// Axis contributing the largest weighted term.
    pub dominant_time: TimeAxis,
    /// Expected pace of the present-to-future transition.
    pub change_speed: ChangeSpeed,
}

/// Fixed energy score of `id`, in [0, 100].
pub fn energy(id: HexagramId) -> f64 {
    f64::from(ENERGY[id.index()])
}

/// Pace of the transition from `present` to `future`.
pub fn change_speed(present: HexagramId, future: HexagramId) -> ChangeSpeed {
    SPEED_PAIRS
        .iter()
        .find(|(p, f, _)| *p == present.get() && *f == future.get())
        .map(|(_, _, speed)| *speed)
        .unwrap_or(ChangeSpeed::Gradual)
}

/// Blend the three samples into a single influence assessment.
///
/// Dominance ties resolve in favor of the present, then the future, then
/// the past.
pub fn weigh(past: HexagramId, present: HexagramId, future: HexagramId) -> TimeInfluence {
    let past_term = energy(past) * PAST_WEIGHT;
    let present_term = energy(present) * PRESENT_WEIGHT;
    let future_term = energy(future) * FUTURE_WEIGHT;

    let dominant_time = if present_term >= future_term && present_term >= past_term {
        TimeAxis::Present
    } else if future_term >= past_term {
        TimeAxis::Future
    } else {
        TimeAxis::Past
    };

    TimeInfluence {
        total_influence: past_term + present_term + future_term,
        dominant_time,
        change_speed: change_speed(present, future),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u8) -> HexagramId {
        HexagramId::new(raw).unwrap()
    }

    #[test]
    fn weights_sum_to_one() {
        assert!((PAST_WEIGHT + PRESENT_WEIGHT + FUTURE_WEIGHT - 1.0).abs() < 1e-12);
    }

    #[test]
    fn energy_spans_the_design_range() {
        assert_eq!(energy(id(1)), 100.0);
        assert_eq!(energy(id(2)), 0.0);
        for subject in HexagramId::all() {
            let e = energy(subject);
            assert!((0.0..=100.0).contains(&e));
        }
    }

    #[test]
    fn total_influence_is_the_fixed_weighted_sum() {
        for (p, c, f) in [(1, 2, 3), (5, 5, 5), (64, 32, 16)] {
            let influence = weigh(id(p), id(c), id(f));
            let expected =
                energy(id(p)) * 0.3 + energy(id(c)) * 0.5 + energy(id(f)) * 0.2;
            assert!((influence.total_influence - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn equal_samples_are_dominated_by_the_present() {
        let influence = weigh(id(5), id(5), id(5));
        assert_eq!(influence.dominant_time, TimeAxis::Present);
        assert!((influence.total_influence - energy(id(5))).abs() < 1e-9);
    }

    #[test]
    fn heavy_past_dominates_when_present_and_future_are_flat() {
        // Qian in the past against Kun now and ahead.
        let influence = weigh(id(1), id(2), id(2));
        assert_eq!(influence.dominant_time, TimeAxis::Past);
    }

    #[test]
    fn future_wins_ties_against_past() {
        // Same energy on past and future, nothing in the present:
        // 0.2 * e < 0.3 * e, so the past keeps its edge; use a hotter
        // future to cross over.
        let influence = weigh(id(7), id(2), id(1));
        assert_eq!(influence.dominant_time, TimeAxis::Future);
    }

    #[test]
    fn revolution_to_cauldron_is_rapid() {
        assert_eq!(change_speed(id(49), id(50)), ChangeSpeed::Rapid);
        assert_eq!(change_speed(id(53), id(54)), ChangeSpeed::Moderate);
        assert_eq!(change_speed(id(52), id(52)), ChangeSpeed::Slow);
    }

    #[test]
    fn unmapped_pairs_default_to_gradual() {
        assert_eq!(change_speed(id(5), id(5)), ChangeSpeed::Gradual);
        assert_eq!(change_speed(id(1), id(64)), ChangeSpeed::Gradual);
    }

    #[test]
    fn speed_coefficients_match_the_design_constants() {
        assert_eq!(ChangeSpeed::Rapid.coefficient(), 4.0);
        assert_eq!(ChangeSpeed::Moderate.coefficient(), 2.0);
        assert_eq!(ChangeSpeed::Gradual.coefficient(), 1.0);
        assert_eq!(ChangeSpeed::Slow.coefficient(), 0.5);
    }

    #[test]
    fn influence_serialization_roundtrip() {
        let influence = weigh(id(3), id(17), id(42));
        let json = serde_json::to_string(&influence).unwrap();
        let restored: TimeInfluence = serde_json::from_str(&json).unwrap();
        assert_eq!(influence, restored);
    }
}
