//! The individual conformance checks.
//!
//! Each function verifies one structural guarantee and returns a
//! [`CheckResult`]; [`run_all`] strings them into a report.

use std::collections::HashSet;

use hexagram_elements::{destroys, element_of, generates, seasonal_alignment, ElementTag, Season};
use hexagram_engine::Level;
use hexagram_relations::{mutual, opposite, reversed};
use hexagram_sequence::{necessity_of, stage_of, successor_of, Stage};
use hexagram_temporal::{energy, FUTURE_WEIGHT, PAST_WEIGHT, PRESENT_WEIGHT};
use hexagram_types::{codec, HexagramId};

use crate::report::{CheckResult, ConformanceReport};

/// Run the whole suite.
pub fn run_all() -> ConformanceReport {
    let mut report = ConformanceReport::default();
    report.record(codec_bijection());
    report.record(codec_patterns_distinct());
    report.record(opposite_involution());
    report.record(reversed_involution());
    report.record(mutual_totality());
    report.record(element_table_total());
    report.record(element_cycles_disjoint());
    report.record(seasonal_alignment_bounded());
    report.record(stage_partition());
    report.record(sequence_tables_complete());
    report.record(energy_table_bounded());
    report.record(time_weights_normalized());
    report.record(quality_constants_monotone());
    report
}

/// Decoding inverts encoding for every id.
pub fn codec_bijection() -> CheckResult {
    let name = "codec.bijection";
    let description = "decode(encode(id)) == id for all 64 ids";
    for id in HexagramId::all() {
        match codec::decode(codec::encode(id).lines()) {
            Ok(roundtrip) if roundtrip == id => {}
            Ok(roundtrip) => {
                return CheckResult::fail(
                    name,
                    description,
                    &format!("id {id} decoded to {roundtrip}"),
                )
            }
            Err(err) => {
                return CheckResult::fail(name, description, &format!("id {id}: {err}"))
            }
        }
    }
    CheckResult::pass(name, description)
}

/// The 64 canonical patterns are pairwise distinct.
pub fn codec_patterns_distinct() -> CheckResult {
    let name = "codec.distinct-patterns";
    let description = "the 64 canonical patterns are pairwise distinct";
    let patterns: HashSet<_> = HexagramId::all().map(codec::encode).collect();
    if patterns.len() == HexagramId::COUNT {
        CheckResult::pass(name, description)
    } else {
        CheckResult::fail(
            name,
            description,
            &format!("only {} distinct patterns", patterns.len()),
        )
    }
}

/// Inverting every line twice restores the original.
pub fn opposite_involution() -> CheckResult {
    let name = "relations.opposite-involution";
    let description = "opposite(opposite(id)) == id for all ids";
    for id in HexagramId::all() {
        if opposite(opposite(id)) != id {
            return CheckResult::fail(name, description, &format!("broken at id {id}"));
        }
    }
    CheckResult::pass(name, description)
}

/// Reversing the line order twice restores the original.
pub fn reversed_involution() -> CheckResult {
    let name = "relations.reversed-involution";
    let description = "reversed(reversed(id)) == id for all ids";
    for id in HexagramId::all() {
        if reversed(reversed(id)) != id {
            return CheckResult::fail(name, description, &format!("broken at id {id}"));
        }
    }
    CheckResult::pass(name, description)
}

/// The nuclear derivation lands on a canonical id for every input.
pub fn mutual_totality() -> CheckResult {
    let name = "relations.mutual-totality";
    let description = "mutual(id) is canonical for all ids";
    for id in HexagramId::all() {
        let nucleus = mutual(id);
        if !(1..=64).contains(&nucleus.get()) {
            return CheckResult::fail(name, description, &format!("broken at id {id}"));
        }
    }
    CheckResult::pass(name, description)
}

/// Every hexagram carries exactly one of the five element tags.
pub fn element_table_total() -> CheckResult {
    let name = "elements.total";
    let description = "element_of covers all 64 ids with the five tags";
    let mut used: HashSet<ElementTag> = HashSet::new();
    for id in HexagramId::all() {
        used.insert(element_of(id));
    }
    if used.len() == ElementTag::ALL.len() {
        CheckResult::pass(name, description)
    } else {
        CheckResult::fail(
            name,
            description,
            &format!("only {} tags in use", used.len()),
        )
    }
}

/// For distinct elements exactly one directed relation holds, and the two
/// cycles never overlap.
pub fn element_cycles_disjoint() -> CheckResult {
    let name = "elements.cycles-disjoint";
    let description = "generative and destructive cycles are disjoint 5-cycles";
    for a in ElementTag::ALL {
        for b in ElementTag::ALL {
            if generates(a, b) && destroys(a, b) {
                return CheckResult::fail(
                    name,
                    description,
                    &format!("{a:?} both feeds and breaks {b:?}"),
                );
            }
            if a != b {
                let count = [
                    generates(a, b),
                    generates(b, a),
                    destroys(a, b),
                    destroys(b, a),
                ]
                .iter()
                .filter(|r| **r)
                .count();
                if count != 1 {
                    return CheckResult::fail(
                        name,
                        description,
                        &format!("{a:?} vs {b:?}: {count} relations"),
                    );
                }
            }
        }
    }
    CheckResult::pass(name, description)
}

/// Alignment grades stay in [0, 1] and peak on the canonical season.
pub fn seasonal_alignment_bounded() -> CheckResult {
    let name = "elements.seasonal-alignment";
    let description = "alignment grades lie in [0, 1] with 1.0 on the canonical season";
    for id in HexagramId::all() {
        let canonical = element_of(id).canonical_season();
        for season in Season::ALL {
            let grade = seasonal_alignment(id, season);
            if !(0.0..=1.0).contains(&grade) {
                return CheckResult::fail(
                    name,
                    description,
                    &format!("id {id}, {season:?}: grade {grade}"),
                );
            }
            if season == canonical && grade != 1.0 {
                return CheckResult::fail(
                    name,
                    description,
                    &format!("id {id} scores {grade} on its canonical season"),
                );
            }
        }
    }
    CheckResult::pass(name, description)
}

/// The five stages cover [1, 64] with no gaps or overlaps.
pub fn stage_partition() -> CheckResult {
    let name = "sequence.stage-partition";
    let description = "the five stages partition [1, 64] exactly";
    let mut covered = 0usize;
    for stage in Stage::ALL {
        let (lo, hi) = stage.range();
        covered += usize::from(hi - lo) + 1;
        for raw in lo..=hi {
            let id = match HexagramId::new(raw) {
                Ok(id) => id,
                Err(err) => {
                    return CheckResult::fail(name, description, &err.to_string());
                }
            };
            if stage_of(id) != stage {
                return CheckResult::fail(
                    name,
                    description,
                    &format!("id {raw} not in {stage:?}"),
                );
            }
        }
    }
    if covered == HexagramId::COUNT {
        CheckResult::pass(name, description)
    } else {
        CheckResult::fail(name, description, &format!("{covered} ids covered"))
    }
}

/// Successor and rationale tables are complete and in range.
pub fn sequence_tables_complete() -> CheckResult {
    let name = "sequence.tables-complete";
    let description = "every id has an in-range successor and a rationale";
    for id in HexagramId::all() {
        match successor_of(id) {
            Some(next) if (1..=64).contains(&next.get()) => {}
            Some(next) => {
                return CheckResult::fail(
                    name,
                    description,
                    &format!("id {id} points at {next}"),
                )
            }
            None => {
                return CheckResult::fail(name, description, &format!("id {id} has no successor"))
            }
        }
        if necessity_of(id).is_none() {
            return CheckResult::fail(name, description, &format!("id {id} has no rationale"));
        }
    }
    CheckResult::pass(name, description)
}

/// Energy scores stay in the documented range with the two anchors fixed.
pub fn energy_table_bounded() -> CheckResult {
    let name = "temporal.energy-bounded";
    let description = "energy scores lie in [0, 100] with Qian at 100 and Kun at 0";
    for id in HexagramId::all() {
        let score = energy(id);
        if !(0.0..=100.0).contains(&score) {
            return CheckResult::fail(name, description, &format!("id {id}: {score}"));
        }
    }
    let mut anchors = HexagramId::all();
    match (anchors.next(), anchors.next()) {
        (Some(qian), Some(kun)) if energy(qian) == 100.0 && energy(kun) == 0.0 => {
            CheckResult::pass(name, description)
        }
        _ => CheckResult::fail(name, description, "Qian and Kun do not anchor the scale"),
    }
}

/// The three axis weights sum to 1.0.
pub fn time_weights_normalized() -> CheckResult {
    let name = "temporal.weights-normalized";
    let description = "past/present/future weights sum to 1.0";
    let sum = PAST_WEIGHT + PRESENT_WEIGHT + FUTURE_WEIGHT;
    if (sum - 1.0).abs() < 1e-12 {
        CheckResult::pass(name, description)
    } else {
        CheckResult::fail(name, description, &format!("sum is {sum}"))
    }
}

/// Accuracy and authenticity never decrease as the level rises.
pub fn quality_constants_monotone() -> CheckResult {
    let name = "engine.quality-monotone";
    let description = "quality constants are monotone across the five levels";
    for window in Level::ALL.windows(2) {
        let (lower, upper) = (window[0].quality(), window[1].quality());
        if upper.accuracy < lower.accuracy || upper.authenticity < lower.authenticity {
            return CheckResult::fail(
                name,
                description,
                &format!("{:?} regresses from {:?}", window[1], window[0]),
            );
        }
    }
    CheckResult::pass(name, description)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn individual_checks_pass_in_isolation() {
        assert!(codec_bijection().passed);
        assert!(codec_patterns_distinct().passed);
        assert!(opposite_involution().passed);
        assert!(reversed_involution().passed);
        assert!(mutual_totality().passed);
        assert!(element_table_total().passed);
        assert!(element_cycles_disjoint().passed);
        assert!(seasonal_alignment_bounded().passed);
        assert!(stage_partition().passed);
        assert!(sequence_tables_complete().passed);
        assert!(energy_table_bounded().passed);
        assert!(time_weights_normalized().passed);
        assert!(quality_constants_monotone().passed);
    }

    #[test]
    fn the_report_counts_all_checks() {
        let report = run_all();
        assert_eq!(report.results.len(), 13);
    }
}
