//! Five-element classification and seasonal alignment.
//!
//! Every hexagram carries exactly one element tag, assigned by the
//! traditional Eight Palaces grouping. The five tags are joined by two
//! disjoint directed cycles: the generative cycle (wood feeds fire, fire
//! feeds earth, ...) and the destructive cycle (wood breaks earth, earth
//! dams water, ...). Seasonal alignment is a fixed lookup, never computed.

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use hexagram_types::HexagramId;

/// One of the five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementTag {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl ElementTag {
    pub const ALL: [ElementTag; 5] = [
        ElementTag::Wood,
        ElementTag::Fire,
        ElementTag::Earth,
        ElementTag::Metal,
        ElementTag::Water,
    ];

    /// Element this one generates (the nourishing cycle).
    pub fn feeds(self) -> ElementTag {
        match self {
            ElementTag::Wood => ElementTag::Fire,
            ElementTag::Fire => ElementTag::Earth,
            ElementTag::Earth => ElementTag::Metal,
            ElementTag::Metal => ElementTag::Water,
            ElementTag::Water => ElementTag::Wood,
        }
    }

    /// Element this one destroys (the controlling cycle).
    pub fn breaks(self) -> ElementTag {
        match self {
            ElementTag::Wood => ElementTag::Earth,
            ElementTag::Earth => ElementTag::Water,
            ElementTag::Water => ElementTag::Fire,
            ElementTag::Fire => ElementTag::Metal,
            ElementTag::Metal => ElementTag::Wood,
        }
    }

    /// Season in which this element is at its strongest.
    pub fn canonical_season(self) -> Season {
        match self {
            ElementTag::Wood => Season::Spring,
            ElementTag::Fire => Season::Summer,
            ElementTag::Earth => Season::LateSummer,
            ElementTag::Metal => Season::Autumn,
            ElementTag::Water => Season::Winter,
        }
    }

    /// Traditional compass direction of this element.
    pub fn direction(self) -> &'static str {
        match self {
            ElementTag::Wood => "east",
            ElementTag::Fire => "south",
            ElementTag::Earth => "center",
            ElementTag::Metal => "west",
            ElementTag::Water => "north",
        }
    }

    fn index(self) -> usize {
        match self {
            ElementTag::Wood => 0,
            ElementTag::Fire => 1,
            ElementTag::Earth => 2,
            ElementTag::Metal => 3,
            ElementTag::Water => 4,
        }
    }
}

/// One of the five named seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    LateSummer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: [Season; 5] = [
        Season::Spring,
        Season::Summer,
        Season::LateSummer,
        Season::Autumn,
        Season::Winter,
    ];

    fn index(self) -> usize {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::LateSummer => 2,
            Season::Autumn => 3,
            Season::Winter => 4,
        }
    }
}

/// Element of every hexagram by Eight Palaces assignment, in King Wen order.
const ELEMENT_OF: [ElementTag; HexagramId::COUNT] = {
    use ElementTag::{Earth, Fire, Metal, Water, Wood};
    [
        Metal, Earth, Water, Fire, Earth, Fire, Water, Earth, // 1-8
        Wood, Earth, Earth, Metal, Fire, Metal, Metal, Wood, // 9-16
        Wood, Wood, Earth, Metal, Wood, Earth, Metal, Earth, // 17-24
        Wood, Earth, Wood, Wood, Water, Fire, Metal, Wood, // 25-32
        Metal, Earth, Metal, Water, Wood, Earth, Metal, Wood, // 33-40
        Earth, Wood, Earth, Metal, Metal, Wood, Metal, Wood, // 41-48
        Water, Fire, Wood, Earth, Earth, Metal, Water, Fire, // 49-56
        Wood, Metal, Fire, Water, Earth, Metal, Water, Fire, // 57-64
    ]
};

/// Seasonal alignment grades, element rows by season columns.
///
/// 1.0 on the canonical season; partial credit follows the two cycles:
/// 0.75 when the season's element feeds the hexagram's, 0.5 when the
/// hexagram's element feeds the season's, 0.4 when the hexagram's element
/// breaks the season's, 0.25 when the season's element breaks the
/// hexagram's. Fixed values, never derived at call time.
const SEASONAL_ALIGNMENT: [[f64; 5]; 5] = [
    // Spring, Summer, LateSummer, Autumn, Winter
    [1.00, 0.50, 0.40, 0.25, 0.75], // Wood
    [0.75, 1.00, 0.50, 0.40, 0.25], // Fire
    [0.25, 0.75, 1.00, 0.50, 0.40], // Earth
    [0.40, 0.25, 0.75, 1.00, 0.50], // Metal
    [0.50, 0.40, 0.25, 0.75, 1.00], // Water
];

/// Element tag of `id`. Total lookup.
pub fn element_of(id: HexagramId) -> ElementTag {
    ELEMENT_OF[id.index()]
}

/// Whether `a` generates `b` on the nourishing cycle.
pub fn generates(a: ElementTag, b: ElementTag) -> bool {
    a.feeds() == b
}

/// Whether `a` destroys `b` on the controlling cycle.
pub fn destroys(a: ElementTag, b: ElementTag) -> bool {
    a.breaks() == b
}

/// Alignment of `id` with `season`, in [0, 1].
pub fn seasonal_alignment(id: HexagramId, season: Season) -> f64 {
    SEASONAL_ALIGNMENT[element_of(id).index()][season.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u8) -> HexagramId {
        HexagramId::new(raw).unwrap()
    }

    #[test]
    fn element_lookup_is_total() {
        for subject in HexagramId::all() {
            let tag = element_of(subject);
            assert!(ElementTag::ALL.contains(&tag));
        }
    }

    #[test]
    fn palace_anchors_carry_their_palace_element() {
        // The eight palace heads: the pure double-trigram hexagrams.
        assert_eq!(element_of(id(1)), ElementTag::Metal); // Qian
        assert_eq!(element_of(id(2)), ElementTag::Earth); // Kun
        assert_eq!(element_of(id(29)), ElementTag::Water); // Kan
        assert_eq!(element_of(id(30)), ElementTag::Fire); // Li
        assert_eq!(element_of(id(51)), ElementTag::Wood); // Zhen
        assert_eq!(element_of(id(52)), ElementTag::Earth); // Gen
        assert_eq!(element_of(id(57)), ElementTag::Wood); // Xun
        assert_eq!(element_of(id(58)), ElementTag::Metal); // Dui
    }

    #[test]
    fn each_element_tags_at_least_one_hexagram() {
        for element in ElementTag::ALL {
            assert!(HexagramId::all().any(|h| element_of(h) == element));
        }
    }

    #[test]
    fn nourishing_cycle_closes_after_five_steps() {
        let mut current = ElementTag::Wood;
        for _ in 0..5 {
            current = current.feeds();
        }
        assert_eq!(current, ElementTag::Wood);
    }

    #[test]
    fn controlling_cycle_closes_after_five_steps() {
        let mut current = ElementTag::Wood;
        for _ in 0..5 {
            current = current.breaks();
        }
        assert_eq!(current, ElementTag::Wood);
    }

    #[test]
    fn cycles_are_disjoint() {
        for a in ElementTag::ALL {
            for b in ElementTag::ALL {
                assert!(!(generates(a, b) && destroys(a, b)));
            }
        }
    }

    #[test]
    fn distinct_pairs_relate_in_exactly_one_direction() {
        for a in ElementTag::ALL {
            for b in ElementTag::ALL {
                if a == b {
                    continue;
                }
                let relations = [
                    generates(a, b),
                    generates(b, a),
                    destroys(a, b),
                    destroys(b, a),
                ];
                let count = relations.iter().filter(|r| **r).count();
                assert_eq!(count, 1, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn canonical_season_scores_full_alignment() {
        for element in ElementTag::ALL {
            let subject = HexagramId::all()
                .find(|h| element_of(*h) == element)
                .unwrap();
            assert_eq!(
                seasonal_alignment(subject, element.canonical_season()),
                1.0
            );
        }
    }

    #[test]
    fn alignment_stays_within_unit_interval() {
        for subject in HexagramId::all() {
            for season in Season::ALL {
                let grade = seasonal_alignment(subject, season);
                assert!((0.0..=1.0).contains(&grade));
            }
        }
    }

    #[test]
    fn qian_aligns_best_with_autumn() {
        let qian = id(1);
        let autumn = seasonal_alignment(qian, Season::Autumn);
        for season in Season::ALL {
            assert!(seasonal_alignment(qian, season) <= autumn);
        }
    }

    #[test]
    fn element_serialization_roundtrip() {
        let json = serde_json::to_string(&ElementTag::Wood).unwrap();
        let restored: ElementTag = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ElementTag::Wood);
    }
}
