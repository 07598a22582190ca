//! Property tests: the three structural transformations behave as total
//! functions with the algebraic shape the tradition ascribes to them.

use hexagram_relations::{mutual, opposite, reversed};
use hexagram_types::{codec, HexagramId};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Generate an arbitrary valid hexagram id.
fn arb_hexagram() -> impl Strategy<Value = HexagramId> {
    (1u8..=64).prop_map(|raw| HexagramId::new(raw).unwrap())
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// Inverting every line twice restores the original hexagram.
    #[test]
    fn opposite_is_an_involution(id in arb_hexagram()) {
        prop_assert_eq!(opposite(opposite(id)), id);
    }

    /// Reading the pattern upside down twice restores the original.
    #[test]
    fn reversed_is_an_involution(id in arb_hexagram()) {
        prop_assert_eq!(reversed(reversed(id)), id);
    }

    /// The nuclear pattern is always itself canonical.
    #[test]
    fn mutual_is_total(id in arb_hexagram()) {
        let nucleus = mutual(id);
        prop_assert!((1..=64).contains(&nucleus.get()));
    }

    /// Opposition commutes with reversal: inverting then flipping equals
    /// flipping then inverting.
    #[test]
    fn opposite_commutes_with_reversed(id in arb_hexagram()) {
        prop_assert_eq!(opposite(reversed(id)), reversed(opposite(id)));
    }

    /// The opposite pattern inverts every line of the subject pattern.
    #[test]
    fn opposite_inverts_every_line(id in arb_hexagram()) {
        let subject = codec::encode(id);
        let inverse = codec::encode(opposite(id));
        for (a, b) in subject.lines().iter().zip(inverse.lines()) {
            prop_assert_eq!(a.inverted(), *b);
        }
    }
}
