//! Successor and rationale tables for the King Wen sequence.

use hexagram_types::HexagramId;

/// Canonical successor of each hexagram, in King Wen order. The chain is
/// complete: 64 wraps around to 1, closing the cycle.
pub(crate) const SUCCESSOR: [u8; HexagramId::COUNT] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, // 1-12
    14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, // 13-24
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, // 25-36
    38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48, 49, // 37-48
    50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, // 49-60
    62, 63, 64, 1, // 61-64
];

/// Rationale for each transition, after the Sequence commentary.
/// Entry `i` explains why hexagram `i + 1` gives way to its successor.
pub(crate) const NECESSITY: [&str; HexagramId::COUNT] = [
    "pure creative force turns toward receptivity",
    "receptivity unfolds into the difficulty of first growth",
    "initial difficulty turns into the appetite for learning",
    "youthful folly gives way to measured waiting",
    "waiting matures into contention",
    "contention consolidates into organized force",
    "command gives way to close alliance",
    "alliance turns toward small accumulation",
    "small accumulation steels itself for resolute conduct",
    "conduct settles into peace",
    "peace tips over into standstill",
    "standstill breaks open into fellowship",
    "fellowship grows into great possession",
    "great possession bows into modesty",
    "modesty rises into enthusiasm",
    "enthusiasm draws a following",
    "following decays into work on the spoiled",
    "repair opens the way for approach",
    "approach widens into contemplation",
    "contemplation sharpens into the bite of decision",
    "decision softens into adornment",
    "adornment wears away to splitting apart",
    "splitting apart carries the seed of return",
    "return clears into innocence",
    "innocence gathers into great taming",
    "great taming turns to nourishment",
    "nourishment overreaches into great exceeding",
    "excess collapses into the abyss",
    "the abyss is answered by clinging light",
    "clinging light stirs mutual influence",
    "influence settles into duration",
    "duration turns toward retreat",
    "retreat reverses into great power",
    "great power advances into progress",
    "progress falls into darkened light",
    "wounding turns homeward to the family",
    "the family divides into opposition",
    "opposition hardens into obstruction",
    "obstruction breaks into deliverance",
    "deliverance gives way to decrease",
    "decrease turns over into increase",
    "increase swells into breakthrough",
    "breakthrough opens into sudden meeting",
    "meeting gathers the crowd together",
    "gathering presses upward",
    "ascent exhausts itself into oppression",
    "oppression finds relief at the well",
    "the stagnant well demands revolution",
    "revolution settles into the cauldron",
    "the cauldron is shaken by thunder",
    "shock comes to rest in stillness",
    "stillness eases into gradual advance",
    "gradual advance completes in the marrying maiden",
    "union swells into abundance",
    "abundance scatters into wandering",
    "wandering yields to gentle penetration",
    "penetration lifts into joy",
    "joy disperses outward",
    "dispersion is bound by limitation",
    "limitation deepens into inner truth",
    "inner truth adjusts through small exceeding",
    "small steps carry across to completion",
    "completion turns back toward the incomplete",
    "the incomplete begins the cycle anew",
];
