//! Five-level hexagram transformation synthesizer.
//!
//! The engine takes a subject hexagram plus optional context and produces a
//! layered change assessment. Each level strictly supersedes the previous
//! one:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                       SYNTHESIZER                          │
//! ├────────────────────────────────────────────────────────────┤
//! │  1 Basic        changing lines, or the static sentinel     │
//! │  2 Relational   mutual + reversed + opposite               │
//! │  3 Elemental    element tag + seasonal alignment           │
//! │  4 Sequential   successor + stage + necessity rationale    │
//! │  5 Comprehensive  all of the above + persona and time axes │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Components
//!
//! - [`Synthesizer`]: stateless orchestrator; the single entry point is
//!   [`Synthesizer::synthesize`]
//! - [`SynthesisOptions`]: explicit configuration with documented defaults,
//!   validated eagerly
//! - [`TransformationResult`]: level-tagged payload with fixed quality
//!   constants
//!
//! Exactly two error kinds escape the entry point, both before any level
//! runs: an out-of-range subject id and malformed options. Everything else
//! degrades to documented defaults.

#![deny(unsafe_code)]

pub mod error;
pub mod options;
pub mod result;
pub mod synthesizer;

pub use error::SynthesisError;
pub use options::{
    Level, PersonaWeights, QualityMetrics, SynthesisOptions, TimeContext, WEIGHT_EPSILON,
};
pub use result::{
    BasicAnalysis, ComprehensiveAnalysis, ElementalAnalysis, LevelAnalysis, PersonaBlend,
    RelationalAnalysis, SequentialAnalysis, TransformationResult,
};
pub use synthesizer::Synthesizer;
