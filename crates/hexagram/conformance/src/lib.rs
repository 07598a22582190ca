//! Conformance suite for the hexagram engine's static tables.
//!
//! Verifies the structural guarantees the engine is built on: the codec
//! bijection, the algebra of the three relationship transformations, the
//! element cycles, the stage partition, and the time-axis constants. Each
//! check is an independent, self-contained assertion.
//!
//! Run with: `cargo test -p hexagram-conformance`

#![deny(unsafe_code)]

pub mod checks;
pub mod report;

pub use checks::run_all;
pub use report::{CheckResult, ConformanceReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_full_suite_passes() {
        let report = run_all();
        assert!(report.passed(), "{report}");
    }

    #[test]
    fn every_check_is_reported_once() {
        let report = run_all();
        let mut names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
