//! Shared test fixtures for the ROI calculator integration tests.
//!
//! Provides the reference scenarios pinned by the model's documented
//! examples, plus a float comparison helper.

#![allow(dead_code)]

use roi_calculator::{Assumptions, RoiCalculator, RoiInput};
use std::io::Write;
use tempfile::NamedTempFile;

pub const EPSILON: f64 = 1e-9;

/// Assert two floats are equal within `EPSILON`, scaled by magnitude.
pub fn assert_close(actual: f64, expected: f64) {
    let tolerance = EPSILON * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} to be within {} of {}",
        actual,
        tolerance,
        expected
    );
}

/// Calculator built with the default assumptions.
pub fn default_calculator() -> RoiCalculator {
    RoiCalculator::builder().build().unwrap()
}

/// 50 agents, 10k calls/month, Bangladesh baseline.
pub fn bangladesh_team() -> RoiInput {
    RoiInput::new(50, 300, 10_000)
        .with_cost_per_agent(500.0)
        .with_country("Bangladesh")
}

/// A single agent with no country, explicit cost of 500.
pub fn single_agent() -> RoiInput {
    RoiInput::new(1, 300, 100).with_cost_per_agent(500.0)
}

/// Assumptions under which AI costs more than a human team, so the
/// scenario loses money.
pub fn expensive_ai() -> Assumptions {
    Assumptions {
        ai_cost_per_agent: 1_000.0,
        ..Assumptions::default()
    }
}

/// Write `contents` to a temp file and return it. Keep the handle alive for
/// as long as the path is needed.
pub fn write_temp_json(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file.flush().unwrap();
    file
}
