//! Testing utilities for linreg-rs.
//!
//! Assertion helpers shared by unit and integration tests. Kept in the
//! library (rather than a test-only module) so downstream crates can reuse
//! them when checking fitted parameters against reference values.

use approx::AbsDiffEq;

/// Default tolerance for floating point comparisons.
///
/// Appropriate for fitted parameters and predictions where values are O(1).
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Assert that two f64 slices are element-wise approximately equal.
///
/// # Panics
///
/// Panics with a per-index diff report if lengths differ or any pair
/// exceeds the tolerance.
pub fn assert_slices_approx_eq(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "slice lengths differ: {} vs {}",
        actual.len(),
        expected.len()
    );

    let mismatches: Vec<String> = actual
        .iter()
        .zip(expected.iter())
        .enumerate()
        .filter(|(_, (a, e))| !a.abs_diff_eq(e, tolerance))
        .map(|(i, (a, e))| format!("  [{i}] actual {a} vs expected {e}"))
        .collect();

    assert!(
        mismatches.is_empty(),
        "slices differ beyond tolerance {tolerance}:\n{}",
        mismatches.join("\n")
    );
}
