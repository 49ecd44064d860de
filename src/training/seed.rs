//! Closed-form starting weights for single-feature training.
//!
//! One pass over the data accumulates the least-squares sums and solves for
//! slope and intercept directly. The result is only ever used to seed
//! gradient descent; the descent loop stays the single source of truth for
//! the fitted parameters, so single- and multi-feature fits behave the same.

use crate::data::Dataset;

/// Seeding errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeedError {
    #[error("cannot derive starting weights: features have zero variance")]
    DegenerateInput,
}

/// Compute `(intercept, slope)` via the closed-form least-squares sums.
///
/// With `Sx = Σx`, `Sy = Σy`, `Sxx = Σx²`, `Sxy = Σxy`:
///
/// ```text
/// slope     = (n·Sxy − Sx·Sy) / (n·Sxx − Sx²)
/// intercept = (Sy·Sxx − Sx·Sxy) / (n·Sxx − Sx²)
/// ```
///
/// Fails with [`SeedError::DegenerateInput`] when the denominator is zero
/// (constant feature values), instead of letting a NaN or infinity leak out.
///
/// The caller must pass a single-feature dataset (debug-asserted).
pub fn analytic_seed(train: &Dataset) -> Result<(f64, f64), SeedError> {
    debug_assert_eq!(train.n_features(), 1);

    let n = train.n_samples() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_xy = 0.0;

    for (row, &y) in train.features().iter().zip(train.labels()) {
        let x = row[0];
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_xy += x * y;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(SeedError::DegenerateInput);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y * sum_xx - sum_x * sum_xy) / denominator;
    Ok((intercept, slope))
}
