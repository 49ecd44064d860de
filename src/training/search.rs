//! Hyperparameter grid search.
//!
//! Exhaustive cross-product over candidate iteration counts and learning
//! rates. Every pair is a fresh, zero-initialized trial fit; nothing is
//! committed anywhere, so the search is free of side effects. The winner is
//! the pair itself, not its fitted parameters — re-run `fit` with the
//! winning pair to obtain those.

use crate::data::Dataset;

use super::trainer::{FitParams, GradientDescent, TrainError};

/// Candidate lists consumed pairwise in full cross-product.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchGrid {
    pub iterations: Vec<usize>,
    pub learning_rates: Vec<f64>,
}

/// The winning pair of a grid search.
///
/// Defaults to `{ 0, 0.0 }`, which is also what a search over empty
/// candidate lists returns.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestParams {
    pub iterations: usize,
    pub learning_rate: f64,
}

/// Exhaustive search over iteration count × learning rate.
///
/// # Example
///
/// ```
/// use linreg_rs::data::Dataset;
/// use linreg_rs::training::{HyperparamSearch, SearchGrid};
///
/// let data = Dataset::from_single(vec![1.0, 2.0, 3.0, 4.0], vec![3.0, 5.0, 7.0, 9.0]).unwrap();
/// let search = HyperparamSearch::new(SearchGrid {
///     iterations: vec![10, 500],
///     learning_rates: vec![0.1, 1e-4],
/// });
/// let best = search.search(&data).unwrap();
/// assert_eq!(best.iterations, 500);
/// assert_eq!(best.learning_rate, 0.1);
/// ```
#[derive(Debug, Clone)]
pub struct HyperparamSearch {
    grid: SearchGrid,
}

impl HyperparamSearch {
    /// Create a search over the given grid.
    pub fn new(grid: SearchGrid) -> Self {
        Self { grid }
    }

    /// Trial-fit every candidate pair and return the one with the lowest
    /// training error.
    ///
    /// Ties keep the first pair in iteration order (strict `<` comparison);
    /// the first pair always initializes the running best. Errors from a
    /// trial fit (a zero iteration candidate) propagate.
    pub fn search(&self, train: &Dataset) -> Result<BestParams, TrainError> {
        let mut best = BestParams::default();
        let mut best_error = f64::NAN;
        let mut first = true;

        for &iterations in &self.grid.iterations {
            for &learning_rate in &self.grid.learning_rates {
                let result = GradientDescent::new(FitParams {
                    iterations,
                    learning_rate,
                    ..Default::default()
                })
                .run(train)?;

                if first || result.error < best_error {
                    best = BestParams {
                        iterations,
                        learning_rate,
                    };
                    best_error = result.error;
                    first = false;
                }
            }
        }

        Ok(best)
    }
}
