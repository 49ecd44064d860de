//! Batch gradient-descent engine.
//!
//! One iteration is a full pass over the training set: residuals and cost
//! with the current parameters, then one simultaneous update of the
//! intercept and every slope from gradients of the mean squared error.
//! The returned result is the best snapshot seen across all iterations,
//! not necessarily the final one: a fixed learning rate can overshoot and
//! oscillate the cost, and the best-seen policy makes the extra iterations
//! harmless.
//!
//! # Example
//!
//! ```
//! use linreg_rs::data::Dataset;
//! use linreg_rs::training::{FitParams, GradientDescent};
//!
//! let data = Dataset::from_single(vec![1.0, 2.0, 3.0, 4.0], vec![3.0, 5.0, 7.0, 9.0]).unwrap();
//! let engine = GradientDescent::new(FitParams {
//!     iterations: 2000,
//!     learning_rate: 0.1,
//!     ..Default::default()
//! });
//! let result = engine.run(&data).unwrap();
//! assert!(result.error < 1e-9);
//! ```

use crate::data::Dataset;

use super::logger::{TrainingLogger, Verbosity};
use super::seed::{analytic_seed, SeedError};

// ============================================================================
// FitParams
// ============================================================================

/// Parameters for one fit call.
///
/// Use struct construction with `..Default::default()` for convenient
/// configuration.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitParams {
    /// Number of gradient-descent iterations (full passes over the data).
    pub iterations: usize,

    /// Learning rate. Must be positive; too-large values diverge, which
    /// shows up as a non-finite or stale best error rather than an `Err`.
    pub learning_rate: f64,

    /// Seed the parameters with the closed-form least-squares estimate
    /// before descending. Only applies to single-feature datasets; silently
    /// skipped for D > 1.
    pub seed_weights: bool,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            iterations: 1000,
            learning_rate: 1e-3,
            seed_weights: false,
            verbosity: Verbosity::default(),
        }
    }
}

// ============================================================================
// FitResult
// ============================================================================

/// The best parameter snapshot seen during one fit call.
///
/// `error` is the training mean squared error of exactly these parameters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitResult {
    pub intercept: f64,
    pub slopes: Vec<f64>,
    pub error: f64,
}

// ============================================================================
// GradientDescent
// ============================================================================

/// Training errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrainError {
    #[error("iteration count must be positive")]
    NoIterations,

    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Batch gradient-descent engine for linear regression.
///
/// Holds the fit configuration; [`run`](Self::run) borrows a dataset and
/// produces a [`FitResult`] without touching any model state, which is what
/// makes hyperparameter-search trials side-effect-free.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    params: FitParams,
}

impl GradientDescent {
    /// Create an engine with the given configuration.
    pub fn new(params: FitParams) -> Self {
        Self { params }
    }

    /// Run gradient descent over the dataset.
    ///
    /// Cost is O(iterations · n · D).
    pub fn run(&self, train: &Dataset) -> Result<FitResult, TrainError> {
        if self.params.iterations == 0 {
            return Err(TrainError::NoIterations);
        }

        let n = train.n_samples();
        let n_features = train.n_features();
        let features = train.features();
        let labels = train.labels();

        let mut intercept = 0.0;
        let mut slopes = vec![0.0; n_features];

        if self.params.seed_weights && n_features == 1 {
            let (seed_intercept, seed_slope) = analytic_seed(train)?;
            intercept = seed_intercept;
            slopes[0] = seed_slope;
        }

        let mut best_intercept = intercept;
        let mut best_slopes = slopes.clone();
        let mut best_error = f64::NAN;

        let mut residuals = vec![0.0; n];
        let mut grad_slopes = vec![0.0; n_features];
        let inv_n = 1.0 / n as f64;

        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(self.params.iterations);

        for iteration in 1..=self.params.iterations {
            // Residuals and cost with the parameters as of the start of the
            // iteration. The snapshot that competes for best-so-far is the
            // one these residuals belong to.
            let mut squared_sum = 0.0;
            for (i, row) in features.iter().enumerate() {
                let mut predicted = intercept;
                for (slope, x) in slopes.iter().zip(row) {
                    predicted += slope * x;
                }
                let residual = predicted - labels[i];
                residuals[i] = residual;
                squared_sum += residual * residual;
            }
            let mse = squared_sum * inv_n;

            if iteration == 1 || mse < best_error {
                best_error = mse;
                best_intercept = intercept;
                best_slopes.copy_from_slice(&slopes);
            }
            logger.log_iteration(iteration, mse);

            // Gradients of the MSE, then one simultaneous update.
            let mut grad_intercept = 0.0;
            grad_slopes.fill(0.0);
            for (row, residual) in features.iter().zip(residuals.iter()) {
                grad_intercept += residual;
                for (grad, x) in grad_slopes.iter_mut().zip(row) {
                    *grad += residual * x;
                }
            }
            let step = self.params.learning_rate * 2.0 * inv_n;
            intercept -= step * grad_intercept;
            for (slope, grad) in slopes.iter_mut().zip(grad_slopes.iter()) {
                *slope -= step * grad;
            }
        }

        logger.finish_training(best_error);

        Ok(FitResult {
            intercept: best_intercept,
            slopes: best_slopes,
            error: best_error,
        })
    }
}
