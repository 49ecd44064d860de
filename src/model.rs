//! Linear regression model: parameter state, prediction, and scoring.

use crate::data::Dataset;
use crate::training::{
    BestParams, FitParams, FitResult, GradientDescent, HyperparamSearch, Mae, Metric, Mse,
    SearchGrid, TrainError,
};

/// Model call-site errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("number of test labels ({labels}) does not match number of test samples ({samples})")]
    LengthMismatch { samples: usize, labels: usize },

    #[error("parameter dimension mismatch: model has {expected} slopes, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Model quality on a held-out set.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores {
    /// Mean squared error.
    pub mse: f64,
    /// Mean absolute error.
    pub mae: f64,
}

/// Ordinary least-squares linear model fit by batch gradient descent.
///
/// Owns the parameter state (intercept + one slope per feature dimension)
/// and borrows its training set, which is never mutated. A freshly
/// constructed model predicts with all-zero parameters; [`fit`](Self::fit)
/// and [`set_parameters`](Self::set_parameters) install fitted ones.
///
/// # Example
///
/// ```
/// use linreg_rs::data::Dataset;
/// use linreg_rs::model::LinearRegression;
/// use linreg_rs::training::FitParams;
///
/// let data = Dataset::from_single(vec![1.0, 2.0, 3.0, 4.0], vec![3.0, 5.0, 7.0, 9.0]).unwrap();
/// let mut model = LinearRegression::new(&data);
/// model.fit(&FitParams { iterations: 2000, learning_rate: 0.1, ..Default::default() }).unwrap();
///
/// let scores = model.score(data.features(), data.labels()).unwrap();
/// assert!(scores.mse < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct LinearRegression<'a> {
    train: &'a Dataset,
    intercept: f64,
    slopes: Vec<f64>,
}

impl<'a> LinearRegression<'a> {
    /// Create an unfitted model over a training set.
    ///
    /// Parameters start at zero; the dataset was already validated at
    /// construction, so this cannot fail.
    pub fn new(train: &'a Dataset) -> Self {
        Self {
            train,
            intercept: 0.0,
            slopes: vec![0.0; train.n_features()],
        }
    }

    /// The intercept of the current parameters.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// The per-feature slopes of the current parameters.
    pub fn slopes(&self) -> &[f64] {
        &self.slopes
    }

    /// The training set this model was constructed over.
    pub fn train_set(&self) -> &Dataset {
        self.train
    }

    /// Fit the model with batch gradient descent and commit the best
    /// snapshot seen as the model's parameters.
    ///
    /// Returns the snapshot as a [`FitResult`]. Fails with
    /// [`TrainError::NoIterations`] when `params.iterations == 0`, and
    /// propagates a seeding error when `params.seed_weights` is set on a
    /// degenerate single-feature dataset.
    pub fn fit(&mut self, params: &FitParams) -> Result<FitResult, TrainError> {
        let result = GradientDescent::new(params.clone()).run(self.train)?;
        self.intercept = result.intercept;
        self.slopes.copy_from_slice(&result.slopes);
        Ok(result)
    }

    /// Predict one value per feature row, lazily and in input order.
    ///
    /// The returned iterator borrows the model; it can be re-created by
    /// calling `predict` again and never mutates model state. Rows are
    /// assumed to have the model's dimensionality.
    pub fn predict<'b>(&'b self, features: &'b [Vec<f64>]) -> Predictions<'b> {
        Predictions {
            intercept: self.intercept,
            slopes: &self.slopes,
            rows: features.iter(),
        }
    }

    /// Predict a single feature row.
    pub fn predict_row(&self, row: &[f64]) -> f64 {
        debug_assert_eq!(row.len(), self.slopes.len());
        let mut sum = self.intercept;
        for (slope, x) in self.slopes.iter().zip(row) {
            sum += slope * x;
        }
        sum
    }

    /// Score the current parameters against a held-out set.
    ///
    /// Computes mean squared error and mean absolute error over
    /// position-paired predictions and labels.
    pub fn score(&self, features: &[Vec<f64>], labels: &[f64]) -> Result<Scores, ModelError> {
        if features.len() != labels.len() {
            return Err(ModelError::LengthMismatch {
                samples: features.len(),
                labels: labels.len(),
            });
        }

        let predictions: Vec<f64> = self.predict(features).collect();
        Ok(Scores {
            mse: Mse.compute(&predictions, labels),
            mae: Mae.compute(&predictions, labels),
        })
    }

    /// Install externally computed or previously fitted parameters.
    ///
    /// Only the dimensionality is checked; values are taken as-is.
    pub fn set_parameters(&mut self, intercept: f64, slopes: Vec<f64>) -> Result<(), ModelError> {
        if slopes.len() != self.slopes.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.slopes.len(),
                got: slopes.len(),
            });
        }
        self.intercept = intercept;
        self.slopes = slopes;
        Ok(())
    }

    /// Grid-search iteration count × learning rate over the training set.
    ///
    /// Every candidate pair is a side-effect-free trial fit; the model's
    /// parameters are left untouched. See [`HyperparamSearch`].
    pub fn search_hyperparams(&self, grid: &SearchGrid) -> Result<BestParams, TrainError> {
        HyperparamSearch::new(grid.clone()).search(self.train)
    }
}

/// Lazy prediction sequence returned by [`LinearRegression::predict`].
///
/// Yields `intercept + Σ slopes[d] · row[d]` per input row, in input order.
#[derive(Debug, Clone)]
pub struct Predictions<'a> {
    intercept: f64,
    slopes: &'a [f64],
    rows: std::slice::Iter<'a, Vec<f64>>,
}

impl Iterator for Predictions<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let row = self.rows.next()?;
        let mut sum = self.intercept;
        for (slope, x) in self.slopes.iter().zip(row) {
            sum += slope * x;
        }
        Some(sum)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.rows.size_hint()
    }
}

impl ExactSizeIterator for Predictions<'_> {}
