//! linreg-rs: ordinary least-squares linear regression for Rust.
//!
//! Fits single- and multi-feature linear models with batch gradient descent.
//! The numeric core is dependency-free scalar arithmetic: explicit loops over
//! samples and feature dimensions, no matrix library. This keeps the crate
//! predictable and easy to embed.
//!
//! # Key Types
//!
//! - [`LinearRegression`] - Model with fit/predict/score
//! - [`FitParams`] / [`FitResult`] - Training configuration and best-snapshot result
//! - [`Dataset`] - Validated training data
//! - [`HyperparamSearch`] - Grid search over iteration count × learning rate
//!
//! # Training
//!
//! ```
//! use linreg_rs::data::Dataset;
//! use linreg_rs::model::LinearRegression;
//! use linreg_rs::training::FitParams;
//!
//! // y = 2x + 1
//! let features: Vec<Vec<f64>> = (1..=4).map(|x| vec![x as f64]).collect();
//! let labels: Vec<f64> = (1..=4).map(|x| 2.0 * x as f64 + 1.0).collect();
//! let data = Dataset::new(features, labels).unwrap();
//!
//! let mut model = LinearRegression::new(&data);
//! let result = model
//!     .fit(&FitParams {
//!         iterations: 2000,
//!         learning_rate: 0.1,
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! assert!((result.slopes[0] - 2.0).abs() < 1e-6);
//! assert!((result.intercept - 1.0).abs() < 1e-6);
//! ```
//!
//! # Splitting Data
//!
//! Use [`data::train_test_split`] to shuffle and partition a dataset into
//! train and test portions before fitting.

// Re-export approx traits for users who want to compare fitted parameters
pub use approx;

pub mod data;
pub mod model;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level model types
pub use model::{LinearRegression, ModelError, Scores};

// Training types (configuration, results, search)
pub use training::{BestParams, FitParams, FitResult, HyperparamSearch, SearchGrid, TrainError};

// Data types (for preparing training data)
pub use data::{Dataset, DatasetError, SplitError};
