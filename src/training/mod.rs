//! Training infrastructure for the linear model.
//!
//! This module provides the core types needed for fitting:
//!
//! - [`GradientDescent`]: Batch gradient-descent engine over a dataset
//! - [`FitParams`] / [`FitResult`]: Training configuration and best snapshot
//! - [`HyperparamSearch`]: Exhaustive grid search over iterations × learning rate
//! - [`analytic_seed`]: Closed-form starting weights for the single-feature case
//! - [`Metric`]: Trait for evaluating model quality ([`Mse`], [`Mae`])
//! - [`TrainingLogger`]: Progress output with verbosity levels

mod logger;
mod metric;
mod search;
mod seed;
mod trainer;

pub use logger::{TrainingLogger, Verbosity};
pub use metric::{Mae, Metric, Mse};
pub use search::{BestParams, HyperparamSearch, SearchGrid};
pub use seed::{analytic_seed, SeedError};
pub use trainer::{FitParams, FitResult, GradientDescent, TrainError};
