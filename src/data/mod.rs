//! Dataset construction and partitioning.
//!
//! [`Dataset`] is the canonical entry point for training APIs: it validates
//! raw feature/label arrays once at construction, so everything downstream
//! can assume a rectangular, finite, non-empty dataset.
//!
//! [`train_test_split`] shuffles a dataset (paired Fisher-Yates over an
//! internal copy) and splits it into train and test portions by an integer
//! percentage ratio.

mod dataset;
mod partition;

pub use dataset::{Dataset, DatasetError};
pub use partition::{
    shuffle_with_rng, split, train_test_split, train_test_split_with_rng, SplitError,
    TrainTestSets,
};
