//! User-facing dataset abstraction.
//!
//! This is the canonical entry point for training APIs.

/// Dataset validation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DatasetError {
    #[error("number of labels ({labels}) does not match number of samples ({samples})")]
    LengthMismatch { samples: usize, labels: usize },

    #[error("dataset must contain at least one sample")]
    Empty,

    #[error("inconsistent feature count: sample {sample} expected {expected}, got {got}")]
    RaggedRow {
        sample: usize,
        expected: usize,
        got: usize,
    },

    #[error("non-finite value in sample {sample}")]
    NonFinite { sample: usize },
}

/// A validated regression dataset.
///
/// Holds one feature vector per sample (row-major) and one label per sample.
/// Construction rejects mismatched lengths, empty inputs, ragged rows, and
/// non-finite values, so a `Dataset` that exists is always rectangular with
/// dimensionality >= 1.
///
/// The dataset is immutable through its API. Training borrows it and never
/// mutates it; shuffling in [`crate::data::train_test_split`] operates on an
/// internal copy.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
    n_features: usize,
}

impl Dataset {
    /// Create a dataset from feature rows and a label vector.
    ///
    /// # Example
    ///
    /// ```
    /// use linreg_rs::data::Dataset;
    ///
    /// let data = Dataset::new(vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![0.5, 1.5]).unwrap();
    /// assert_eq!(data.n_samples(), 2);
    /// assert_eq!(data.n_features(), 2);
    /// ```
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Self, DatasetError> {
        if features.len() != labels.len() {
            return Err(DatasetError::LengthMismatch {
                samples: features.len(),
                labels: labels.len(),
            });
        }
        if features.is_empty() {
            return Err(DatasetError::Empty);
        }

        let n_features = features[0].len();
        if n_features == 0 {
            return Err(DatasetError::RaggedRow {
                sample: 0,
                expected: 1,
                got: 0,
            });
        }

        for (sample, row) in features.iter().enumerate() {
            if row.len() != n_features {
                return Err(DatasetError::RaggedRow {
                    sample,
                    expected: n_features,
                    got: row.len(),
                });
            }
            if !row.iter().all(|v| v.is_finite()) {
                return Err(DatasetError::NonFinite { sample });
            }
        }
        if let Some(sample) = labels.iter().position(|v| !v.is_finite()) {
            return Err(DatasetError::NonFinite { sample });
        }

        Ok(Self {
            features,
            labels,
            n_features,
        })
    }

    /// Create a single-feature dataset from a flat value vector.
    ///
    /// Convenience for the common one-variable case: each value becomes a
    /// feature vector of length 1.
    pub fn from_single(values: Vec<f64>, labels: Vec<f64>) -> Result<Self, DatasetError> {
        let features = values.into_iter().map(|v| vec![v]).collect();
        Self::new(features, labels)
    }

    /// Number of samples.
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    /// Number of feature dimensions (D >= 1).
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Feature rows (one vector of length D per sample).
    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    /// Labels (length = n_samples).
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_dataset() {
        let ds = Dataset::new(vec![vec![1.0], vec![2.0]], vec![3.0, 4.0]).unwrap();
        assert_eq!(ds.n_samples(), 2);
        assert_eq!(ds.n_features(), 1);
        assert_eq!(ds.labels(), &[3.0, 4.0]);
    }

    #[test]
    fn from_single_wraps_values() {
        let ds = Dataset::from_single(vec![1.0, 2.0, 3.0], vec![2.0, 4.0, 6.0]).unwrap();
        assert_eq!(ds.n_features(), 1);
        assert_eq!(ds.features()[2], vec![3.0]);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = Dataset::new(vec![vec![1.0]], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::LengthMismatch {
                samples: 1,
                labels: 2
            }
        );
    }

    #[test]
    fn rejects_empty() {
        let err = Dataset::new(vec![], vec![]).unwrap_err();
        assert_eq!(err, DatasetError::Empty);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Dataset::new(vec![vec![1.0, 2.0], vec![1.0]], vec![0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::RaggedRow {
                sample: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn rejects_zero_width_rows() {
        let err = Dataset::new(vec![vec![], vec![]], vec![0.0, 0.0]).unwrap_err();
        assert!(matches!(err, DatasetError::RaggedRow { .. }));
    }

    #[test]
    fn rejects_non_finite_feature() {
        let err = Dataset::new(vec![vec![1.0], vec![f64::NAN]], vec![0.0, 0.0]).unwrap_err();
        assert_eq!(err, DatasetError::NonFinite { sample: 1 });
    }

    #[test]
    fn rejects_non_finite_label() {
        let err = Dataset::new(vec![vec![1.0], vec![2.0]], vec![0.0, f64::INFINITY]).unwrap_err();
        assert_eq!(err, DatasetError::NonFinite { sample: 1 });
    }
}
