//! Randomized train/test partitioning.
//!
//! The shuffle is a paired Fisher-Yates: feature rows and labels are swapped
//! with the same random index at every step, so a sample never separates from
//! its label. The split is a percentage-based cut with `floor` semantics.
//!
//! [`train_test_split`] composes the two over an internal copy of the
//! dataset; the caller's `Dataset` is left untouched.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use super::Dataset;

/// Partitioning errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    #[error("split ratio must be strictly between 0 and 100, got {ratio}")]
    RatioOutOfRange { ratio: u32 },
}

/// The four arrays produced by [`train_test_split`].
#[derive(Debug, Clone)]
pub struct TrainTestSets {
    pub train_features: Vec<Vec<f64>>,
    pub test_features: Vec<Vec<f64>>,
    pub train_labels: Vec<f64>,
    pub test_labels: Vec<f64>,
}

/// Shuffle feature rows and labels in place with a paired Fisher-Yates pass.
///
/// Both slices are permuted identically: at every step the same random index
/// is used to swap `features[i] <-> features[j]` and `labels[i] <-> labels[j]`.
///
/// The random source is injectable for deterministic testing; seeded callers
/// can go through [`train_test_split`] instead.
///
/// # Panics
///
/// Panics if the slices have different lengths (debug builds).
pub fn shuffle_with_rng<R: Rng>(features: &mut [Vec<f64>], labels: &mut [f64], rng: &mut R) {
    debug_assert_eq!(features.len(), labels.len());

    for i in (1..features.len()).rev() {
        let j = rng.gen_range(0..=i);
        features.swap(i, j);
        labels.swap(i, j);
    }
}

/// Split a sequence into a train chunk and a test chunk.
///
/// `ratio` is an integer percentage in `(0, 100)` exclusive;
/// `train_len = floor(ratio / 100 * len)`. The caller is responsible for
/// applying the same ratio to features and labels so the pairing survives.
pub fn split<T: Clone>(ratio: u32, items: &[T]) -> Result<(Vec<T>, Vec<T>), SplitError> {
    if ratio == 0 || ratio >= 100 {
        return Err(SplitError::RatioOutOfRange { ratio });
    }
    let train_len = ratio as usize * items.len() / 100;
    Ok((items[..train_len].to_vec(), items[train_len..].to_vec()))
}

/// Shuffle a dataset and split it into train and test portions.
///
/// Shuffling operates on an internal copy; the input dataset is not mutated.
/// Returns the four resulting arrays, features and labels cut at the same
/// position so every sample stays paired with its label.
///
/// # Example
///
/// ```
/// use linreg_rs::data::{train_test_split, Dataset};
///
/// let data = Dataset::from_single((0..10).map(f64::from).collect(),
///                                 (0..10).map(f64::from).collect()).unwrap();
/// let sets = train_test_split(&data, 70, 42).unwrap();
/// assert_eq!(sets.train_features.len(), 7);
/// assert_eq!(sets.test_labels.len(), 3);
/// ```
pub fn train_test_split(data: &Dataset, ratio: u32, seed: u64) -> Result<TrainTestSets, SplitError> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    train_test_split_with_rng(data, ratio, &mut rng)
}

/// [`train_test_split`] with an injectable random source.
pub fn train_test_split_with_rng<R: Rng>(
    data: &Dataset,
    ratio: u32,
    rng: &mut R,
) -> Result<TrainTestSets, SplitError> {
    if ratio == 0 || ratio >= 100 {
        return Err(SplitError::RatioOutOfRange { ratio });
    }

    let mut features = data.features().to_vec();
    let mut labels = data.labels().to_vec();
    shuffle_with_rng(&mut features, &mut labels, rng);

    let (train_features, test_features) = split(ratio, &features)?;
    let (train_labels, test_labels) = split(ratio, &labels)?;

    Ok(TrainTestSets {
        train_features,
        test_features,
        train_labels,
        test_labels,
    })
}
