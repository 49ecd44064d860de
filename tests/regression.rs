//! End-to-end tests for the regression workflow:
//! split → construct → fit → predict → score, plus hyperparameter search.

use linreg_rs::data::{train_test_split, Dataset};
use linreg_rs::model::LinearRegression;
use linreg_rs::testing::{assert_slices_approx_eq, DEFAULT_TOLERANCE};
use linreg_rs::training::{FitParams, SearchGrid};

use rstest::rstest;

/// y = x + 2 over x = 0..99, the canonical noiseless line.
fn line_dataset() -> Dataset {
    let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
    let labels: Vec<f64> = values.iter().map(|x| x + 2.0).collect();
    Dataset::from_single(values, labels).unwrap()
}

#[test]
fn fit_recovers_the_generating_line() {
    let data = line_dataset();
    let mut model = LinearRegression::new(&data);

    // Enough iterations for the slow (intercept) direction to converge too.
    let result = model
        .fit(&FitParams {
            iterations: 200_000,
            learning_rate: 1e-4,
            ..Default::default()
        })
        .unwrap();

    assert!((result.slopes[0] - 1.0).abs() < 1e-3);
    assert!((result.intercept - 2.0).abs() < 1e-3);
    assert!(result.error < 1e-6);

    // The committed parameters are the returned snapshot.
    assert_eq!(model.intercept(), result.intercept);
    assert_eq!(model.slopes(), &result.slopes[..]);
}

#[test]
fn fitted_model_scores_near_zero_on_its_own_training_data() {
    let data = line_dataset();
    let mut model = LinearRegression::new(&data);
    model
        .fit(&FitParams {
            iterations: 200_000,
            learning_rate: 1e-4,
            ..Default::default()
        })
        .unwrap();

    let scores = model.score(data.features(), data.labels()).unwrap();
    assert!(scores.mse < 1e-6);
    assert!(scores.mae < 1e-3);
}

#[test]
fn split_then_fit_then_score_held_out() {
    let data = line_dataset();
    let sets = train_test_split(&data, 80, 42).unwrap();
    assert_eq!(sets.train_features.len(), 80);
    assert_eq!(sets.test_features.len(), 20);

    let train = Dataset::new(sets.train_features, sets.train_labels).unwrap();
    let mut model = LinearRegression::new(&train);
    model
        .fit(&FitParams {
            iterations: 200_000,
            learning_rate: 1e-4,
            ..Default::default()
        })
        .unwrap();

    // Noiseless data: held-out error is as small as the training error.
    let scores = model.score(&sets.test_features, &sets.test_labels).unwrap();
    assert!(scores.mse < 1e-4);
}

#[test]
fn fit_leaves_the_dataset_untouched() {
    let data = line_dataset();
    let before_features = data.features().to_vec();
    let before_labels = data.labels().to_vec();

    let mut model = LinearRegression::new(&data);
    model.fit(&FitParams::default()).unwrap();

    assert_eq!(data.features(), &before_features[..]);
    assert_eq!(data.labels(), &before_labels[..]);
}

#[test]
fn seeded_fit_matches_the_unseeded_fixed_point() {
    // On noiseless data the analytic seed is the optimum already, so the
    // seeded fit lands exactly on the generating line in one iteration.
    let data = line_dataset();
    let mut model = LinearRegression::new(&data);
    let result = model
        .fit(&FitParams {
            iterations: 1,
            learning_rate: 1e-4,
            seed_weights: true,
            ..Default::default()
        })
        .unwrap();

    assert_slices_approx_eq(&result.slopes, &[1.0], DEFAULT_TOLERANCE);
    assert!((result.intercept - 2.0).abs() < DEFAULT_TOLERANCE);
    assert!(result.error < 1e-12);
}

#[test]
fn predictions_follow_the_committed_parameters() {
    let data = line_dataset();
    let mut model = LinearRegression::new(&data);
    model.set_parameters(2.0, vec![1.0]).unwrap();

    let predicted: Vec<f64> = model.predict(data.features()).collect();
    assert_slices_approx_eq(&predicted, data.labels(), DEFAULT_TOLERANCE);

    // Restartable: a second pass yields the identical sequence.
    let second: Vec<f64> = model.predict(data.features()).collect();
    assert_eq!(predicted, second);
}

#[test]
fn grid_search_finds_the_stable_pair() {
    // The original package's acceptance vector: only the smallest learning
    // rate converges, and the longest run at that rate wins.
    let data = line_dataset();
    let model = LinearRegression::new(&data);

    let best = model
        .search_hyperparams(&SearchGrid {
            iterations: vec![10, 20, 100, 1000, 6000],
            learning_rates: vec![1.0, 0.1, 1e-3, 1e-4],
        })
        .unwrap();

    assert_eq!(best.iterations, 6000);
    assert_eq!(best.learning_rate, 1e-4);

    // Search is trial-only: the model's parameters stay untouched.
    assert_eq!(model.intercept(), 0.0);
    assert_eq!(model.slopes(), &[0.0]);
}

#[rstest]
#[case(10, 1, 9)]
#[case(25, 2, 8)]
#[case(50, 5, 5)]
#[case(75, 7, 3)]
#[case(99, 9, 1)]
fn split_ratio_lengths(#[case] ratio: u32, #[case] train_len: usize, #[case] test_len: usize) {
    let values: Vec<f64> = (0..10).map(f64::from).collect();
    let labels = values.clone();
    let data = Dataset::from_single(values, labels).unwrap();

    let sets = train_test_split(&data, ratio, 7).unwrap();
    assert_eq!(sets.train_features.len(), train_len);
    assert_eq!(sets.test_features.len(), test_len);
    assert_eq!(sets.train_labels.len(), train_len);
    assert_eq!(sets.test_labels.len(), test_len);
}

#[rstest]
#[case(1)]
#[case(17)]
#[case(42)]
fn shuffled_pairs_stay_together(#[case] seed: u64) {
    // y = 10x makes any feature/label decoupling visible immediately.
    let values: Vec<f64> = (0..40).map(|i| i as f64).collect();
    let labels: Vec<f64> = values.iter().map(|x| 10.0 * x).collect();
    let data = Dataset::from_single(values, labels).unwrap();

    let sets = train_test_split(&data, 50, seed).unwrap();
    for (row, label) in sets
        .train_features
        .iter()
        .zip(&sets.train_labels)
        .chain(sets.test_features.iter().zip(&sets.test_labels))
    {
        assert_eq!(*label, 10.0 * row[0]);
    }
}

#[cfg(feature = "serde")]
mod serde_round_trips {
    use linreg_rs::training::{BestParams, FitParams, FitResult};

    #[test]
    fn fit_result_round_trips() {
        let result = FitResult {
            intercept: 2.0,
            slopes: vec![1.0, -0.5],
            error: 0.25,
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: FitResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn params_round_trip() {
        let params = FitParams {
            iterations: 6000,
            learning_rate: 1e-4,
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        let back: FitParams = serde_json::from_str(&json).unwrap();
        assert_eq!(back.iterations, params.iterations);
        assert_eq!(back.learning_rate, params.learning_rate);

        let best: BestParams = serde_json::from_str(r#"{"iterations":10,"learning_rate":0.1}"#).unwrap();
        assert_eq!(best.iterations, 10);
    }
}
