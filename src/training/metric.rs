//! Evaluation metrics for model quality.
//!
//! Metrics are separate from the fit loop's internal cost — the model is
//! trained on mean squared error but can be scored with any metric.

/// A metric for evaluating model quality.
///
/// # Implementation Notes
///
/// - `compute`: Called with predictions and labels, returns a scalar score
/// - Lower is better for regression error metrics; use `higher_is_better()`
///   to determine the direction
pub trait Metric {
    /// Compute the metric value over position-paired predictions and labels.
    fn compute(&self, preds: &[f64], labels: &[f64]) -> f64;

    /// Whether higher values indicate better performance.
    fn higher_is_better(&self) -> bool;

    /// Name of the metric (for logging).
    fn name(&self) -> &'static str;
}

// =============================================================================
// MSE (Mean Squared Error)
// =============================================================================

/// Mean Squared Error: mean((pred - label)²)
///
/// Lower is better. The same quantity the fit loop minimizes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mse;

impl Metric for Mse {
    fn compute(&self, preds: &[f64], labels: &[f64]) -> f64 {
        debug_assert_eq!(preds.len(), labels.len());

        if preds.is_empty() {
            return 0.0;
        }

        preds
            .iter()
            .zip(labels.iter())
            .map(|(p, l)| {
                let diff = p - l;
                diff * diff
            })
            .sum::<f64>()
            / preds.len() as f64
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "mse"
    }
}

// =============================================================================
// MAE (Mean Absolute Error)
// =============================================================================

/// Mean Absolute Error: mean(|pred - label|)
///
/// Lower is better. More robust to outliers than MSE.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mae;

impl Metric for Mae {
    fn compute(&self, preds: &[f64], labels: &[f64]) -> f64 {
        debug_assert_eq!(preds.len(), labels.len());

        if preds.is_empty() {
            return 0.0;
        }

        preds
            .iter()
            .zip(labels.iter())
            .map(|(p, l)| (p - l).abs())
            .sum::<f64>()
            / preds.len() as f64
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "mae"
    }
}
