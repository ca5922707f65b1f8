//! Goodness-of-fit metrics.

use crate::error::{GeoDetectorError, Result};
use ndarray::ArrayView1;

/// Coefficient of determination R² = 1 − SSR/SST.
///
/// SSR is the sum of squared residuals against the predictions and SST the
/// sum of squares about the mean of `y_true`. A target with zero variance
/// leaves the ratio undefined; a perfect fit then scores 1.0 and anything
/// else 0.0.
///
/// # Errors
/// `LengthMismatch` when the inputs are not row-aligned, `InvalidParameter`
/// on empty input.
pub fn r2_score(y_true: &ArrayView1<'_, f64>, y_pred: &ArrayView1<'_, f64>) -> Result<f64> {
    if y_true.len() != y_pred.len() {
        return Err(GeoDetectorError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(GeoDetectorError::InvalidParameter(
            "r2_score requires at least one observation".to_string(),
        ));
    }

    let mean = y_true.sum() / y_true.len() as f64;
    let mut ssr = 0.0;
    let mut sst = 0.0;
    for (&truth, &pred) in y_true.iter().zip(y_pred.iter()) {
        ssr += (truth - pred) * (truth - pred);
        sst += (truth - mean) * (truth - mean);
    }

    if sst == 0.0 {
        return Ok(if ssr == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ssr / sst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_perfect_fit_scores_one() {
        let y = array![1.0, 2.0, 3.0];
        let score = r2_score(&y.view(), &y.view()).unwrap();
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_grand_mean_prediction_scores_zero() {
        let y = array![1.0, 2.0, 3.0];
        let pred = array![2.0, 2.0, 2.0];
        let score = r2_score(&y.view(), &pred.view()).unwrap();
        assert_relative_eq!(score, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_known_value() {
        // SSR = 0.25 * 4 = 1, SST = 2 * (2.25 + 0.25) = 5.
        let y = array![1.0, 2.0, 3.0, 4.0];
        let pred = array![1.5, 1.5, 3.5, 3.5];
        let score = r2_score(&y.view(), &pred.view()).unwrap();
        assert_relative_eq!(score, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_worse_than_mean_goes_negative() {
        let y = array![1.0, 2.0, 3.0];
        let pred = array![3.0, 2.0, 1.0];
        let score = r2_score(&y.view(), &pred.view()).unwrap();
        assert!(score < 0.0);
    }

    #[test]
    fn test_zero_variance_conventions() {
        let y = array![5.0, 5.0, 5.0];
        let exact = r2_score(&y.view(), &y.view()).unwrap();
        assert_eq!(exact, 1.0);

        let off = array![5.0, 5.0, 6.0];
        let imperfect = r2_score(&y.view(), &off.view()).unwrap();
        assert_eq!(imperfect, 0.0);
    }

    #[test]
    fn test_misaligned_inputs_fail() {
        let y = array![1.0, 2.0];
        let pred = array![1.0];
        let result = r2_score(&y.view(), &pred.view());
        assert!(matches!(
            result,
            Err(GeoDetectorError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_empty_input_fails() {
        let empty: ndarray::Array1<f64> = array![];
        let result = r2_score(&empty.view(), &empty.view());
        assert!(matches!(
            result,
            Err(GeoDetectorError::InvalidParameter(_))
        ));
    }
}
