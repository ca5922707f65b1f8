//! Grouped-mean regression.
//!
//! The stratification core: fitting computes the mean response within every
//! distinct combination of covariate values, and predicting maps each row
//! back to the mean of its group.

use crate::error::{GeoDetectorError, Result};
use ndarray::{Array1, ArrayView1};
use std::collections::HashMap;

/// Key identifying one stratum: the bit patterns of its covariate values.
type GroupKey = Vec<u64>;

/// Regressor that predicts the mean response of each covariate-value group.
///
/// `fit` replaces any previously fitted state. Prediction is an O(1) lookup
/// per row and is intended to run in-sample, on the same columns the fit
/// used; that is what the q statistic requires.
#[derive(Debug, Clone, Default)]
pub struct GroupedMeanRegressor {
    group_means: Option<HashMap<GroupKey, f64>>,
    n_covariates: usize,
}

impl GroupedMeanRegressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `fit` has completed at least once.
    pub fn is_fitted(&self) -> bool {
        self.group_means.is_some()
    }

    /// Number of strata in the fitted grouping (0 before fit).
    pub fn n_groups(&self) -> usize {
        self.group_means.as_ref().map_or(0, |means| means.len())
    }

    /// Fit group means from row-aligned covariate columns and a response.
    ///
    /// # Arguments
    /// * `covariates` - One or more categorical columns, row-aligned with
    ///   each other and with the response.
    /// * `response` - The numeric outcome column.
    ///
    /// # Errors
    /// `InvalidParameter` when no covariate column is given, `LengthMismatch`
    /// when a column's length differs from the response's.
    pub fn fit(
        &mut self,
        covariates: &[ArrayView1<'_, f64>],
        response: &ArrayView1<'_, f64>,
    ) -> Result<()> {
        if covariates.is_empty() {
            return Err(GeoDetectorError::InvalidParameter(
                "at least one covariate column is required".to_string(),
            ));
        }
        let n_rows = response.len();
        for column in covariates {
            if column.len() != n_rows {
                return Err(GeoDetectorError::LengthMismatch {
                    expected: n_rows,
                    actual: column.len(),
                });
            }
        }

        let mut sums: HashMap<GroupKey, (f64, usize)> = HashMap::new();
        for row in 0..n_rows {
            let entry = sums.entry(group_key(covariates, row)).or_insert((0.0, 0));
            entry.0 += response[row];
            entry.1 += 1;
        }

        self.group_means = Some(
            sums.into_iter()
                .map(|(key, (sum, count))| (key, sum / count as f64))
                .collect(),
        );
        self.n_covariates = covariates.len();
        Ok(())
    }

    /// Predict the fitted group mean for every row of the given columns.
    ///
    /// # Errors
    /// `NotFitted` before any fit, `InvalidParameter` when the column count
    /// differs from the fit, `UnseenCombination` when a row's covariate
    /// combination has no fitted group.
    pub fn predict(&self, covariates: &[ArrayView1<'_, f64>]) -> Result<Array1<f64>> {
        let means = self
            .group_means
            .as_ref()
            .ok_or(GeoDetectorError::NotFitted)?;
        if covariates.len() != self.n_covariates {
            return Err(GeoDetectorError::InvalidParameter(format!(
                "fitted with {} covariate columns, got {}",
                self.n_covariates,
                covariates.len()
            )));
        }
        let n_rows = covariates[0].len();
        for column in &covariates[1..] {
            if column.len() != n_rows {
                return Err(GeoDetectorError::LengthMismatch {
                    expected: n_rows,
                    actual: column.len(),
                });
            }
        }

        let mut predictions = Array1::zeros(n_rows);
        for row in 0..n_rows {
            match means.get(&group_key(covariates, row)) {
                Some(&mean) => predictions[row] = mean,
                None => return Err(GeoDetectorError::UnseenCombination { row }),
            }
        }
        Ok(predictions)
    }
}

/// Category values are keyed by bit pattern; -0.0 is folded into 0.0 so both
/// zeros land in the same stratum.
fn group_key(covariates: &[ArrayView1<'_, f64>], row: usize) -> GroupKey {
    covariates
        .iter()
        .map(|column| {
            let value = column[row];
            (if value == 0.0 { 0.0 } else { value }).to_bits()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_fit_single_covariate_means() {
        let covariate = array![1.0, 1.0, 2.0, 2.0];
        let response = array![0.2, 0.4, 1.0, 3.0];

        let mut regressor = GroupedMeanRegressor::new();
        assert!(!regressor.is_fitted());
        regressor
            .fit(&[covariate.view()], &response.view())
            .unwrap();

        assert!(regressor.is_fitted());
        assert_eq!(regressor.n_groups(), 2);

        let predictions = regressor.predict(&[covariate.view()]).unwrap();
        assert_eq!(predictions, array![0.3, 0.3, 2.0, 2.0]);
    }

    #[test]
    fn test_fit_two_covariates_groups_by_pair() {
        let first = array![1.0, 1.0, 1.0, 2.0];
        let second = array![1.0, 1.0, 2.0, 2.0];
        let response = array![1.0, 3.0, 5.0, 7.0];

        let mut regressor = GroupedMeanRegressor::new();
        regressor
            .fit(&[first.view(), second.view()], &response.view())
            .unwrap();

        // Pairs (1,1), (1,2), (2,2).
        assert_eq!(regressor.n_groups(), 3);
        let predictions = regressor
            .predict(&[first.view(), second.view()])
            .unwrap();
        assert_eq!(predictions, array![2.0, 2.0, 5.0, 7.0]);
    }

    #[test]
    fn test_refit_replaces_state() {
        let covariate = array![1.0, 2.0];
        let mut regressor = GroupedMeanRegressor::new();
        regressor
            .fit(&[covariate.view()], &array![10.0, 20.0].view())
            .unwrap();
        regressor
            .fit(&[covariate.view()], &array![1.0, 2.0].view())
            .unwrap();

        let predictions = regressor.predict(&[covariate.view()]).unwrap();
        assert_eq!(predictions, array![1.0, 2.0]);
    }

    #[test]
    fn test_predict_before_fit_fails() {
        let regressor = GroupedMeanRegressor::new();
        let result = regressor.predict(&[array![1.0].view()]);
        assert!(matches!(result, Err(GeoDetectorError::NotFitted)));
    }

    #[test]
    fn test_unseen_combination_fails_with_row() {
        let covariate = array![1.0, 2.0];
        let mut regressor = GroupedMeanRegressor::new();
        regressor
            .fit(&[covariate.view()], &array![1.0, 2.0].view())
            .unwrap();

        let result = regressor.predict(&[array![2.0, 3.0].view()]);
        assert!(matches!(
            result,
            Err(GeoDetectorError::UnseenCombination { row: 1 })
        ));
    }

    #[test]
    fn test_fit_without_covariates_fails() {
        let mut regressor = GroupedMeanRegressor::new();
        let result = regressor.fit(&[], &array![1.0].view());
        assert!(matches!(
            result,
            Err(GeoDetectorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_misaligned_columns_fail() {
        let mut regressor = GroupedMeanRegressor::new();
        let result = regressor.fit(&[array![1.0, 2.0].view()], &array![1.0].view());
        assert!(matches!(
            result,
            Err(GeoDetectorError::LengthMismatch {
                expected: 1,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_predict_arity_must_match_fit() {
        let covariate = array![1.0, 2.0];
        let mut regressor = GroupedMeanRegressor::new();
        regressor
            .fit(&[covariate.view()], &array![1.0, 2.0].view())
            .unwrap();

        let result = regressor.predict(&[covariate.view(), covariate.view()]);
        assert!(matches!(
            result,
            Err(GeoDetectorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_negative_zero_joins_positive_zero_group() {
        let covariate = array![0.0, -0.0];
        let response = array![1.0, 3.0];

        let mut regressor = GroupedMeanRegressor::new();
        regressor
            .fit(&[covariate.view()], &response.view())
            .unwrap();

        assert_eq!(regressor.n_groups(), 1);
        let predictions = regressor.predict(&[covariate.view()]).unwrap();
        assert_eq!(predictions, array![2.0, 2.0]);
    }
}
