//! Stratified-heterogeneity detection.
//!
//! [`GeoDetector`] orchestrates the grouped-mean regressor across single
//! covariates and covariate pairs, scores each fit with R² to obtain q
//! values, assembles the symmetric q matrix, and classifies pairwise
//! interactions.

use crate::dataset::Dataset;
use crate::error::{GeoDetectorError, Result};
use crate::interaction::InteractionType;
use crate::matrix::{InteractionTypeMatrix, QMatrix};
use crate::metrics::r2_score;
use crate::regressor::GroupedMeanRegressor;
use ndarray::ArrayView1;
use rayon::prelude::*;

/// Detector over a borrowed dataset.
///
/// Construction validates every referenced column eagerly; the q methods are
/// pure functions over the dataset, each fitting its own transient regressor.
#[derive(Debug)]
pub struct GeoDetector<'a> {
    data: &'a Dataset,
    x_names: Vec<String>,
    y_name: String,
    tolerance: f64,
}

impl<'a> GeoDetector<'a> {
    /// Create a detector for the given covariates and response.
    ///
    /// # Arguments
    /// * `data` - The dataset holding all referenced columns.
    /// * `x_names` - Ordered, distinct categorical covariate column names.
    /// * `y_name` - Numeric response column name.
    ///
    /// # Errors
    /// `InvalidParameter` when `x_names` is empty or repeats a name,
    /// `MissingColumn` (naming the column) when any referenced column is
    /// absent from the dataset.
    pub fn new(data: &'a Dataset, x_names: &[&str], y_name: &str) -> Result<Self> {
        if x_names.is_empty() {
            return Err(GeoDetectorError::InvalidParameter(
                "at least one covariate name is required".to_string(),
            ));
        }
        for (idx, name) in x_names.iter().enumerate() {
            if x_names[..idx].contains(name) {
                return Err(GeoDetectorError::InvalidParameter(format!(
                    "duplicate covariate name '{}'",
                    name
                )));
            }
        }
        for name in x_names {
            if !data.contains_column(name) {
                return Err(GeoDetectorError::MissingColumn((*name).to_string()));
            }
        }
        if !data.contains_column(y_name) {
            return Err(GeoDetectorError::MissingColumn(y_name.to_string()));
        }

        Ok(Self {
            data,
            x_names: x_names.iter().map(|name| (*name).to_string()).collect(),
            y_name: y_name.to_string(),
            tolerance: 0.0,
        })
    }

    /// Widen the equality band used for the `Independent` interaction type.
    ///
    /// The default of 0.0 demands exact equality between q12 and q1 + q2.
    pub fn with_independence_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Covariate names, in input order.
    pub fn covariate_names(&self) -> &[String] {
        &self.x_names
    }

    /// Response column name.
    pub fn response_name(&self) -> &str {
        &self.y_name
    }

    /// q value of each covariate on its own, in covariate order.
    ///
    /// q = R² of the in-sample grouped-mean predictions; it lies in
    /// (−∞, 1], with 1 meaning the categories fully separate the response
    /// and 0 meaning no explanatory power.
    pub fn single_q_values(&self) -> Result<Vec<(String, f64)>> {
        self.single_qs().map(|qs| {
            self.x_names
                .iter()
                .cloned()
                .zip(qs)
                .collect()
        })
    }

    /// q value of every unordered covariate pair, in combination order.
    ///
    /// Produces n·(n−1)/2 entries for n covariates. Pairs are fitted
    /// independently and in parallel; the output order is deterministic.
    pub fn pairwise_q_values(&self) -> Result<Vec<((String, String), f64)>> {
        self.pairwise_qs().map(|pairs| {
            pairs
                .into_iter()
                .map(|((i, j), q)| {
                    ((self.x_names[i].clone(), self.x_names[j].clone()), q)
                })
                .collect()
        })
    }

    /// Symmetric q matrix: single q on the diagonal, pairwise q off it.
    pub fn interaction_matrix(&self) -> Result<QMatrix> {
        let singles = self.single_qs()?;
        let pairs = self.pairwise_qs()?;
        Ok(self.assemble_q_matrix(&singles, &pairs))
    }

    /// Symmetric q matrix together with the interaction type of every pair.
    ///
    /// # Errors
    /// `UnclassifiableInteraction` when a pair's q value falls on a band
    /// boundary that the classification rule cannot label.
    pub fn interaction_matrix_with_types(
        &self,
    ) -> Result<(QMatrix, InteractionTypeMatrix)> {
        let singles = self.single_qs()?;
        let pairs = self.pairwise_qs()?;
        let matrix = self.assemble_q_matrix(&singles, &pairs);

        let mut types = InteractionTypeMatrix::new(self.x_names.clone());
        for &((i, j), q12) in &pairs {
            let label = InteractionType::classify(singles[i], singles[j], q12, self.tolerance)?;
            types.set_symmetric(i, j, label);
        }

        Ok((matrix, types))
    }

    fn single_qs(&self) -> Result<Vec<f64>> {
        self.x_names
            .iter()
            .map(|name| self.q_for(&[name.as_str()]))
            .collect()
    }

    fn pairwise_qs(&self) -> Result<Vec<((usize, usize), f64)>> {
        combination_pairs(self.x_names.len())
            .into_par_iter()
            .map(|(i, j)| {
                let q = self.q_for(&[self.x_names[i].as_str(), self.x_names[j].as_str()])?;
                Ok(((i, j), q))
            })
            .collect()
    }

    fn assemble_q_matrix(
        &self,
        singles: &[f64],
        pairs: &[((usize, usize), f64)],
    ) -> QMatrix {
        let mut matrix = QMatrix::new(self.x_names.clone());
        for (i, &q) in singles.iter().enumerate() {
            matrix.set_symmetric(i, i, q);
        }
        for &((i, j), q) in pairs {
            matrix.set_symmetric(i, j, q);
        }
        matrix
    }

    /// Fit a transient grouped-mean regressor on the named covariate columns
    /// and score the in-sample predictions against the response.
    fn q_for(&self, names: &[&str]) -> Result<f64> {
        let columns: Vec<ArrayView1<'_, f64>> = names
            .iter()
            .map(|name| {
                self.data
                    .column(name)
                    .ok_or_else(|| GeoDetectorError::MissingColumn((*name).to_string()))
            })
            .collect::<Result<_>>()?;
        let response = self
            .data
            .column(&self.y_name)
            .ok_or_else(|| GeoDetectorError::MissingColumn(self.y_name.clone()))?;

        let mut regressor = GroupedMeanRegressor::new();
        regressor.fit(&columns, &response)?;
        let predictions = regressor.predict(&columns)?;
        r2_score(&response, &predictions.view())
    }
}

/// All index pairs (i, j) with i < j, in row-major combination order.
fn combination_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}
