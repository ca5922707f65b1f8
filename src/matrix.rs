//! Symmetric result tables indexed by covariate name.

use crate::error::{GeoDetectorError, Result};
use crate::interaction::InteractionType;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Square symmetric table of q values.
///
/// Rows and columns are indexed by covariate name; the diagonal holds
/// single-covariate q values and the off-diagonal holds pairwise interaction
/// q values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QMatrix {
    names: Vec<String>,
    values: Array2<f64>,
}

impl QMatrix {
    pub(crate) fn new(names: Vec<String>) -> Self {
        let n = names.len();
        Self {
            names,
            values: Array2::from_elem((n, n), f64::NAN),
        }
    }

    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, q: f64) {
        self.values[[i, j]] = q;
        self.values[[j, i]] = q;
    }

    /// Covariate names indexing the rows and columns.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The full value table, row-and-column ordered by `names`.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// q value addressed by row and column name.
    pub fn get(&self, row: &str, col: &str) -> Option<f64> {
        let i = self.index_of(row)?;
        let j = self.index_of(col)?;
        Some(self.values[[i, j]])
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|existing| existing == name)
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GeoDetectorError::SerializationError(e.to_string()))
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GeoDetectorError::SerializationError(e.to_string()))
    }
}

/// Square table of interaction types, parallel to [`QMatrix`].
///
/// Only off-diagonal entries are populated; the diagonal stays `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionTypeMatrix {
    names: Vec<String>,
    entries: Array2<Option<InteractionType>>,
}

impl InteractionTypeMatrix {
    pub(crate) fn new(names: Vec<String>) -> Self {
        let n = names.len();
        Self {
            names,
            entries: Array2::from_elem((n, n), None),
        }
    }

    pub(crate) fn set_symmetric(&mut self, i: usize, j: usize, label: InteractionType) {
        self.entries[[i, j]] = Some(label);
        self.entries[[j, i]] = Some(label);
    }

    /// Covariate names indexing the rows and columns.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The full entry table; `None` on the diagonal.
    pub fn entries(&self) -> &Array2<Option<InteractionType>> {
        &self.entries
    }

    /// Interaction type addressed by row and column name.
    ///
    /// `None` for the diagonal or for names outside the matrix.
    pub fn get(&self, row: &str, col: &str) -> Option<InteractionType> {
        let i = self.index_of(row)?;
        let j = self.index_of(col)?;
        self.entries[[i, j]]
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|existing| existing == name)
    }

    /// Export to JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GeoDetectorError::SerializationError(e.to_string()))
    }

    /// Load from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GeoDetectorError::SerializationError(e.to_string()))
    }
}
