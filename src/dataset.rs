//! In-memory tabular dataset.
//!
//! A [`Dataset`] is a table of named, equal-length `f64` columns. Covariate
//! columns hold categorical codes; the response column holds the numeric
//! outcome being explained.

use crate::error::{GeoDetectorError, Result};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// A table of named columns sharing one row count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    names: Vec<String>,
    columns: Vec<Array1<f64>>,
}

impl Dataset {
    /// Build a dataset from `(name, values)` pairs, preserving column order.
    ///
    /// # Arguments
    /// * `columns` - Pairs of column name and column values.
    ///
    /// # Errors
    /// `InvalidParameter` on a duplicate column name, `LengthMismatch` when
    /// the columns do not all share one length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut names: Vec<String> = Vec::new();
        let mut data: Vec<Array1<f64>> = Vec::new();

        for (name, values) in columns {
            let name = name.into();
            if names.iter().any(|existing| *existing == name) {
                return Err(GeoDetectorError::InvalidParameter(format!(
                    "duplicate column name '{}'",
                    name
                )));
            }
            if let Some(first) = data.first() {
                if values.len() != first.len() {
                    return Err(GeoDetectorError::LengthMismatch {
                        expected: first.len(),
                        actual: values.len(),
                    });
                }
            }
            names.push(name);
            data.push(Array1::from_vec(values));
        }

        Ok(Self {
            names,
            columns: data,
        })
    }

    /// Column names in insertion order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether a column with this name exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// View of a column by name.
    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        let index = self.names.iter().position(|existing| existing == name)?;
        Some(self.columns[index].view())
    }

    /// Number of rows (0 for a dataset with no columns).
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, |column| column.len())
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::from_columns([
            ("region", vec![1.0, 1.0, 2.0, 2.0]),
            ("incidence", vec![0.1, 0.2, 0.3, 0.4]),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_columns_preserves_order() {
        let data = sample();
        assert_eq!(data.names(), &["region", "incidence"]);
        assert_eq!(data.n_rows(), 4);
        assert_eq!(data.n_columns(), 2);
        assert!(!data.is_empty());
    }

    #[test]
    fn test_column_lookup() {
        let data = sample();
        assert!(data.contains_column("region"));
        assert!(!data.contains_column("elevation"));

        let column = data.column("incidence").unwrap();
        assert_eq!(column[3], 0.4);
        assert!(data.column("elevation").is_none());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = Dataset::from_columns([
            ("region", vec![1.0]),
            ("region", vec![2.0]),
        ]);
        assert!(matches!(
            result,
            Err(GeoDetectorError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let result = Dataset::from_columns([
            ("region", vec![1.0, 2.0]),
            ("incidence", vec![0.1]),
        ]);
        assert!(matches!(
            result,
            Err(GeoDetectorError::LengthMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let data = Dataset::from_columns(Vec::<(String, Vec<f64>)>::new()).unwrap();
        assert_eq!(data.n_rows(), 0);
        assert!(data.is_empty());
    }

    #[test]
    fn test_serde_round_trip() {
        let data = sample();
        let json = serde_json::to_string(&data).unwrap();
        let parsed: Dataset = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.names(), data.names());
        assert_eq!(parsed.column("region").unwrap(), data.column("region").unwrap());
    }
}
