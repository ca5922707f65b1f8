//! # GeoDetector
//!
//! Spatial stratified heterogeneity statistics for tabular data.
//!
//! The q statistic measures how well a categorical covariate explains the
//! variance of a numeric response: the response is stratified by the
//! covariate's categories, each stratum is summarized by its mean, and q is
//! the R² of those grouped-mean predictions. Covariate pairs are scored the
//! same way on their joint strata, and each pair's q is classified into one
//! of five interaction types by comparison with the single-covariate q
//! values.
//!
//! ## Example
//!
//! ```
//! use geodetector::prelude::*;
//!
//! # fn main() -> geodetector::error::Result<()> {
//! let data = Dataset::from_columns([
//!     ("region", vec![1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0]),
//!     ("level", vec![1.0, 1.0, 2.0, 2.0, 1.0, 1.0, 2.0, 2.0]),
//!     ("incidence", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 9.0, 9.0]),
//! ])?;
//!
//! let detector = GeoDetector::new(&data, &["region", "level"], "incidence")?;
//!
//! let q_values = detector.single_q_values()?;
//! assert_eq!(q_values.len(), 2);
//!
//! let (q_matrix, types) = detector.interaction_matrix_with_types()?;
//! assert_eq!(q_matrix.get("region", "region"), Some(q_values[0].1));
//! assert_eq!(
//!     types.get("region", "level"),
//!     Some(InteractionType::NonlinearEnhance)
//! );
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod detector;
pub mod error;
pub mod interaction;
pub mod matrix;
pub mod metrics;
pub mod regressor;

pub mod prelude {
    //! Convenient re-exports of commonly used types.
    pub use crate::dataset::Dataset;
    pub use crate::detector::GeoDetector;
    pub use crate::error::{GeoDetectorError, Result};
    pub use crate::interaction::InteractionType;
    pub use crate::matrix::{InteractionTypeMatrix, QMatrix};
    pub use crate::metrics::r2_score;
    pub use crate::regressor::GroupedMeanRegressor;
}
