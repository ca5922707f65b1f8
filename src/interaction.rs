//! Interaction-type classification.
//!
//! Compares a pair's joint q value against the two single-covariate q values
//! to label how the covariates interact.

use crate::error::{GeoDetectorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How two covariates jointly explain the response relative to their
/// individual q values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionType {
    /// q12 < min(q1, q2): the pair explains less than either factor alone.
    #[serde(rename = "no_linear-")]
    NonlinearWeaken,
    /// min(q1, q2) < q12 < max(q1, q2): weakened relative to one factor.
    #[serde(rename = "single_no_linear-")]
    SingleNonlinearWeaken,
    /// max(q1, q2) < q12 < q1 + q2: the factors enhance each other.
    #[serde(rename = "bi+")]
    BivariateEnhance,
    /// q12 = q1 + q2: the factors act independently.
    #[serde(rename = "alone")]
    Independent,
    /// q12 > q1 + q2: the factors enhance each other nonlinearly.
    #[serde(rename = "no_linear+")]
    NonlinearEnhance,
}

impl InteractionType {
    /// Label string, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionType::NonlinearWeaken => "no_linear-",
            InteractionType::SingleNonlinearWeaken => "single_no_linear-",
            InteractionType::BivariateEnhance => "bi+",
            InteractionType::Independent => "alone",
            InteractionType::NonlinearEnhance => "no_linear+",
        }
    }

    /// Classify a pairwise q value against the two single-covariate q values.
    ///
    /// The five bands are checked in order. `tolerance` widens the
    /// `Independent` equality band to `|q12 - (q1 + q2)| <= tolerance`; a
    /// tolerance of 0.0 demands exact equality. A q12 landing on none of the
    /// bands (exactly equal to min(q1, q2) or max(q1, q2) outside the
    /// equality band) is an error rather than an arbitrary label.
    pub fn classify(q1: f64, q2: f64, q12: f64, tolerance: f64) -> Result<Self> {
        let q_min = q1.min(q2);
        let q_max = q1.max(q2);
        let q_sum = q1 + q2;
        let independent = (q12 - q_sum).abs() <= tolerance;

        if q12 < q_min {
            Ok(InteractionType::NonlinearWeaken)
        } else if q_min < q12 && q12 < q_max {
            Ok(InteractionType::SingleNonlinearWeaken)
        } else if q_max < q12 && q12 < q_sum && !independent {
            Ok(InteractionType::BivariateEnhance)
        } else if independent {
            Ok(InteractionType::Independent)
        } else if q12 > q_sum {
            Ok(InteractionType::NonlinearEnhance)
        } else {
            Err(GeoDetectorError::UnclassifiableInteraction { q1, q2, q12 })
        }
    }
}

impl fmt::Display for InteractionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
