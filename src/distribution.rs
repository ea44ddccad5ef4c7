//! Parameter distribution types.
//!
//! A [`Distribution`] describes the declared search space of one parameter as
//! recorded in a trial snapshot. Float and integer distributions carry a
//! log-scale flag; categorical distributions carry the ordered list of allowed
//! choice values, which the classifier inspects to decide whether a
//! categorical axis is numerical.

use serde::{Deserialize, Serialize};

use crate::record::ParamValue;

/// Distribution for floating-point parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloatDistribution {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
    /// Whether to sample in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<f64>,
}

impl FloatDistribution {
    /// Creates a linear-scale distribution over `[low, high]`.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            log_scale: false,
            step: None,
        }
    }

    /// Switches the distribution to log scale.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }
}

/// Distribution for integer parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntDistribution {
    /// Lower bound (inclusive).
    pub low: i64,
    /// Upper bound (inclusive).
    pub high: i64,
    /// Whether to sample in log space.
    pub log_scale: bool,
    /// Optional step size for discretization.
    pub step: Option<i64>,
}

impl IntDistribution {
    /// Creates a linear-scale distribution over `[low, high]`.
    #[must_use]
    pub fn new(low: i64, high: i64) -> Self {
        Self {
            low,
            high,
            log_scale: false,
            step: None,
        }
    }

    /// Switches the distribution to log scale.
    #[must_use]
    pub fn log_scale(mut self) -> Self {
        self.log_scale = true;
        self
    }
}

/// Distribution for categorical parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoricalDistribution {
    /// The ordered choice values.
    pub choices: Vec<ParamValue>,
}

impl CategoricalDistribution {
    /// Creates a distribution over the given choice values.
    #[must_use]
    pub fn new(choices: Vec<ParamValue>) -> Self {
        Self { choices }
    }
}

/// Enum wrapping all parameter distribution types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Distribution {
    /// A floating-point distribution.
    Float(FloatDistribution),
    /// An integer distribution.
    Int(IntDistribution),
    /// A categorical distribution.
    Categorical(CategoricalDistribution),
}
