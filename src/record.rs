//! Immutable trial snapshots consumed by the visualization helpers.
//!
//! A [`TrialRecord`] is a frozen view of one evaluated configuration: its
//! number, objective value(s), realized parameter values, the distributions
//! they were sampled from, and any user-defined attributes. Records are
//! produced by the optimization engine or loaded from storage; nothing in
//! this crate ever mutates one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::distribution::Distribution;
use crate::error::Result;

/// A target accessor selecting the objective value to plot for a trial.
///
/// Accessors are fallible so that a value that cannot be resolved to a real
/// number surfaces as [`Error::TargetResolution`](crate::Error::TargetResolution)
/// instead of being silently dropped.
pub type Target = dyn Fn(&TrialRecord) -> Result<f64>;

/// A realized parameter value.
///
/// Unlike the sampler-facing value type of the optimizer, this enum stores the
/// concrete choice value for categorical parameters rather than an index,
/// since plots label axes with the values themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    /// A floating-point parameter value.
    Float(f64),
    /// An integer parameter value.
    Int(i64),
    /// A boolean parameter value.
    Bool(bool),
    /// A string parameter value.
    Str(String),
}

impl ParamValue {
    /// Returns `true` if the value is a real number and not a boolean.
    #[must_use]
    pub fn is_real_number(&self) -> bool {
        matches!(self, ParamValue::Float(_) | ParamValue::Int(_))
    }
}

impl core::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
            ParamValue::Str(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_owned())
    }
}

/// A user-defined attribute value stored on a trial.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// A floating-point attribute.
    Float(f64),
    /// An integer attribute.
    Int(i64),
    /// A boolean attribute.
    Bool(bool),
    /// A string attribute.
    String(String),
}

impl core::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::String(v) => write!(f, "{v}"),
        }
    }
}

/// An immutable snapshot of one evaluated trial.
///
/// # Examples
///
/// ```
/// use optimizer_viz::distribution::{Distribution, FloatDistribution};
/// use optimizer_viz::{ParamValue, TrialRecord};
///
/// let trial = TrialRecord::new(0)
///     .with_value(0.25)
///     .with_param(
///         "lr",
///         ParamValue::Float(1e-3),
///         Distribution::Float(FloatDistribution::new(1e-5, 1e-1).log_scale()),
///     );
///
/// assert_eq!(trial.value(), Some(0.25));
/// ```
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TrialRecord {
    /// The sequential number of this trial within its study.
    pub number: u64,
    /// The objective value(s) returned by the objective function.
    pub values: Vec<f64>,
    /// Realized parameter values, keyed by parameter name.
    pub params: HashMap<String, ParamValue>,
    /// The distributions the parameters were sampled from, keyed by name.
    pub distributions: HashMap<String, Distribution>,
    /// User-defined attributes stored during the trial.
    pub user_attrs: HashMap<String, AttrValue>,
}

impl TrialRecord {
    /// Creates an empty record with the given trial number.
    #[must_use]
    pub fn new(number: u64) -> Self {
        Self {
            number,
            ..Self::default()
        }
    }

    /// Sets a single objective value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.values = vec![value];
        self
    }

    /// Sets the objective values of a multi-objective trial.
    #[must_use]
    pub fn with_values(mut self, values: Vec<f64>) -> Self {
        self.values = values;
        self
    }

    /// Records a parameter value together with its declared distribution.
    #[must_use]
    pub fn with_param(
        mut self,
        name: impl Into<String>,
        value: ParamValue,
        distribution: Distribution,
    ) -> Self {
        let name = name.into();
        self.params.insert(name.clone(), value);
        self.distributions.insert(name, distribution);
        self
    }

    /// Stores a user-defined attribute.
    #[must_use]
    pub fn with_user_attr(mut self, key: impl Into<String>, value: AttrValue) -> Self {
        self.user_attrs.insert(key.into(), value);
        self
    }

    /// Returns the single scalar objective value of this trial.
    ///
    /// `None` if the trial recorded no value or more than one (multi-objective
    /// trials must be read through a target accessor instead).
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self.values.as_slice() {
            [value] => Some(*value),
            _ => None,
        }
    }
}
