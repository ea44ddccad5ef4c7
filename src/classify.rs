//! Single-pass classification of trial parameters.
//!
//! Plot front-ends need to know, per parameter name, whether an axis should
//! be log-scaled and whether it is numerical or categorical. Both facts are
//! derived from the declared distributions in one pass over the trial batch
//! and cached in a [`ParamClassification`] that later lookups read from.

use std::collections::HashMap;

use crate::distribution::Distribution;
use crate::record::{ParamValue, TrialRecord};

/// Per-parameter classification tables built once per batch of trials.
///
/// The first observed distribution of a parameter name decides its
/// classification; later trials that declare a differently-typed distribution
/// under the same name do not override it. This first-seen semantics is
/// intentional and relied upon by callers, even when a search space is
/// re-sampled with a different distribution across trials.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamClassification {
    log_scale: HashMap<String, bool>,
    numerical: HashMap<String, bool>,
}

impl ParamClassification {
    /// Returns `true` if the parameter was declared with a log-scaled
    /// distribution.
    ///
    /// Defaults to `false` for parameter names never observed in the batch.
    #[must_use]
    pub fn is_log_scale(&self, param_name: &str) -> bool {
        self.log_scale.get(param_name).copied().unwrap_or(false)
    }

    /// Returns `true` if the parameter is numerical.
    ///
    /// Float and integer distributions are numerical; a categorical
    /// distribution is numerical only if every choice is a real number and
    /// not a boolean. Defaults to `false` for parameter names never observed
    /// in the batch.
    #[must_use]
    pub fn is_numerical(&self, param_name: &str) -> bool {
        self.numerical.get(param_name).copied().unwrap_or(false)
    }
}

/// Classifies every parameter declared across `trials`.
///
/// Iterates all trials in order and, per parameter name, records the log-scale
/// and numerical classification of the first distribution seen (see
/// [`ParamClassification`] for the override semantics). The result is
/// deterministic for a given trial order and idempotent.
#[must_use]
pub fn preprocess_trial_params(trials: &[TrialRecord]) -> ParamClassification {
    let mut log_scale: HashMap<String, bool> = HashMap::new();
    let mut numerical: HashMap<String, bool> = HashMap::new();

    for trial in trials {
        for (param, dist) in &trial.distributions {
            if !log_scale.contains_key(param) {
                let is_log = match dist {
                    Distribution::Float(d) => d.log_scale,
                    Distribution::Int(d) => d.log_scale,
                    Distribution::Categorical(_) => false,
                };
                log_scale.insert(param.clone(), is_log);
            }

            if !numerical.contains_key(param) {
                let is_num = match dist {
                    Distribution::Float(_) | Distribution::Int(_) => true,
                    Distribution::Categorical(d) => {
                        d.choices.iter().all(ParamValue::is_real_number)
                    }
                };
                numerical.insert(param.clone(), is_num);
            }
        }
    }

    ParamClassification {
        log_scale,
        numerical,
    }
}

/// Returns the values of `param_name` across all trials that define it.
///
/// Trials lacking the parameter are skipped; the order of the remaining
/// values follows the trial order. Numerical parameters yield their stored
/// values as-is; for all others each value is replaced by its textual
/// representation, so categorical axes receive uniform string labels.
#[must_use]
pub fn param_values(
    trials: &[TrialRecord],
    param_name: &str,
    classification: &ParamClassification,
) -> Vec<ParamValue> {
    let values = trials.iter().filter_map(|t| t.params.get(param_name));
    if classification.is_numerical(param_name) {
        values.cloned().collect()
    } else {
        values
            .map(|v| ParamValue::Str(v.to_string()))
            .collect()
    }
}
