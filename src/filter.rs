//! Trial filters used by plot front-ends to exclude unusable trials.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::record::{Target, TrialRecord};

/// Returns the numbers of trials missing at least one required parameter.
///
/// Parallel-coordinate style plots need every listed parameter present in a
/// trial to draw its line; trials reported here are excluded from the plot
/// without being removed from the caller's list.
#[must_use]
pub fn skipped_trial_numbers(trials: &[TrialRecord], used_param_names: &[&str]) -> HashSet<u64> {
    let mut skipped = HashSet::new();
    for trial in trials {
        if used_param_names
            .iter()
            .any(|name| !trial.params.contains_key(*name))
        {
            skipped.insert(trial.number);
        }
    }
    skipped
}

/// Removes trials whose resolved target value is not a finite number.
///
/// Each trial's target is resolved through `target`, or through
/// [`TrialRecord::value`] when no accessor is given. Trials resolving to
/// `NaN` or infinity are dropped; when `with_message` is set, each drop is
/// logged with the trial number. The relative order of surviving trials is
/// preserved.
///
/// Plot arguments are assumed to have been sanitized beforehand, so a missing
/// accessor for a multi-objective trial is not re-checked here; it surfaces
/// as a resolution error instead.
///
/// # Errors
///
/// Returns [`Error::TargetResolution`] (after logging a warning) when a
/// trial's target value cannot be resolved to a float at all, either because
/// the accessor failed or because the trial does not record a single scalar
/// value.
pub fn filter_nonfinite<'a>(
    trials: &'a [TrialRecord],
    target: Option<&Target>,
    with_message: bool,
) -> Result<Vec<&'a TrialRecord>> {
    let mut filtered = Vec::with_capacity(trials.len());
    for trial in trials {
        let resolved = match target {
            Some(accessor) => accessor(trial),
            None => trial.value().ok_or_else(|| Error::TargetResolution {
                number: trial.number,
                reason: "the trial does not record a single objective value".to_owned(),
            }),
        };
        let value = match resolved {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    trial = trial.number,
                    "target value could not be cast to float: {err}"
                );
                return Err(err);
            }
        };

        // NaN, positive infinity and negative infinity are all non-finite.
        if value.is_finite() {
            filtered.push(trial);
        } else if with_message {
            tracing::warn!(
                trial = trial.number,
                "trial is omitted in visualization because its objective value is inf or nan"
            );
        }
    }
    Ok(filtered)
}
