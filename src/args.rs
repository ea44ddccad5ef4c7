//! Validation of common plotting arguments.

use crate::error::{Error, Result};
use crate::record::Target;
use crate::study::StudySummary;

/// Default display name of the objective value on plot axes and legends.
pub const DEFAULT_TARGET_NAME: &str = "Objective Value";

/// Validates the `target`/`target_name` arguments shared by all plot entry
/// points.
///
/// A warning (not an error) is logged when a target accessor is supplied but
/// `target_name` was left at [`DEFAULT_TARGET_NAME`], since that combination
/// is usually a caller oversight.
///
/// # Errors
///
/// Returns [`Error::MissingTarget`] when no target accessor is given but at
/// least one study is configured for multi-objective optimization.
pub fn check_plot_args(
    studies: &[StudySummary],
    target: Option<&Target>,
    target_name: &str,
) -> Result<()> {
    if target.is_none() && studies.iter().any(StudySummary::is_multi_objective) {
        return Err(Error::MissingTarget);
    }

    if target.is_some() && target_name == DEFAULT_TARGET_NAME {
        tracing::warn!(
            "`target` is specified, but `target_name` is the default value, 'Objective Value'"
        );
    }

    Ok(())
}
