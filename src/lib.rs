#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Stateless helper routines behind the plot layer of an Optuna-like
//! optimization library: validating plotting arguments, classifying
//! parameters as numerical/categorical and log-scaled, filtering trials a
//! plot cannot use, and formatting trial data into hover text.
//!
//! Every helper is an independent pure function over a caller-owned batch of
//! [`TrialRecord`]s. Nothing here renders figures, stores trials, or runs
//! optimization — those live in the surrounding engine and rendering layers.
//!
//! # Getting Started
//!
//! ```
//! use optimizer_viz::distribution::{Distribution, FloatDistribution};
//! use optimizer_viz::{ParamValue, TrialRecord};
//!
//! let trials = vec![
//!     TrialRecord::new(0).with_value(0.5).with_param(
//!         "lr",
//!         ParamValue::Float(1e-3),
//!         Distribution::Float(FloatDistribution::new(1e-5, 1e-1).log_scale()),
//!     ),
//!     TrialRecord::new(1).with_value(f64::NAN),
//! ];
//!
//! let classification = optimizer_viz::preprocess_trial_params(&trials);
//! assert!(classification.is_log_scale("lr"));
//!
//! let finite = optimizer_viz::filter_nonfinite(&trials, None, false).unwrap();
//! assert_eq!(finite.len(), 1);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`TrialRecord`] | Immutable snapshot of one evaluated trial: number, value(s), params, distributions, user attrs. |
//! | [`Distribution`](distribution::Distribution) | Declared search space of one parameter — float, int, or categorical. |
//! | [`ParamClassification`] | Cached per-parameter log-scale and numerical tables, built by [`preprocess_trial_params`]. |
//! | [`StudySummary`] | The two study facts the helpers need: direction and multi-objective flag. |
//! | [`Target`] | Fallible accessor selecting which objective value of a trial to plot. |
//!
//! # Warnings and errors
//!
//! Advisory conditions (a redundant `target_name`, a trial dropped for a
//! non-finite objective) are emitted as [`tracing`] warnings and execution
//! continues. Contract violations — a missing target accessor for a
//! multi-objective study, a target value that cannot be cast to a float —
//! surface as [`Error`] values.

pub mod distribution;

mod args;
mod backend;
mod classify;
mod display;
mod error;
mod filter;
mod record;
mod study;
mod types;

pub use args::{check_plot_args, DEFAULT_TARGET_NAME};
pub use backend::{is_available, COLOR_SCALE};
pub use classify::{param_values, preprocess_trial_params, ParamClassification};
pub use display::{is_reverse_scale, make_hovertext, make_json_compatible};
pub use error::{Error, Result};
pub use filter::{filter_nonfinite, skipped_trial_numbers};
pub use record::{AttrValue, ParamValue, Target, TrialRecord};
pub use study::StudySummary;
pub use types::Direction;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use optimizer_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::args::{check_plot_args, DEFAULT_TARGET_NAME};
    pub use crate::backend::{is_available, COLOR_SCALE};
    pub use crate::classify::{param_values, preprocess_trial_params, ParamClassification};
    pub use crate::display::{is_reverse_scale, make_hovertext, make_json_compatible};
    pub use crate::distribution::{
        CategoricalDistribution, Distribution, FloatDistribution, IntDistribution,
    };
    pub use crate::error::{Error, Result};
    pub use crate::filter::{filter_nonfinite, skipped_trial_numbers};
    pub use crate::record::{AttrValue, ParamValue, Target, TrialRecord};
    pub use crate::study::StudySummary;
    pub use crate::types::Direction;
}
