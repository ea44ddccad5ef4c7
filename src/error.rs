#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when no target accessor is given for a multi-objective study.
    #[error(
        "if the study is being used for multi-objective optimization, please specify the target"
    )]
    MissingTarget,

    /// Returned when a trial's target value cannot be resolved to a float.
    #[error("trial {number}'s target value could not be cast to float: {reason}")]
    TargetResolution {
        /// The number of the offending trial.
        number: u64,
        /// Why the resolution failed.
        reason: String,
    },

    /// Returned when an internal invariant is violated.
    #[error("internal error: {0}")]
    Internal(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
