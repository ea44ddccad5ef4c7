//! Study-level facts needed when validating plot arguments.

use serde::{Deserialize, Serialize};

use crate::types::Direction;

/// The study-facing input boundary of the visualization helpers.
///
/// Only two facts about a study matter here: which way it optimizes and
/// whether it tracks more than one objective. Rendering layers build one of
/// these from whatever study object their engine exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySummary {
    direction: Direction,
    n_objectives: usize,
}

impl StudySummary {
    /// Creates a summary of a single-objective study.
    #[must_use]
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            n_objectives: 1,
        }
    }

    /// Creates a summary of a study with `n_objectives` objectives.
    ///
    /// `direction` is the direction of the primary objective.
    #[must_use]
    pub fn with_objectives(direction: Direction, n_objectives: usize) -> Self {
        Self {
            direction,
            n_objectives,
        }
    }

    /// Returns the optimization direction of the primary objective.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns `true` if the study tracks more than one objective.
    #[must_use]
    pub fn is_multi_objective(&self) -> bool {
        self.n_objectives > 1
    }
}
