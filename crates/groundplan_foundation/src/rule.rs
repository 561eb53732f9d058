//! Rules and rule application.
//!
//! A rule is an immutable STRIPS-style action: a name, a precondition
//! set, an add-list, a delete-list, and a priority weight used only by
//! the priority-weighted strategy.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::state::FactSet;

/// The priority assigned to rules that do not declare one.
pub const DEFAULT_PRIORITY: u32 = 1;

/// A named precondition/add/delete transformation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// Rule name, reported in plans.
    name: String,
    /// Facts that must all be present for the rule to apply.
    preconditions: FactSet,
    /// Facts added on application.
    adds: FactSet,
    /// Facts removed on application.
    deletes: FactSet,
    /// Selection weight for the priority-weighted strategy (>= 1).
    priority: u32,
}

impl Rule {
    /// Creates a rule with the default priority of 1.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        preconditions: FactSet,
        adds: FactSet,
        deletes: FactSet,
    ) -> Self {
        Self {
            name: name.into(),
            preconditions,
            adds,
            deletes,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the priority weight.
    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = priority;
        self
    }

    /// Returns the rule name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the precondition set.
    #[must_use]
    pub fn preconditions(&self) -> &FactSet {
        &self.preconditions
    }

    /// Returns the add-list.
    #[must_use]
    pub fn adds(&self) -> &FactSet {
        &self.adds
    }

    /// Returns the delete-list.
    #[must_use]
    pub fn deletes(&self) -> &FactSet {
        &self.deletes
    }

    /// Returns the priority weight.
    #[must_use]
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// Returns true if every precondition is present in `state`.
    #[must_use]
    pub fn is_applicable(&self, state: &FactSet) -> bool {
        self.preconditions.is_subset_of(state)
    }

    /// Applies the rule to a state, returning the successor state.
    ///
    /// The result is `(state \ deletes) ∪ adds`: deletions happen first,
    /// then additions, so a fact listed in both `deletes` and `adds` is
    /// present in the output. That ordering is STRIPS semantics and must
    /// not be "fixed".
    ///
    /// Application is pure: `state` is never mutated.
    #[must_use]
    pub fn apply(&self, state: &FactSet) -> FactSet {
        state.difference(&self.deletes).union(&self.adds)
    }
}
