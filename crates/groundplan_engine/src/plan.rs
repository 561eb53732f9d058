//! Plans and plan reconstruction.
//!
//! A [`Plan`] is the ordered sequence of rule applications that carries
//! the initial state into a goal-satisfying state. It is reconstructed
//! by walking parent links from a solution node back to the root and
//! reversing the collected steps.

use std::fmt;

use groundplan_foundation::{Error, FactSet, Problem, Result};

use crate::graph::{NodeId, SearchGraph};

/// One step of a plan: a rule index and its name.
///
/// The index is kept alongside the name so a plan can be replayed even
/// when rule names are not unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlanStep {
    /// Index of the rule in the problem's rule list.
    pub rule: usize,
    /// Name of the rule, as reported to callers.
    pub name: String,
}

/// An ordered sequence of rule applications, root-to-goal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<PlanStep>,
}

impl Plan {
    /// Creates an empty plan (goal already satisfied by the initial state).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the number of rule applications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true for the zero-length plan.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Returns the rule names in execution order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.steps.iter().map(|step| step.name.as_str()).collect()
    }

    /// Reconstructs the plan ending at `node`.
    ///
    /// Follows parent references back to the root, collecting each
    /// producing rule, then reverses. The root yields an empty plan.
    #[must_use]
    pub fn reconstruct(graph: &SearchGraph, problem: &Problem, node: NodeId) -> Self {
        let mut steps = Vec::new();
        let mut current = node;

        while let Some(parent) = graph.node(current).parent() {
            // Non-root nodes always carry a producing rule.
            if let Some(rule) = graph.node(current).via() {
                let name = problem
                    .rule(rule)
                    .map_or_else(String::new, |r| r.name().to_string());
                steps.push(PlanStep { rule, name });
            }
            current = parent;
        }

        steps.reverse();
        Self { steps }
    }

    /// Replays the plan against the problem's initial state.
    ///
    /// Returns the final state. This is the soundness check: for any
    /// successful search, the result must contain every goal fact.
    ///
    /// # Errors
    ///
    /// Returns an error if a step names a rule index outside the
    /// problem's rule list or a rule whose preconditions do not hold,
    /// which would mean the plan and problem do not belong together.
    pub fn replay(&self, problem: &Problem) -> Result<FactSet> {
        let mut state = problem.initial().clone();
        for step in &self.steps {
            let rule = problem
                .rule(step.rule)
                .ok_or_else(|| Error::internal(format!("plan references rule {}", step.rule)))?;
            if !rule.is_applicable(&state) {
                return Err(Error::internal(format!(
                    "rule {} not applicable during replay",
                    rule.name()
                )));
            }
            state = rule.apply(&state);
        }
        Ok(state)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "(empty plan)");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}. {}", i + 1, step.name)?;
        }
        Ok(())
    }
}
