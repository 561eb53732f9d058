//! Integration tests for the search engine.
//!
//! Exercises every strategy through the public [`Solver`] boundary.

mod backtrack;
mod heuristics;
mod plans;

use groundplan_foundation::{Problem, ProblemBuilder};

pub const NONE: [&str; 0] = [];

/// Scenario shared across strategy tests: one rule carries `a` to `b`.
pub fn single_step_problem() -> Problem {
    ProblemBuilder::new()
        .initial(["a"])
        .goal(["b"])
        .rule("R1", ["a"], ["b"], NONE)
        .build()
        .unwrap()
}

/// Goal requires `b`, but no rule ever produces it.
pub fn unreachable_problem() -> Problem {
    ProblemBuilder::new()
        .initial(["a"])
        .goal(["a", "b"])
        .rule("R1", ["a"], ["c"], NONE)
        .build()
        .unwrap()
}

/// Goal already holds in the initial state.
pub fn trivial_problem() -> Problem {
    ProblemBuilder::new()
        .initial(["a"])
        .goal(["a"])
        .rule("R1", ["a"], ["b"], NONE)
        .build()
        .unwrap()
}
