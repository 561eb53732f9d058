//! Backtracking strategy through the solver boundary.

use groundplan_engine::{
    FailureReason, NodeId, SearchConfig, SearchObserver, SearchOutcome, Solver, Strategy,
};
use groundplan_foundation::{Problem, SearchLimit};

use crate::{single_step_problem, trivial_problem};

fn solve(problem: &Problem) -> groundplan_engine::SearchResult {
    Solver::new(SearchConfig::new(Strategy::Backtrack)).solve(problem)
}

/// Observer that counts backtrack events and records resumption indices.
#[derive(Default)]
struct BacktrackLog {
    resumptions: Vec<usize>,
}

impl SearchObserver for BacktrackLog {
    fn backtracked(&mut self, _from: NodeId, _to: NodeId, resume_from: usize) {
        self.resumptions.push(resume_from);
    }
}

#[test]
fn single_step_plan() {
    let result = solve(&single_step_problem());
    match result.outcome {
        SearchOutcome::Success { plan } => assert_eq!(plan.names(), vec!["R1"]),
        SearchOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
    }
}

#[test]
fn satisfied_goal_yields_empty_plan() {
    let result = solve(&trivial_problem());
    match result.outcome {
        SearchOutcome::Success { plan } => assert!(plan.is_empty()),
        SearchOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
    }
    assert_eq!(result.stats.states_generated, 1);
}

#[test]
fn exhaustion_proves_unreachability() {
    // The only rule consumes `a`, so the space is finite and the goal
    // is provably out of reach.
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["a", "b"])
        .rule("consume", ["a"], ["c"], ["a"])
        .build()
        .unwrap();

    let result = solve(&problem);
    assert_eq!(
        result.outcome,
        SearchOutcome::Failure {
            reason: FailureReason::ProvenUnreachable
        }
    );
}

#[test]
fn commits_to_list_order_and_resumes_past_failures() {
    // Scenario: both rules fire at the root. The walk must take
    // wrong-way first, dead-end, retreat with the resumption index set
    // past it, and only then take right-way.
    let problem = Problem::builder()
        .initial(["start"])
        .goal(["goal"])
        .rule("wrong-way", ["start"], ["stuck"], ["start"])
        .rule("right-way", ["start"], ["goal"], ["start"])
        .build()
        .unwrap();

    let mut log = BacktrackLog::default();
    let solver = Solver::new(SearchConfig::new(Strategy::Backtrack));
    let result = solver.solve_with_observer(&problem, &mut log);

    match result.outcome {
        SearchOutcome::Success { plan } => assert_eq!(plan.names(), vec!["right-way"]),
        SearchOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
    }
    // One retreat, resuming after rule 0.
    assert_eq!(log.resumptions, vec![1]);
    // Root, the abandoned wrong-way child, and the goal child.
    assert_eq!(result.stats.states_generated, 3);
}

#[test]
fn depth_ceiling_stops_cyclic_regress() {
    // flip/flop cycle: without deduplication only the depth ceiling
    // keeps the walk live.
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["never"])
        .rule("flip", ["a"], ["b"], ["a"])
        .rule("flop", ["b"], ["a"], ["b"])
        .build()
        .unwrap();

    let solver = Solver::new(SearchConfig::new(Strategy::Backtrack).with_depth_ceiling(8));
    let result = solver.solve(&problem);
    assert_eq!(
        result.outcome,
        SearchOutcome::Failure {
            reason: FailureReason::CeilingExceeded(SearchLimit::MaxDepth { limit: 8 })
        }
    );
}

#[test]
fn clipped_exhaustion_is_not_a_proof() {
    // Solvable only beyond the ceiling: the failure must name the
    // ceiling, never claim unreachability.
    let problem = Problem::builder()
        .initial(["s0"])
        .goal(["s3"])
        .rule("r0", ["s0"], ["s1"], ["s0"])
        .rule("r1", ["s1"], ["s2"], ["s1"])
        .rule("r2", ["s2"], ["s3"], ["s2"])
        .build()
        .unwrap();

    let solver = Solver::new(SearchConfig::new(Strategy::Backtrack).with_depth_ceiling(2));
    let result = solver.solve(&problem);
    assert_eq!(
        result.outcome,
        SearchOutcome::Failure {
            reason: FailureReason::CeilingExceeded(SearchLimit::MaxDepth { limit: 2 })
        }
    );
}

#[test]
fn repeated_runs_are_identical() {
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["d"])
        .rule("ab", ["a"], ["b"], ["a"])
        .rule("bc", ["b"], ["c"], ["b"])
        .rule("cd", ["c"], ["d"], ["c"])
        .build()
        .unwrap();

    let first = solve(&problem);
    let second = solve(&problem);
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.stats.states_generated, second.stats.states_generated);
}
