//! Heuristic strategies through the solver boundary.

use groundplan_engine::{FailureReason, SearchConfig, SearchOutcome, Solver, Strategy};
use groundplan_foundation::Problem;

use crate::{NONE, unreachable_problem};

const HEURISTICS: [Strategy; 3] = [Strategy::Random, Strategy::Priority, Strategy::MeansEnds];

fn solve_seeded(problem: &Problem, strategy: Strategy, seed: u64) -> groundplan_engine::SearchResult {
    Solver::new(SearchConfig::new(strategy).with_seed(seed)).solve(problem)
}

#[test]
fn misses_are_never_proofs() {
    // An unreachable goal: complete strategies prove it, heuristics
    // must only report a miss.
    let problem = unreachable_problem();

    for strategy in HEURISTICS {
        let result = solve_seeded(&problem, strategy, 7);
        assert_eq!(
            result.outcome,
            SearchOutcome::Failure {
                reason: FailureReason::HeuristicMiss
            },
            "strategy {strategy}"
        );
    }
}

#[test]
fn visited_exclusion_terminates_heuristic_walks() {
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["z"])
        .rule("add-c", NONE, ["c"], NONE)
        .build()
        .unwrap();

    for strategy in HEURISTICS {
        let result = solve_seeded(&problem, strategy, 3);
        assert_eq!(
            result.outcome,
            SearchOutcome::Failure {
                reason: FailureReason::HeuristicMiss
            },
            "strategy {strategy}"
        );
        assert_eq!(result.stats.states_generated, 2, "strategy {strategy}");
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["d"])
        .rule("ab", ["a"], ["b"], NONE)
        .rule("ac", ["a"], ["c"], NONE)
        .rule("bd", ["b"], ["d"], NONE)
        .rule("cd", ["c"], ["d"], NONE)
        .build()
        .unwrap();

    for strategy in HEURISTICS {
        let first = solve_seeded(&problem, strategy, 1234);
        let second = solve_seeded(&problem, strategy, 1234);
        assert_eq!(first.outcome, second.outcome, "strategy {strategy}");
        assert_eq!(
            first.stats.states_generated, second.stats.states_generated,
            "strategy {strategy}"
        );
    }
}

#[test]
fn means_ends_walks_straight_to_the_goal() {
    // Each step strictly increases goal overlap, so the greedy walk
    // never needs luck.
    let problem = Problem::builder()
        .initial(["raw"])
        .goal(["washed", "chopped", "cooked"])
        .rule("wash", ["raw"], ["washed"], NONE)
        .rule("chop", ["washed"], ["chopped"], NONE)
        .rule("cook", ["chopped"], ["cooked"], NONE)
        .build()
        .unwrap();

    let result = solve_seeded(&problem, Strategy::MeansEnds, 0);
    match result.outcome {
        SearchOutcome::Success { plan } => {
            assert_eq!(plan.names(), vec!["wash", "chop", "cook"]);
        }
        SearchOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
    }
}

#[test]
fn means_ends_prefers_the_larger_overlap() {
    let problem = Problem::builder()
        .initial(["a"])
        .goal(["x", "y"])
        .rule("weak", ["a"], ["x"], NONE)
        .rule("strong", ["a"], ["x", "y"], NONE)
        .build()
        .unwrap();

    let result = solve_seeded(&problem, Strategy::MeansEnds, 0);
    match result.outcome {
        SearchOutcome::Success { plan } => assert_eq!(plan.names(), vec!["strong"]),
        SearchOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
    }
}

#[test]
fn every_heuristic_success_is_sound() {
    // A space where every walk reaches the goal eventually; whatever
    // path a heuristic picks, the plan must replay to a goal state.
    let problem = Problem::builder()
        .initial(["s"])
        .goal(["g"])
        .rule("left", ["s"], ["l"], ["s"])
        .rule("right", ["s"], ["r"], ["s"])
        .rule("left-g", ["l"], ["g"], ["l"])
        .rule("right-g", ["r"], ["g"], ["r"])
        .build()
        .unwrap();

    for strategy in HEURISTICS {
        for seed in 0..5 {
            let result = solve_seeded(&problem, strategy, seed);
            let plan = result
                .plan()
                .unwrap_or_else(|| panic!("strategy {strategy} seed {seed} missed"));
            let end = plan.replay(&problem).unwrap();
            assert!(problem.is_goal(&end), "strategy {strategy} seed {seed}");
        }
    }
}
