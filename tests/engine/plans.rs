//! Plan reconstruction, replay, and display.

use groundplan_engine::{SearchConfig, SearchOutcome, Solver, Strategy};
use groundplan_foundation::{Problem, ProblemBuilder};

use crate::NONE;

fn staged_problem() -> Problem {
    ProblemBuilder::new()
        .initial(["monkey-on-floor", "chair-at-door"])
        .goal(["monkey-on-chair"])
        .rule(
            "push-chair",
            ["chair-at-door", "monkey-on-floor"],
            ["chair-at-centre"],
            ["chair-at-door"],
        )
        .rule(
            "climb-chair",
            ["chair-at-centre", "monkey-on-floor"],
            ["monkey-on-chair"],
            ["monkey-on-floor"],
        )
        .build()
        .unwrap()
}

#[test]
fn plans_come_back_in_execution_order() {
    let result = Solver::new(SearchConfig::new(Strategy::BreadthFirst)).solve(&staged_problem());
    match result.outcome {
        SearchOutcome::Success { plan } => {
            assert_eq!(plan.names(), vec!["push-chair", "climb-chair"]);
            assert_eq!(plan.steps()[0].rule, 0);
            assert_eq!(plan.steps()[1].rule, 1);
        }
        SearchOutcome::Failure { reason } => panic!("unexpected failure: {reason}"),
    }
}

#[test]
fn every_strategy_produces_a_sound_plan() {
    let problem = staged_problem();
    let strategies = [
        Strategy::BreadthFirst,
        Strategy::Backtrack,
        Strategy::Random,
        Strategy::Priority,
        Strategy::MeansEnds,
    ];

    for strategy in strategies {
        let solver = Solver::new(SearchConfig::new(strategy).with_seed(11));
        let result = solver.solve(&problem);
        let plan = result
            .plan()
            .unwrap_or_else(|| panic!("strategy {strategy} found no plan"));

        let end = plan.replay(&problem).unwrap();
        assert!(problem.is_goal(&end), "strategy {strategy}");
    }
}

#[test]
fn zero_length_plan_replays_to_the_initial_state() {
    let problem = ProblemBuilder::new()
        .initial(["a", "b"])
        .goal(["a"])
        .rule("noop", ["a"], NONE, NONE)
        .build()
        .unwrap();

    let result = Solver::new(SearchConfig::new(Strategy::BreadthFirst)).solve(&problem);
    let plan = result.plan().expect("goal holds at the root");
    assert!(plan.is_empty());

    let end = plan.replay(&problem).unwrap();
    assert_eq!(&end, problem.initial());
}

#[test]
fn display_is_numbered_or_empty() {
    let result = Solver::new(SearchConfig::new(Strategy::BreadthFirst)).solve(&staged_problem());
    let plan = result.plan().expect("solvable");
    assert_eq!(format!("{plan}"), "1. push-chair\n2. climb-chair");

    let trivial = ProblemBuilder::new()
        .initial(["a"])
        .goal(["a"])
        .rule("noop", ["a"], NONE, NONE)
        .build()
        .unwrap();
    let result = Solver::new(SearchConfig::new(Strategy::BreadthFirst)).solve(&trivial);
    assert_eq!(format!("{}", result.plan().expect("trivial")), "(empty plan)");
}
