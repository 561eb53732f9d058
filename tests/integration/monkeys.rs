//! The monkeys-and-bananas problem end to end: file to plan.

use groundplan_debug::{Tracer, TracerConfig};
use groundplan_engine::{SearchConfig, Solver, Strategy};
use groundplan_parser::parse_file;

use crate::monkeys_path;

const ALL_STRATEGIES: [Strategy; 5] = [
    Strategy::BreadthFirst,
    Strategy::Backtrack,
    Strategy::Random,
    Strategy::Priority,
    Strategy::MeansEnds,
];

#[test]
fn every_strategy_feeds_the_monkey() {
    let problem = parse_file(monkeys_path()).unwrap();

    for strategy in ALL_STRATEGIES {
        let solver = Solver::new(SearchConfig::new(strategy).with_seed(99));
        let result = solver.solve(&problem);

        let plan = result
            .plan()
            .unwrap_or_else(|| panic!("strategy {strategy} found no plan"));
        let end = plan.replay(&problem).unwrap();
        assert!(problem.is_goal(&end), "strategy {strategy}");

        // eat-bananas is necessarily the last act.
        assert_eq!(plan.names().last(), Some(&"eat-bananas"), "strategy {strategy}");
    }
}

#[test]
fn bfs_finds_the_five_step_optimum() {
    let problem = parse_file(monkeys_path()).unwrap();
    let result = Solver::new(SearchConfig::new(Strategy::BreadthFirst)).solve(&problem);

    let plan = result.plan().expect("solvable");
    assert_eq!(plan.len(), 5);
}

#[test]
fn random_walks_succeed_across_seeds() {
    // The visited-state exclusion means no seed can loop forever, and
    // this space has no dead end, so every seed must find a plan.
    let problem = parse_file(monkeys_path()).unwrap();

    for seed in 0..20 {
        let solver = Solver::new(SearchConfig::new(Strategy::Random).with_seed(seed));
        let result = solver.solve(&problem);
        let plan = result.plan().unwrap_or_else(|| panic!("seed {seed} missed"));
        let end = plan.replay(&problem).unwrap();
        assert!(problem.is_goal(&end), "seed {seed}");
    }
}

#[test]
fn traced_solve_records_the_whole_run() {
    let problem = parse_file(monkeys_path()).unwrap();
    let mut tracer = Tracer::new(TracerConfig::new().enabled());

    let solver = Solver::new(SearchConfig::new(Strategy::Backtrack));
    let result = solver.solve_with_observer(&problem, &mut tracer);
    assert!(result.outcome.is_success());

    let records: Vec<_> = tracer.buffer().iter().collect();
    let text = tracer.format_records(&records, &problem);
    assert!(text.contains("SEARCH START"));
    assert!(text.contains("push-chair"));
    assert!(text.contains("SEARCH END (OK)"));
}
