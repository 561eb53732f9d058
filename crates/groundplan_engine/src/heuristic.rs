//! Heuristic-guided strategies.
//!
//! These share the breadth-first machinery's graph and dedup check but
//! make a single choice per expansion instead of trying every applicable
//! rule. Successors equivalent to an already-visited state are excluded
//! before choosing, which both avoids loops and guarantees termination
//! on finite state spaces. A state with no fresh successor is a miss:
//! the walk reports [`FailureReason::HeuristicMiss`], never a proof of
//! unreachability.

use groundplan_foundation::{FactSet, Problem, SearchLimit};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::graph::SearchGraph;
use crate::observer::SearchObserver;
use crate::plan::Plan;
use crate::strategy::{FailureReason, SearchConfig, SearchOutcome};

/// How a heuristic walk picks among the fresh applicable rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Uniformly at random.
    Random,
    /// Weighted by rule priority: a rule of priority `p` is `p` times as
    /// likely as a rule of priority 1.
    Priority,
    /// Means-ends analysis: the rule whose successor shares the most
    /// facts with the goal, first-seen winning ties. Deterministic.
    MeansEnds,
}

/// A fresh applicable rule and the state it leads to.
struct Candidate {
    rule: usize,
    successor: FactSet,
}

/// Runs a heuristic walk. Returns the outcome and the number of states
/// generated.
pub(crate) fn search(
    problem: &Problem,
    config: &SearchConfig,
    policy: Policy,
    observer: &mut dyn SearchObserver,
) -> (SearchOutcome, usize) {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut graph = SearchGraph::with_root(problem.initial().clone());
    let mut current = graph.root();

    loop {
        let state = graph.node(current).state().clone();

        if problem.is_goal(&state) {
            observer.goal_reached(current);
            let plan = Plan::reconstruct(&graph, problem, current);
            return (SearchOutcome::Success { plan }, graph.len());
        }

        observer.node_expanded(current, graph.node(current).depth());

        let mut candidates = Vec::new();
        for (index, rule) in problem.rules().iter().enumerate() {
            let applicable = rule.is_applicable(&state);
            observer.rule_tried(current, index, applicable);
            if !applicable {
                continue;
            }

            let successor = rule.apply(&state);
            if let Some(existing) = graph.find_equivalent(&successor) {
                observer.duplicate_discarded(existing, index);
                continue;
            }
            candidates.push(Candidate {
                rule: index,
                successor,
            });
        }

        if candidates.is_empty() {
            // Dead end. A complete strategy might still find a plan.
            return (
                SearchOutcome::Failure {
                    reason: FailureReason::HeuristicMiss,
                },
                graph.len(),
            );
        }

        if graph.len() >= config.node_ceiling {
            return (
                SearchOutcome::Failure {
                    reason: FailureReason::CeilingExceeded(SearchLimit::MaxNodes {
                        limit: config.node_ceiling,
                    }),
                },
                graph.len(),
            );
        }

        let choice = choose(policy, &candidates, problem, &mut rng);
        let Candidate { rule, successor } = candidates.swap_remove(choice);
        let child = graph.push(successor, current, rule);
        observer.node_added(child, current, rule);
        current = child;
    }
}

/// Picks the index of the chosen candidate.
fn choose(
    policy: Policy,
    candidates: &[Candidate],
    problem: &Problem,
    rng: &mut ChaCha8Rng,
) -> usize {
    match policy {
        Policy::Random => rng.gen_range(0..candidates.len()),
        Policy::Priority => {
            // Conceptually a multiset where each rule appears `priority`
            // times; sampled without materializing it.
            let total: u64 = candidates
                .iter()
                .map(|c| u64::from(priority_of(problem, c.rule)))
                .sum();
            let mut ticket = rng.gen_range(0..total);
            for (i, candidate) in candidates.iter().enumerate() {
                let weight = u64::from(priority_of(problem, candidate.rule));
                if ticket < weight {
                    return i;
                }
                ticket -= weight;
            }
            candidates.len() - 1
        }
        Policy::MeansEnds => {
            let mut best = 0;
            let mut best_score = goal_overlap(problem, &candidates[0].successor);
            for (i, candidate) in candidates.iter().enumerate().skip(1) {
                let score = goal_overlap(problem, &candidate.successor);
                // Strictly greater: first-seen wins ties.
                if score > best_score {
                    best = i;
                    best_score = score;
                }
            }
            best
        }
    }
}

fn priority_of(problem: &Problem, rule: usize) -> u32 {
    problem.rule(rule).map_or(1, groundplan_foundation::Rule::priority)
}

fn goal_overlap(problem: &Problem, state: &FactSet) -> usize {
    problem.goal().count_common(state)
}
