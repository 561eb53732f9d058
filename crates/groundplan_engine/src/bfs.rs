//! Breadth-first complete search.
//!
//! Maintains a FIFO queue of node handles over the append-only graph.
//! Every applicable rule of a dequeued node is tried in rule-list order;
//! successor states that match an existing node by set equality are
//! discarded. That dedup invariant bounds the graph on any problem with
//! a finite reachable state space, and the level-order property makes
//! the first goal hit a shortest plan.

use std::collections::VecDeque;

use groundplan_foundation::{Problem, SearchLimit};

use crate::graph::SearchGraph;
use crate::observer::SearchObserver;
use crate::plan::Plan;
use crate::strategy::{FailureReason, SearchConfig, SearchOutcome};

/// Runs the breadth-first strategy. Returns the outcome and the number
/// of states generated.
pub(crate) fn search(
    problem: &Problem,
    config: &SearchConfig,
    observer: &mut dyn SearchObserver,
) -> (SearchOutcome, usize) {
    let mut graph = SearchGraph::with_root(problem.initial().clone());
    let mut queue = VecDeque::from([graph.root()]);

    while let Some(current) = queue.pop_front() {
        // Cheap clone: fact sets are persistent.
        let state = graph.node(current).state().clone();

        if problem.is_goal(&state) {
            observer.goal_reached(current);
            let plan = Plan::reconstruct(&graph, problem, current);
            return (SearchOutcome::Success { plan }, graph.len());
        }

        observer.node_expanded(current, graph.node(current).depth());

        for (index, rule) in problem.rules().iter().enumerate() {
            let applicable = rule.is_applicable(&state);
            observer.rule_tried(current, index, applicable);
            if !applicable {
                continue;
            }

            let successor = rule.apply(&state);
            if let Some(existing) = graph.find_equivalent(&successor) {
                // Transition discarded: no new node, no new edge.
                observer.duplicate_discarded(existing, index);
                continue;
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

            let child = graph.push(successor, current, index);
            observer.node_added(child, current, index);
            queue.push_back(child);
        }
    }

    // Queue exhausted: unreachability is proven within the enumerated
    // state space.
    (
        SearchOutcome::Failure {
            reason: FailureReason::ProvenUnreachable,
        },
        graph.len(),
    )
}
