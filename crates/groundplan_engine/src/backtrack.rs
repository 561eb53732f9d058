//! Backtracking depth-first search.
//!
//! A cursor walks the graph with two pieces of state: `current`, the
//! active node, and `resume_from`, the index of the next untried rule at
//! `current`. Expansion takes the first applicable rule at or after
//! `resume_from` in strict rule-list order; a dead end moves the cursor
//! back to the parent with `resume_from` set to one past the rule that
//! produced the abandoned child, so failed children are never retried.
//!
//! There is no state deduplication. The depth ceiling is the only guard
//! against infinite regress on cyclic rule graphs; that is a liveness
//! limitation, not a correctness one. Nodes are never physically freed:
//! the arena keeps retired branches, so the states-generated statistic
//! counts every node ever created.

use groundplan_foundation::{Problem, SearchLimit};

use crate::graph::SearchGraph;
use crate::observer::SearchObserver;
use crate::plan::Plan;
use crate::strategy::{FailureReason, SearchConfig, SearchOutcome};

/// Runs the backtracking strategy. Returns the outcome and the number
/// of states generated.
pub(crate) fn search(
    problem: &Problem,
    config: &SearchConfig,
    observer: &mut dyn SearchObserver,
) -> (SearchOutcome, usize) {
    let mut graph = SearchGraph::with_root(problem.initial().clone());
    let mut current = graph.root();
    let mut resume_from = 0usize;
    // Set when a branch is cut off by the depth ceiling; exhaustion then
    // proves nothing.
    let mut clipped = false;

    loop {
        let state = graph.node(current).state().clone();

        if problem.is_goal(&state) {
            observer.goal_reached(current);
            let plan = Plan::reconstruct(&graph, problem, current);
            return (SearchOutcome::Success { plan }, graph.len());
        }

        observer.node_expanded(current, graph.node(current).depth());

        let mut advanced = false;
        if graph.node(current).depth() < config.depth_ceiling {
            for index in resume_from..problem.rules().len() {
                let rule = &problem.rules()[index];
                let applicable = rule.is_applicable(&state);
                observer.rule_tried(current, index, applicable);
                if !applicable {
                    continue;
                }

                let successor = rule.apply(&state);
                let child = graph.push(successor, current, index);
                observer.node_added(child, current, index);
                current = child;
                resume_from = 0;
                advanced = true;
                break;
            }
        } else {
            clipped = true;
        }

        if advanced {
            continue;
        }

        // Dead end: retreat to the parent and resume after the rule that
        // produced this node.
        let node = graph.node(current);
        match (node.parent(), node.via()) {
            (Some(parent), Some(via)) => {
                resume_from = via + 1;
                observer.backtracked(current, parent, resume_from);
                current = parent;
            }
            _ => {
                // Backtrack from the root: failure is proven unless the
                // depth ceiling clipped part of the space.
                let reason = if clipped {
                    FailureReason::CeilingExceeded(SearchLimit::MaxDepth {
                        limit: config.depth_ceiling,
                    })
                } else {
                    FailureReason::ProvenUnreachable
                };
                return (SearchOutcome::Failure { reason }, graph.len());
            }
        }
    }
}
