//! Search engine for Groundplan.
//!
//! This crate provides:
//! - [`SearchGraph`] - Per-invocation arena of search nodes
//! - [`Solver`] - The `Problem -> SearchResult` entry point
//! - Breadth-first complete, backtracking depth-first, and heuristic
//!   (random / priority-weighted / means-ends) strategies
//! - [`Plan`] - Plan reconstruction and replay
//! - [`SearchObserver`] - Injectable trace callbacks

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod backtrack;
mod bfs;
pub mod graph;
mod heuristic;
pub mod observer;
pub mod plan;
pub mod strategy;

pub use graph::{NodeId, SearchGraph, SearchNode};
pub use heuristic::Policy;
pub use observer::{NoopObserver, SearchObserver};
pub use plan::{Plan, PlanStep};
pub use strategy::{
    DEFAULT_DEPTH_CEILING, DEFAULT_NODE_CEILING, FailureReason, SearchConfig, SearchOutcome,
    SearchResult, SearchStats, Solver, Strategy,
};
