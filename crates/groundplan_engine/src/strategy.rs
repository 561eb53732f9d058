//! Strategy selection, search configuration, and the solver entry point.
//!
//! The engine's only boundary is `Problem -> SearchResult`. Each call to
//! [`Solver::solve`] owns a fresh search graph; no state survives
//! between invocations.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use groundplan_foundation::{Error, Problem, SearchLimit};

use crate::observer::{NoopObserver, SearchObserver};
use crate::plan::Plan;
use crate::{backtrack, bfs, heuristic};

/// Default maximum number of nodes in the search graph.
pub const DEFAULT_NODE_CEILING: usize = 10_000;

/// Default maximum depth of the backtracking path.
pub const DEFAULT_DEPTH_CEILING: usize = 100;

/// The available search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Exhaustive breadth-first search with state deduplication.
    BreadthFirst,
    /// Depth-first search with explicit backtracking and resumption
    /// indices, in strict rule-list order.
    Backtrack,
    /// Single-choice walk picking uniformly among applicable rules.
    Random,
    /// Single-choice walk weighted by rule priority.
    Priority,
    /// Single-choice walk picking the rule whose successor shares the
    /// most facts with the goal (means-ends analysis).
    MeansEnds,
}

impl Strategy {
    /// Returns true for the strategies that trade completeness for
    /// speed and therefore report misses instead of proofs.
    #[must_use]
    pub fn is_heuristic(self) -> bool {
        matches!(self, Self::Random | Self::Priority | Self::MeansEnds)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BreadthFirst => write!(f, "bfs"),
            Self::Backtrack => write!(f, "backtrack"),
            Self::Random => write!(f, "random"),
            Self::Priority => write!(f, "priority"),
            Self::MeansEnds => write!(f, "means-ends"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "backtrack" | "dfs" => Ok(Self::Backtrack),
            "random" => Ok(Self::Random),
            "priority" => Ok(Self::Priority),
            "means-ends" | "greedy" => Ok(Self::MeansEnds),
            other => Err(Error::unknown_strategy(other)),
        }
    }
}

/// Configuration consumed by the solver.
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Which strategy to run.
    pub strategy: Strategy,
    /// Maximum nodes in the search graph (BFS and heuristic walks).
    pub node_ceiling: usize,
    /// Maximum depth of the active path (backtracking).
    pub depth_ceiling: usize,
    /// Seed for the random and priority strategies. `None` seeds from
    /// the OS; set it for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::BreadthFirst,
            node_ceiling: DEFAULT_NODE_CEILING,
            depth_ceiling: DEFAULT_DEPTH_CEILING,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Creates a configuration for the given strategy with default ceilings.
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            ..Self::default()
        }
    }

    /// Sets the node ceiling.
    #[must_use]
    pub fn with_node_ceiling(mut self, ceiling: usize) -> Self {
        self.node_ceiling = ceiling;
        self
    }

    /// Sets the depth ceiling.
    #[must_use]
    pub fn with_depth_ceiling(mut self, ceiling: usize) -> Self {
        self.depth_ceiling = ceiling;
        self
    }

    /// Sets the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Why a search ended without a plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureReason {
    /// The enumerated state space was exhausted: no plan exists within
    /// it. Only complete strategies (BFS, backtracking) report this.
    ProvenUnreachable,
    /// A resource ceiling aborted the search; nothing is proven.
    CeilingExceeded(SearchLimit),
    /// A heuristic walk dead-ended. A plan may still exist.
    HeuristicMiss,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProvenUnreachable => write!(f, "goal proven unreachable"),
            Self::CeilingExceeded(limit) => write!(f, "search aborted: {limit}"),
            Self::HeuristicMiss => write!(f, "no plan found under this heuristic"),
        }
    }
}

/// Success or failure of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A goal-satisfying node was reached.
    Success {
        /// The reconstructed plan, in execution order.
        plan: Plan,
    },
    /// No plan was produced.
    Failure {
        /// Why the search ended empty-handed.
        reason: FailureReason,
    },
}

impl SearchOutcome {
    /// Returns true for a success.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Basic statistics about one search run.
#[derive(Clone, Debug)]
pub struct SearchStats {
    /// States ever created, the root included.
    pub states_generated: usize,
    /// Wall-clock duration of the run.
    pub elapsed: Duration,
}

/// Outcome plus statistics for one search run.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Success or failure.
    pub outcome: SearchOutcome,
    /// Run statistics.
    pub stats: SearchStats,
}

impl SearchResult {
    /// Returns the plan if the search succeeded.
    #[must_use]
    pub fn plan(&self) -> Option<&Plan> {
        match &self.outcome {
            SearchOutcome::Success { plan } => Some(plan),
            SearchOutcome::Failure { .. } => None,
        }
    }
}

/// The solver entry point.
///
/// Single-threaded and synchronous: each call runs to completion
/// (success, proven failure, or ceiling) before returning.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    /// Creates a solver with the given configuration.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs the configured strategy against a problem.
    #[must_use]
    pub fn solve(&self, problem: &Problem) -> SearchResult {
        self.solve_with_observer(problem, &mut NoopObserver)
    }

    /// Runs the configured strategy, reporting progress to `observer`.
    #[must_use]
    pub fn solve_with_observer(
        &self,
        problem: &Problem,
        observer: &mut dyn SearchObserver,
    ) -> SearchResult {
        let start = Instant::now();
        observer.search_started(self.config.strategy);

        let (outcome, states_generated) = match self.config.strategy {
            Strategy::BreadthFirst => bfs::search(problem, &self.config, observer),
            Strategy::Backtrack => backtrack::search(problem, &self.config, observer),
            Strategy::Random => {
                heuristic::search(problem, &self.config, heuristic::Policy::Random, observer)
            }
            Strategy::Priority => {
                heuristic::search(problem, &self.config, heuristic::Policy::Priority, observer)
            }
            Strategy::MeansEnds => {
                heuristic::search(problem, &self.config, heuristic::Policy::MeansEnds, observer)
            }
        };

        observer.search_finished(outcome.is_success());

        SearchResult {
            outcome,
            stats: SearchStats {
                states_generated,
                elapsed: start.elapsed(),
            },
        }
    }
}
