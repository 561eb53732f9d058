//! Session state for the shell.
//!
//! The session holds the currently loaded problem, the solver
//! configuration, the tracer, and the most recent search result.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use groundplan_debug::Tracer;
use groundplan_engine::{SearchConfig, SearchResult, Solver, Strategy};
use groundplan_foundation::{Error, ErrorKind, Problem, Result};

/// State for one interactive or batch session.
pub struct Session {
    /// The currently loaded problem, if any.
    problem: Option<Problem>,

    /// Path the problem was loaded from, for display.
    source: Option<PathBuf>,

    /// Solver configuration applied to the next `solve`.
    config: SearchConfig,

    /// Tracer for observability.
    tracer: Tracer,

    /// Result of the most recent solve.
    last_result: Option<SearchResult>,
}

impl Session {
    /// Creates a session with no problem loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            problem: None,
            source: None,
            config: SearchConfig::default(),
            tracer: Tracer::disabled(),
            last_result: None,
        }
    }

    /// Returns the loaded problem, if any.
    #[must_use]
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }

    /// Returns the path the problem was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns the solver configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Returns the solver configuration for mutation.
    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Returns the tracer for mutation.
    pub fn tracer_mut(&mut self) -> &mut Tracer {
        &mut self.tracer
    }

    /// Returns the most recent search result, if any.
    #[must_use]
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Sets the strategy for subsequent solves.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.config.strategy = strategy;
    }

    /// Loads a problem from a file.
    ///
    /// # Errors
    ///
    /// Returns an I/O, parse, or validation error. On error the
    /// previously loaded problem is kept.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let problem = groundplan_parser::parse_file(path)?;
        self.problem = Some(problem);
        self.source = Some(path.to_path_buf());
        self.last_result = None;
        Ok(())
    }

    /// Installs an already-built problem (e.g. from the wizard).
    pub fn load_problem(&mut self, problem: Problem, source: Option<PathBuf>) {
        self.problem = Some(problem);
        self.source = source;
        self.last_result = None;
    }

    /// Runs the configured strategy against the loaded problem.
    ///
    /// The result is also stored as [`Session::last_result`]. When the
    /// tracer is enabled, the run is recorded into its buffer.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoProblemLoaded`] if no problem is loaded.
    pub fn solve(&mut self) -> Result<&SearchResult> {
        let problem = self
            .problem
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::NoProblemLoaded))?;

        let solver = Solver::new(self.config.clone());
        let result = if self.tracer.is_enabled() {
            self.tracer.clear();
            solver.solve_with_observer(problem, &mut self.tracer)
        } else {
            solver.solve(problem)
        };

        Ok(self.last_result.insert(result))
    }

    /// Renders a human-readable summary of the loaded problem.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoProblemLoaded`] if no problem is loaded.
    pub fn describe(&self) -> Result<String> {
        let problem = self
            .problem
            .as_ref()
            .ok_or_else(|| Error::new(ErrorKind::NoProblemLoaded))?;

        let mut out = String::new();
        if let Some(source) = &self.source {
            let _ = writeln!(out, "Problem: {}", source.display());
        } else {
            let _ = writeln!(out, "Problem: (unsaved)");
        }

        let interner = problem.interner();
        let _ = writeln!(out, "  start:  {}", problem.initial().names(interner).join(", "));
        let _ = writeln!(out, "  finish: {}", problem.goal().names(interner).join(", "));
        let _ = writeln!(out, "  actions ({}):", problem.rules().len());
        for rule in problem.rules() {
            let _ = writeln!(
                out,
                "    {} [priority {}]: {} => +{} -{}",
                rule.name(),
                rule.priority(),
                rule.preconditions().names(interner).join(", "),
                rule.adds().names(interner).join(", "),
                rule.deletes().names(interner).join(", "),
            );
        }
        Ok(out)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
