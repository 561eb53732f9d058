//! The interactive shell.

use std::path::PathBuf;
use std::str::FromStr;

use groundplan_engine::{SearchOutcome, SearchResult, Strategy};
use groundplan_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use crate::wizard;

/// The interactive command loop.
pub struct Shell<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (problem, config, tracer).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Shell<RustylineEditor> {
    /// Creates a new shell with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Shell<E> {
    /// Creates a new shell with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "plan> ".to_string(),
        }
    }

    /// Sets the session for this shell.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the shell loop until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally. Command errors
    /// are printed and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            Self::print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            self.editor.add_history(trimmed);

            match self.dispatch(trimmed) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => Self::print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one command line.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, bad arguments, or any
    /// failure of the underlying operation.
    pub fn dispatch(&mut self, line: &str) -> Result<bool> {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        match command {
            "help" => {
                Self::print_help();
                Ok(true)
            }
            "quit" | "exit" => Ok(false),
            "load" => {
                let [path] = args[..] else {
                    return Err(Error::internal("usage: load <file>"));
                };
                self.session.load_file(path)?;
                println!("Loaded {path}.");
                Ok(true)
            }
            "create" => {
                let [path] = args[..] else {
                    return Err(Error::internal("usage: create <file>"));
                };
                let path = PathBuf::from(path);
                let problem = wizard::run(&mut self.editor, &path)?;
                self.session.load_problem(problem, Some(path));
                println!("Created and loaded. Type `solve` to run it.");
                Ok(true)
            }
            "show" => {
                print!("{}", self.session.describe()?);
                Ok(true)
            }
            "solve" => {
                match args[..] {
                    [] => {}
                    [name] => self.session.set_strategy(Strategy::from_str(name)?),
                    _ => return Err(Error::internal("usage: solve [strategy]")),
                }
                let result = self.session.solve()?;
                Self::print_result(result);
                Ok(true)
            }
            "plan" => {
                match self.session.last_result() {
                    Some(result) => Self::print_result(result),
                    None => println!("Nothing solved yet."),
                }
                Ok(true)
            }
            "strategy" => {
                match args[..] {
                    [] => println!("strategy: {}", self.session.config().strategy),
                    [name] => {
                        let strategy = Strategy::from_str(name)?;
                        self.session.set_strategy(strategy);
                        println!("strategy: {strategy}");
                    }
                    _ => return Err(Error::internal("usage: strategy [name]")),
                }
                Ok(true)
            }
            "limits" => self.cmd_limits(&args),
            "seed" => self.cmd_seed(&args),
            "trace" => self.cmd_trace(&args),
            other => Err(Error::internal(format!(
                "unknown command: {other} (try 'help')"
            ))),
        }
    }

    fn cmd_limits(&mut self, args: &[&str]) -> Result<bool> {
        match args {
            [] => {
                let config = self.session.config();
                println!(
                    "limits: {} nodes, depth {}",
                    config.node_ceiling, config.depth_ceiling
                );
            }
            [nodes] => {
                let nodes = parse_number(nodes, "node limit")?;
                self.session.config_mut().node_ceiling = nodes;
            }
            [nodes, depth] => {
                let nodes = parse_number(nodes, "node limit")?;
                let depth = parse_number(depth, "depth limit")?;
                let config = self.session.config_mut();
                config.node_ceiling = nodes;
                config.depth_ceiling = depth;
            }
            _ => return Err(Error::internal("usage: limits [nodes] [depth]")),
        }
        Ok(true)
    }

    fn cmd_seed(&mut self, args: &[&str]) -> Result<bool> {
        match args {
            [] => match self.session.config().seed {
                Some(seed) => println!("seed: {seed}"),
                None => println!("seed: (from entropy)"),
            },
            ["clear"] => self.session.config_mut().seed = None,
            [value] => {
                let seed: u64 = value
                    .parse()
                    .map_err(|_| Error::internal(format!("invalid seed: {value}")))?;
                self.session.config_mut().seed = Some(seed);
            }
            _ => return Err(Error::internal("usage: seed [<n>|clear]")),
        }
        Ok(true)
    }

    fn cmd_trace(&mut self, args: &[&str]) -> Result<bool> {
        match args {
            [] => {
                let state = if self.session.tracer().is_enabled() {
                    "on"
                } else {
                    "off"
                };
                println!("trace: {state}");
            }
            ["on"] => {
                self.session.tracer_mut().enable();
                println!("trace: on");
            }
            ["off"] => {
                self.session.tracer_mut().disable();
                println!("trace: off");
            }
            ["json"] => self.session.tracer_mut().set_json_format(true),
            ["text"] => self.session.tracer_mut().set_json_format(false),
            ["last", count] => {
                let count = parse_number(count, "record count")?;
                let problem = self
                    .session
                    .problem()
                    .ok_or_else(|| Error::internal("no problem loaded"))?;
                let records = self.session.tracer().buffer().last(count);
                if records.is_empty() {
                    println!("Trace buffer is empty.");
                } else {
                    println!("{}", self.session.tracer().format_records(&records, problem));
                }
            }
            _ => return Err(Error::internal("usage: trace [on|off|json|text|last <n>]")),
        }
        Ok(true)
    }

    fn print_result(result: &SearchResult) {
        match &result.outcome {
            SearchOutcome::Success { plan } => {
                println!("Plan found:");
                println!("{plan}");
            }
            SearchOutcome::Failure { reason } => {
                println!("No plan: {reason}");
            }
        }
        println!(
            "({} states generated in {:.2?})",
            result.stats.states_generated, result.stats.elapsed
        );
    }

    fn print_error(error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    fn print_banner() {
        println!("\x1b[1mGroundplan\x1b[0m {} - fact-based problem solver", env!("CARGO_PKG_VERSION"));
        println!("Type 'help' for commands, Ctrl+D to exit.\n");
    }

    fn print_help() {
        println!(
            "\x1b[1mCOMMANDS:\x1b[0m
    load <file>          Load a problem file
    create <file>        Create a problem file interactively
    show                 Show the loaded problem
    solve [strategy]     Solve with the current (or given) strategy
    plan                 Reprint the last result
    strategy [name]      Show or set the strategy
                         (bfs, backtrack, random, priority, means-ends)
    limits [N] [D]       Show or set node/depth ceilings
    seed [<n>|clear]     Show, set, or clear the RNG seed
    trace on|off         Toggle search tracing
    trace json|text      Select trace output format
    trace last <n>       Print the n most recent trace records
    help                 Show this help
    quit                 Exit"
        );
    }
}

/// Parses a non-negative integer argument with a labelled error.
fn parse_number(value: &str, what: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| Error::internal(format!("invalid {what}: {value}")))
}
