//! Line editor abstraction for the shell.
//!
//! This module provides a trait-based abstraction over line editing
//! libraries, allowing the shell to use rustyline while remaining
//! swappable (and testable with a scripted editor).

use std::borrow::Cow;

use groundplan_foundation::{Error, Result};
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{CmdKind, Highlighter};
use rustyline::hint::HistoryHinter;
use rustyline::history::DefaultHistory;
use rustyline::{Completer as CompleterDerive, Config, Context, Editor, Helper, Hinter, Validator};

/// Result of reading a line from the editor.
#[derive(Debug)]
pub enum ReadResult {
    /// A line was successfully read.
    Line(String),
    /// User pressed Ctrl+C.
    Interrupted,
    /// User pressed Ctrl+D (EOF).
    Eof,
}

/// Abstraction over line editing functionality.
pub trait LineEditor {
    /// Reads a line with the given prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult>;

    /// Adds a line to history.
    fn add_history(&mut self, line: &str);
}

/// Helper for rustyline that provides completion and hints.
#[derive(Helper, CompleterDerive, Hinter, Validator)]
struct ShellHelper {
    #[rustyline(Completer)]
    completer: CommandCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl Highlighter for ShellHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(format!("\x1b[1;32m{prompt}\x1b[0m"))
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        false
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(format!("\x1b[2m{hint}\x1b[0m"))
    }
}

/// Completer for shell commands, strategy names, and file paths.
struct CommandCompleter {
    file_completer: FilenameCompleter,
    keywords: Vec<String>,
}

impl CommandCompleter {
    fn new() -> Self {
        Self {
            file_completer: FilenameCompleter::new(),
            keywords: Self::default_keywords(),
        }
    }

    fn default_keywords() -> Vec<String> {
        vec![
            // Commands
            "load".into(),
            "show".into(),
            "solve".into(),
            "plan".into(),
            "strategy".into(),
            "limits".into(),
            "seed".into(),
            "trace".into(),
            "create".into(),
            "help".into(),
            "quit".into(),
            // Strategy names
            "bfs".into(),
            "backtrack".into(),
            "random".into(),
            "priority".into(),
            "means-ends".into(),
            // Trace subcommands
            "on".into(),
            "off".into(),
            "json".into(),
            "last".into(),
        ]
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let start = line[..pos]
            .rfind(char::is_whitespace)
            .map_or(0, |i| i + 1);
        let word = &line[start..pos];

        // After `load` or `create`, complete file paths.
        let first = line.split_whitespace().next().unwrap_or("");
        if start > 0 && matches!(first, "load" | "create") {
            return self.file_completer.complete(line, pos, ctx);
        }

        let candidates: Vec<Pair> = self
            .keywords
            .iter()
            .filter(|kw| kw.starts_with(word))
            .map(|kw| Pair {
                display: kw.clone(),
                replacement: kw.clone(),
            })
            .collect();

        Ok((start, candidates))
    }
}

/// Line editor implementation using rustyline.
pub struct RustylineEditor {
    editor: Editor<ShellHelper, DefaultHistory>,
}

impl RustylineEditor {
    /// Creates a new rustyline-based editor.
    ///
    /// # Errors
    ///
    /// Returns an error if rustyline initialization fails.
    ///
    /// # Panics
    ///
    /// Panics if the history size configuration is invalid (should not
    /// happen with hardcoded valid values).
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .auto_add_history(false)
            .max_history_size(1000)
            .expect("valid history size")
            .build();

        let helper = ShellHelper {
            completer: CommandCompleter::new(),
            hinter: HistoryHinter::new(),
        };

        let mut editor =
            Editor::with_config(config).map_err(|e| Error::internal(e.to_string()))?;
        editor.set_helper(Some(helper));

        Ok(Self { editor })
    }
}

impl LineEditor for RustylineEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadResult::Line(line)),
            Err(ReadlineError::Interrupted) => Ok(ReadResult::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadResult::Eof),
            Err(e) => Err(Error::internal(e.to_string())),
        }
    }

    fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }
}

/// Editor that replays a fixed script of lines, for tests.
#[derive(Default)]
pub struct ScriptedEditor {
    lines: std::collections::VecDeque<String>,
}

impl ScriptedEditor {
    /// Creates an editor that will yield `lines` in order, then EOF.
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self
            .lines
            .pop_front()
            .map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}
}
