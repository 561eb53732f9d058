//! Interactive problem-file creation.
//!
//! Walks the user through start facts, finish facts, and a list of
//! action blocks, then writes the problem file and parses it back so
//! the session ends up with exactly what a later `load` would see.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use groundplan_foundation::{Error, Problem, Result};

use crate::editor::{LineEditor, ReadResult};

/// Runs the creation dialogue and writes the file at `path`.
///
/// # Errors
///
/// Returns an error if input is cancelled, the assembled problem fails
/// validation, or the file cannot be written.
pub fn run<E: LineEditor>(editor: &mut E, path: &Path) -> Result<Problem> {
    println!("Creating {}. Facts are comma-separated.", path.display());

    let start = prompt(editor, "start facts: ")?;
    let finish = prompt(editor, "finish facts: ")?;

    let mut source = String::new();
    let _ = writeln!(source, "start: {start}");
    let _ = writeln!(source, "finish: {finish}");

    loop {
        let name = prompt(editor, "action name (blank to finish): ")?;
        if name.trim().is_empty() {
            break;
        }

        let preconds = prompt(editor, "  preconds: ")?;
        let adds = prompt(editor, "  add: ")?;
        let deletes = prompt(editor, "  delete: ")?;
        let priority = prompt(editor, "  priority [1]: ")?;

        let _ = writeln!(source, "****");
        let _ = writeln!(source, "action: {}", name.trim());
        let _ = writeln!(source, "preconds: {preconds}");
        let _ = writeln!(source, "add: {adds}");
        let _ = writeln!(source, "delete: {deletes}");
        if !priority.trim().is_empty() {
            let _ = writeln!(source, "priority: {}", priority.trim());
        }
    }

    // Validate before touching the filesystem.
    let problem = groundplan_parser::parse_str(&source)?;
    fs::write(path, &source)?;
    println!("Wrote {}.", path.display());

    Ok(problem)
}

/// Reads one line, treating Ctrl+C and Ctrl+D as cancellation.
fn prompt<E: LineEditor>(editor: &mut E, text: &str) -> Result<String> {
    match editor.read_line(text)? {
        ReadResult::Line(line) => Ok(line),
        ReadResult::Interrupted | ReadResult::Eof => Err(Error::internal("input cancelled")),
    }
}
