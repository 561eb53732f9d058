//! Line parser for the problem-definition format.

use std::path::Path;

use groundplan_foundation::{Error, Problem, ProblemBuilder, Result};

/// An action block under construction, with the line that opened it for
/// error reporting.
#[derive(Default)]
struct ActionBlock {
    opened_at: usize,
    name: Option<String>,
    preconds: Option<Vec<String>>,
    adds: Option<Vec<String>>,
    deletes: Option<Vec<String>>,
    priority: Option<u32>,
}

impl ActionBlock {
    fn new(opened_at: usize) -> Self {
        Self {
            opened_at,
            ..Self::default()
        }
    }

    /// Validates completeness and appends the rule to the builder.
    fn finish(self, builder: ProblemBuilder) -> Result<ProblemBuilder> {
        let line = self.opened_at;
        let name = self
            .name
            .ok_or_else(|| Error::parse("action block missing 'action:'", line))?;
        let preconds = self
            .preconds
            .ok_or_else(|| Error::parse("action block missing 'preconds:'", line))?;
        let adds = self
            .adds
            .ok_or_else(|| Error::parse("action block missing 'add:'", line))?;
        let deletes = self
            .deletes
            .ok_or_else(|| Error::parse("action block missing 'delete:'", line))?;

        Ok(builder.rule_with_priority(
            name,
            preconds,
            adds,
            deletes,
            self.priority.unwrap_or(groundplan_foundation::rule::DEFAULT_PRIORITY),
        ))
    }
}

/// Parses a problem definition from a string.
///
/// # Errors
///
/// Returns a line-numbered parse error for malformed input, or a
/// validation error from problem construction (e.g. no action blocks).
pub fn parse_str(source: &str) -> Result<Problem> {
    let mut builder = Problem::builder();
    let mut block: Option<ActionBlock> = None;
    let mut saw_start = false;
    let mut saw_finish = false;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("****") {
            if let Some(done) = block.take() {
                builder = done.finish(builder)?;
            }
            block = Some(ActionBlock::new(line_no));
            continue;
        }

        let Some((section, rest)) = line.split_once(':') else {
            return Err(Error::parse(format!("expected 'section: ...', got '{line}'"), line_no));
        };

        match block.as_mut() {
            None => match section.trim() {
                "start" => {
                    saw_start = true;
                    builder = builder.initial(split_facts(rest));
                }
                "finish" => {
                    saw_finish = true;
                    builder = builder.goal(split_facts(rest));
                }
                other => {
                    return Err(Error::parse(
                        format!("unknown section '{other}' outside an action block"),
                        line_no,
                    ));
                }
            },
            Some(current) => match section.trim() {
                "action" => set_once(&mut current.name, rest.trim().to_string(), "action", line_no)?,
                "preconds" => {
                    set_once(&mut current.preconds, split_facts(rest), "preconds", line_no)?;
                }
                "add" => set_once(&mut current.adds, split_facts(rest), "add", line_no)?,
                "delete" => set_once(&mut current.deletes, split_facts(rest), "delete", line_no)?,
                "priority" => {
                    let value: u32 = rest.trim().parse().map_err(|_| {
                        Error::parse(format!("invalid priority '{}'", rest.trim()), line_no)
                    })?;
                    if value < 1 {
                        return Err(Error::parse("priority must be >= 1", line_no));
                    }
                    set_once(&mut current.priority, value, "priority", line_no)?;
                }
                other => {
                    return Err(Error::parse(
                        format!("unknown section '{other}' in action block"),
                        line_no,
                    ));
                }
            },
        }
    }

    if let Some(done) = block.take() {
        builder = done.finish(builder)?;
    }

    if !saw_start {
        return Err(Error::parse("missing 'start:' line", 1));
    }
    if !saw_finish {
        return Err(Error::parse("missing 'finish:' line", 1));
    }

    builder.build()
}

/// Parses a problem definition from a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, otherwise any error
/// from [`parse_str`].
pub fn parse_file(path: impl AsRef<Path>) -> Result<Problem> {
    let source = std::fs::read_to_string(path)?;
    parse_str(&source)
}

/// Splits a comma-separated fact list, trimming each token and dropping
/// empties (so `a,,b` and trailing commas are tolerated).
fn split_facts(rest: &str) -> Vec<String> {
    rest.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn set_once<T>(slot: &mut Option<T>, value: T, section: &str, line: usize) -> Result<()> {
    if slot.is_some() {
        return Err(Error::parse(format!("duplicate '{section}:' in action block"), line));
    }
    *slot = Some(value);
    Ok(())
}
