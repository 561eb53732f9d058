//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records. Both
//! take the [`Problem`] being searched so rule indices can be resolved
//! to names.

use groundplan_foundation::Problem;

use super::record::{TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord, problem: &Problem) -> String;

    /// Formats multiple records.
    fn format_many(&self, records: &[&TraceRecord], problem: &Problem) -> String {
        records
            .iter()
            .map(|r| self.format(r, problem))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Resolves a rule index to its name, or `?` if out of range.
fn rule_name(index: usize, problem: &Problem) -> &str {
    problem.rule(index).map_or("?", |rule| rule.name())
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records in human-readable form.
#[derive(Clone, Debug, Default)]
pub struct HumanFormatter {
    /// Whether to include timestamps.
    pub show_timestamps: bool,
    /// Whether to include record IDs.
    pub show_ids: bool,
}

impl HumanFormatter {
    /// Creates a new human formatter with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to show timestamps.
    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.show_timestamps = true;
        self
    }

    /// Builder method to show record IDs.
    #[must_use]
    pub fn with_ids(mut self) -> Self {
        self.show_ids = true;
        self
    }

    /// Formats timestamp in microseconds.
    #[allow(clippy::cast_precision_loss)]
    fn format_timestamp(ns: u64) -> String {
        let us = ns / 1000;
        if us >= 1_000_000 {
            format!("{:.3}s", us as f64 / 1_000_000.0)
        } else if us >= 1000 {
            format!("{:.3}ms", us as f64 / 1000.0)
        } else {
            format!("{us}us")
        }
    }
}

impl TraceFormatter for HumanFormatter {
    #[allow(clippy::format_push_string)]
    fn format(&self, record: &TraceRecord, problem: &Problem) -> String {
        use std::fmt::Write;
        let mut prefix = String::new();

        if self.show_ids {
            let _ = write!(prefix, "[{:06}] ", record.id);
        }

        if self.show_timestamps {
            let _ = write!(
                prefix,
                "{:>10} ",
                Self::format_timestamp(record.timestamp_ns)
            );
        }

        let event_str = match &record.event {
            TraceEvent::SearchStarted { strategy } => {
                format!("=== SEARCH START ({strategy}) ===")
            }
            TraceEvent::NodeExpanded { node, depth } => {
                format!("EXPAND {node} (depth {depth})")
            }
            TraceEvent::RuleTried {
                node,
                rule,
                applicable,
            } => {
                let status = if *applicable { "APPLICABLE" } else { "blocked" };
                format!("  TRY {} at {node}: {status}", rule_name(*rule, problem))
            }
            TraceEvent::NodeAdded { node, parent, rule } => {
                format!(
                    "  ADD {node} <- {parent} via {}",
                    rule_name(*rule, problem)
                )
            }
            TraceEvent::DuplicateDiscarded { node, rule } => {
                format!(
                    "  DUP {} would revisit {node}",
                    rule_name(*rule, problem)
                )
            }
            TraceEvent::Backtracked {
                from,
                to,
                resume_from,
            } => {
                format!("BACKTRACK {from} -> {to} (resume at rule {resume_from})")
            }
            TraceEvent::GoalReached { node } => {
                format!("GOAL at {node}")
            }
            TraceEvent::SearchFinished { success } => {
                let status = if *success { "OK" } else { "FAILED" };
                format!("=== SEARCH END ({status}) ===")
            }
        };

        format!("{prefix}{event_str}")
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as JSON, one object per record.
#[derive(Clone, Debug, Default)]
pub struct JsonFormatter {
    /// Whether to pretty-print lists of records.
    pub pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method for pretty printing.
    #[must_use]
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    /// Escapes a string for JSON.
    fn escape_string(s: &str) -> String {
        s.replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord, problem: &Problem) -> String {
        let event_type = record.event_type();
        let rule_json = |index: usize| {
            format!(
                "\"rule\":{index},\"rule_name\":\"{}\"",
                Self::escape_string(rule_name(index, problem))
            )
        };

        let event_data = match &record.event {
            TraceEvent::SearchStarted { strategy } => {
                format!("\"strategy\":\"{strategy}\"")
            }
            TraceEvent::NodeExpanded { node, depth } => {
                format!("\"node\":{},\"depth\":{depth}", node.index())
            }
            TraceEvent::RuleTried {
                node,
                rule,
                applicable,
            } => {
                format!(
                    "\"node\":{},{},\"applicable\":{applicable}",
                    node.index(),
                    rule_json(*rule)
                )
            }
            TraceEvent::NodeAdded { node, parent, rule } => {
                format!(
                    "\"node\":{},\"parent\":{},{}",
                    node.index(),
                    parent.index(),
                    rule_json(*rule)
                )
            }
            TraceEvent::DuplicateDiscarded { node, rule } => {
                format!("\"node\":{},{}", node.index(), rule_json(*rule))
            }
            TraceEvent::Backtracked {
                from,
                to,
                resume_from,
            } => {
                format!(
                    "\"from\":{},\"to\":{},\"resume_from\":{resume_from}",
                    from.index(),
                    to.index()
                )
            }
            TraceEvent::GoalReached { node } => {
                format!("\"node\":{}", node.index())
            }
            TraceEvent::SearchFinished { success } => {
                format!("\"success\":{success}")
            }
        };

        format!(
            "{{\"id\":{},\"timestamp_ns\":{},\"type\":\"{}\",{}}}",
            record.id, record.timestamp_ns, event_type, event_data
        )
    }

    fn format_many(&self, records: &[&TraceRecord], problem: &Problem) -> String {
        let items: Vec<_> = records.iter().map(|r| self.format(r, problem)).collect();
        if self.pretty {
            format!("[\n  {}\n]", items.join(",\n  "))
        } else {
            format!("[{}]", items.join(","))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
