//! Tracing system for Groundplan searches.
//!
//! The [`Tracer`] is a [`SearchObserver`] that records every search
//! event into a bounded buffer, with near-zero overhead when disabled.
//! Records can be rendered human-readable or as JSON after the run.
//!
//! # Example
//!
//! ```
//! use groundplan_debug::{Tracer, TracerConfig};
//!
//! let tracer = Tracer::new(TracerConfig::new().enabled().with_buffer_size(1000));
//! // pass &mut tracer to Solver::solve_with_observer, then inspect
//! // tracer.buffer() or tracer.format_records(...)
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::{TraceBuffer, TraceBufferStats};
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{TraceEvent, TraceRecord};

use std::io::{self, Write};
use std::time::Instant;

use groundplan_engine::{NodeId, SearchObserver, Strategy};
use groundplan_foundation::Problem;

// =============================================================================
// Trace Output
// =============================================================================

/// Where trace output should be sent as events arrive.
#[derive(Clone, Debug, Default)]
pub enum TraceOutput {
    /// No live output (records still land in the buffer).
    #[default]
    None,
    /// Write each record to stderr as it is recorded.
    Stderr,
}

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether tracing is enabled.
    pub enabled: bool,
    /// Maximum records to keep in the buffer.
    pub buffer_size: usize,
    /// Where to output records as they arrive.
    pub output: TraceOutput,
    /// Whether to use JSON format.
    pub json_format: bool,
    /// Filter for specific event types (empty = all).
    pub event_filter: Vec<String>,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            buffer_size: 10000,
            output: TraceOutput::None,
            json_format: false,
            event_filter: Vec::new(),
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to enable tracing.
    #[must_use]
    pub fn enabled(mut self) -> Self {
        self.enabled = true;
        self
    }

    /// Builder method to set buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Builder method to output to stderr.
    #[must_use]
    pub fn to_stderr(mut self) -> Self {
        self.output = TraceOutput::Stderr;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }

    /// Builder method to filter event types.
    #[must_use]
    pub fn filter_events(mut self, types: Vec<String>) -> Self {
        self.event_filter = types;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records search events into a bounded buffer.
///
/// Implements [`SearchObserver`], so a tracer can be handed directly to
/// `Solver::solve_with_observer`. The `record` method returns
/// immediately when tracing is off.
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    start_time: Instant,
    human_formatter: HumanFormatter,
    json_formatter: JsonFormatter,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        let buffer_size = config.buffer_size;
        Self {
            config,
            buffer: TraceBuffer::new(buffer_size),
            start_time: Instant::now(),
            human_formatter: HumanFormatter::new().with_timestamps(),
            json_formatter: JsonFormatter::new(),
        }
    }

    /// Creates a tracer with default configuration (disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::default())
    }

    /// Creates an enabled tracer that outputs to stderr.
    #[must_use]
    pub fn to_stderr() -> Self {
        Self::new(TracerConfig::new().enabled().to_stderr())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enables tracing.
    pub fn enable(&mut self) {
        self.config.enabled = true;
    }

    /// Disables tracing.
    pub fn disable(&mut self) {
        self.config.enabled = false;
    }

    /// Sets whether to use JSON output format.
    pub fn set_json_format(&mut self, json: bool) {
        self.config.json_format = json;
    }

    /// Sets the trace output destination.
    pub fn set_output(&mut self, output: TraceOutput) {
        self.config.output = output;
    }

    /// Records a trace event.
    ///
    /// Designed to be as fast as possible when tracing is disabled.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }

        self.record_internal(event);
    }

    fn record_internal(&mut self, event: TraceEvent) {
        if !self.config.event_filter.is_empty()
            && !self
                .config
                .event_filter
                .contains(&event.event_type().to_string())
        {
            return;
        }

        #[allow(clippy::cast_possible_truncation)]
        let timestamp_ns = self.start_time.elapsed().as_nanos() as u64;
        let id = self.buffer.push(timestamp_ns, event);

        if let TraceOutput::Stderr = self.config.output {
            if let Some(record) = self.buffer.iter().find(|r| r.id == id) {
                Self::output_record(record);
            }
        }
    }

    /// Outputs a record to stderr without resolving rule names.
    ///
    /// Live output has no problem in scope; callers wanting resolved
    /// names format the buffer with [`Tracer::format_records`] after
    /// the run.
    fn output_record(record: &TraceRecord) {
        let line = format!("[{:06}] {}", record.id, record.event_type());
        let _ = writeln!(io::stderr(), "{line}");
    }

    /// Formats a record using the current format settings.
    #[must_use]
    pub fn format_record(&self, record: &TraceRecord, problem: &Problem) -> String {
        if self.config.json_format {
            self.json_formatter.format(record, problem)
        } else {
            self.human_formatter.format(record, problem)
        }
    }

    /// Formats multiple records.
    #[must_use]
    pub fn format_records(&self, records: &[&TraceRecord], problem: &Problem) -> String {
        if self.config.json_format {
            self.json_formatter.format_many(records, problem)
        } else {
            self.human_formatter.format_many(records, problem)
        }
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Clears the trace buffer.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> TraceBufferStats {
        self.buffer.stats()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::disabled()
    }
}

impl SearchObserver for Tracer {
    fn search_started(&mut self, strategy: Strategy) {
        self.record(TraceEvent::SearchStarted { strategy });
    }

    fn node_expanded(&mut self, node: NodeId, depth: usize) {
        self.record(TraceEvent::NodeExpanded { node, depth });
    }

    fn rule_tried(&mut self, node: NodeId, rule: usize, applicable: bool) {
        self.record(TraceEvent::RuleTried {
            node,
            rule,
            applicable,
        });
    }

    fn node_added(&mut self, node: NodeId, parent: NodeId, rule: usize) {
        self.record(TraceEvent::NodeAdded { node, parent, rule });
    }

    fn duplicate_discarded(&mut self, node: NodeId, rule: usize) {
        self.record(TraceEvent::DuplicateDiscarded { node, rule });
    }

    fn backtracked(&mut self, from: NodeId, to: NodeId, resume_from: usize) {
        self.record(TraceEvent::Backtracked {
            from,
            to,
            resume_from,
        });
    }

    fn goal_reached(&mut self, node: NodeId) {
        self.record(TraceEvent::GoalReached { node });
    }

    fn search_finished(&mut self, success: bool) {
        self.record(TraceEvent::SearchFinished { success });
    }
}

// =============================================================================
// Tests
// =============================================================================
