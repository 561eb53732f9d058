//! Search tracing for Groundplan.
//!
//! This crate provides:
//! - [`Tracer`] - A [`groundplan_engine::SearchObserver`] that records
//!   every search event into a bounded buffer
//! - [`TraceBuffer`] - Ring buffer of trace records
//! - [`HumanFormatter`] / [`JsonFormatter`] - Record formatting
//!
//! The tracer is the single trace implementation for every strategy;
//! there are no parallel "verbose" variants of the algorithms.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod trace;

pub use trace::{
    HumanFormatter, JsonFormatter, TraceBuffer, TraceBufferStats, TraceEvent, TraceFormatter,
    TraceRecord, Tracer, TracerConfig,
};
