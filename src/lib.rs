//! Groundplan - fact-based problem solver
//!
//! This crate re-exports all layers of the Groundplan system for
//! convenient access. For detailed documentation, see the individual
//! layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: groundplan_runtime    — Interactive shell, CLI
//!          groundplan_debug      — Search tracing
//! Layer 2: groundplan_engine     — Search strategies, plans
//!          groundplan_parser     — Problem-file parser
//! Layer 1: groundplan_foundation — Facts, rules, problems, errors
//! ```

pub use groundplan_debug as debug;
pub use groundplan_engine as engine;
pub use groundplan_foundation as foundation;
pub use groundplan_parser as parser;
pub use groundplan_runtime as runtime;
