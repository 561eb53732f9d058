//! Facts, fact sets, rules, and problems for Groundplan.
//!
//! This crate provides:
//! - [`FactId`] / [`FactInterner`] - Interned ground fact tokens
//! - [`FactSet`] - Persistent set of facts (the state representation)
//! - [`Rule`] - Named precondition/add/delete transformation
//! - [`Problem`] - Initial state, goal, and rule library
//! - [`Error`] - Error types with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod intern;
pub mod problem;
pub mod rule;
pub mod state;

pub use error::{Error, ErrorKind, SearchLimit};
pub use intern::{FactId, FactInterner};
pub use problem::{Problem, ProblemBuilder};
pub use rule::{DEFAULT_PRIORITY, Rule};
pub use state::FactSet;

/// Result type alias using the Groundplan [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
