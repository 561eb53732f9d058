//! Interactive shell and CLI for Groundplan.
//!
//! This crate provides:
//! - [`Session`] - Loaded problem, solver configuration, and tracer
//! - [`Shell`] - Interactive command loop
//! - A problem-file creation wizard

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod session;
pub mod shell;
pub mod wizard;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use session::Session;
pub use shell::Shell;
