//! Problem-definition file format for Groundplan.
//!
//! The format is line-oriented:
//!
//! ```text
//! start: at-door, on-floor, has-ball
//! finish: has-bananas
//! ****
//! action: climb-box
//! preconds: at-middle, on-floor
//! add: on-box
//! delete: on-floor
//! priority: 2
//! ```
//!
//! `start:` and `finish:` give the initial and goal fact sets. Each
//! `****` line opens an action block, which must contain `action:`,
//! `preconds:`, `add:`, and `delete:` (any of the last three may be an
//! empty list). `priority:` is optional and defaults to 1. Facts are
//! comma-separated and trimmed; blank lines are ignored. Rule order in
//! the file is preserved.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod parser;

pub use parser::{parse_file, parse_str};
