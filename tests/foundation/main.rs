//! Integration tests for the foundation layer.
//!
//! Tests for facts, fact sets, rules, problems, and errors.

mod errors;
mod rules;
