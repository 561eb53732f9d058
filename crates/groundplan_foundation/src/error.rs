//! Error types for the Groundplan system.
//!
//! Uses `thiserror` for ergonomic error definition. Construction-time
//! validation failures and I/O problems are errors; an unsolvable but
//! well-formed problem is a search outcome, not an error.

use std::fmt;

use thiserror::Error;

/// The main error type for Groundplan operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an empty-rule-list error.
    #[must_use]
    pub fn empty_rule_list() -> Self {
        Self::new(ErrorKind::EmptyRuleList)
    }

    /// Creates an unnamed-rule error.
    #[must_use]
    pub fn unnamed_rule(index: usize) -> Self {
        Self::new(ErrorKind::UnnamedRule { index })
    }

    /// Creates an empty-fact error.
    #[must_use]
    pub fn empty_fact() -> Self {
        Self::new(ErrorKind::EmptyFact)
    }

    /// Creates an invalid-priority error.
    #[must_use]
    pub fn invalid_priority(rule: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPriority { rule: rule.into() })
    }

    /// Creates a parse error at the given line (1-indexed).
    #[must_use]
    pub fn parse(message: impl Into<String>, line: usize) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
        })
    }

    /// Creates an unknown-strategy error.
    #[must_use]
    pub fn unknown_strategy(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownStrategy(name.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A problem was constructed with no rules at all.
    #[error("problem has an empty rule list")]
    EmptyRuleList,

    /// A rule was constructed with an empty name.
    #[error("rule at index {index} has an empty name")]
    UnnamedRule {
        /// Position of the offending rule in the rule list.
        index: usize,
    },

    /// A fact token was empty after trimming.
    #[error("empty fact token")]
    EmptyFact,

    /// A rule priority was below the minimum of 1.
    #[error("rule {rule} has priority below 1")]
    InvalidPriority {
        /// Name of the offending rule.
        rule: String,
    },

    /// Problem-file syntax error.
    #[error("parse error at line {line}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: usize,
    },

    /// Strategy name not recognized.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    /// No problem loaded when one was required.
    #[error("no problem loaded")]
    NoProblemLoaded,

    /// Underlying I/O failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Resource ceilings that bound a search.
///
/// Exceeding a limit is a defined failure mode, distinct from a proven
/// absence of solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLimit {
    /// Maximum number of nodes in the search graph.
    MaxNodes {
        /// The configured limit.
        limit: usize,
    },
    /// Maximum depth of the active path (backtracking).
    MaxDepth {
        /// The configured limit.
        limit: usize,
    },
}

impl fmt::Display for SearchLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxNodes { limit } => write!(f, "max nodes ({limit}) exceeded"),
            Self::MaxDepth { limit } => write!(f, "max depth ({limit}) exceeded"),
        }
    }
}
