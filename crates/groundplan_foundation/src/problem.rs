//! Problem definitions.
//!
//! A [`Problem`] bundles an initial state, a goal state, and an ordered
//! rule library together with the interner that maps fact tokens to ids.
//! It is read-only input to the search engine; rule order is significant
//! for backtracking and for breadth-first tie-breaking.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::intern::FactInterner;
use crate::rule::Rule;
use crate::state::FactSet;

/// An immutable planning problem.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Problem {
    /// Interner owning every fact token of the problem.
    interner: FactInterner,
    /// The initial state.
    initial: FactSet,
    /// Facts that must all hold in a terminal state.
    goal: FactSet,
    /// Rule library, in declaration order.
    rules: Vec<Rule>,
}

impl Problem {
    /// Creates a problem from already-interned parts.
    ///
    /// # Errors
    ///
    /// Returns an error for structural defects that must never reach the
    /// search engine: an empty rule list, a rule with an empty name, or
    /// a rule priority below 1.
    pub fn new(
        interner: FactInterner,
        initial: FactSet,
        goal: FactSet,
        rules: Vec<Rule>,
    ) -> crate::Result<Self> {
        if rules.is_empty() {
            return Err(Error::empty_rule_list());
        }
        for (index, rule) in rules.iter().enumerate() {
            if rule.name().trim().is_empty() {
                return Err(Error::unnamed_rule(index));
            }
            if rule.priority() < 1 {
                return Err(Error::invalid_priority(rule.name()));
            }
        }

        Ok(Self {
            interner,
            initial,
            goal,
            rules,
        })
    }

    /// Starts building a problem from fact tokens.
    #[must_use]
    pub fn builder() -> ProblemBuilder {
        ProblemBuilder::new()
    }

    /// Returns the interner for this problem's facts.
    #[must_use]
    pub fn interner(&self) -> &FactInterner {
        &self.interner
    }

    /// Returns the initial state.
    #[must_use]
    pub fn initial(&self) -> &FactSet {
        &self.initial
    }

    /// Returns the goal facts.
    #[must_use]
    pub fn goal(&self) -> &FactSet {
        &self.goal
    }

    /// Returns the rule library in declaration order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the rule at `index`, if any.
    #[must_use]
    pub fn rule(&self, index: usize) -> Option<&Rule> {
        self.rules.get(index)
    }

    /// Returns true if `state` contains every goal fact.
    #[must_use]
    pub fn is_goal(&self, state: &FactSet) -> bool {
        self.goal.is_subset_of(state)
    }
}

/// Builder that interns fact tokens while assembling a [`Problem`].
///
/// The parser and tests both go through this builder so that validation
/// lives in exactly one place.
#[derive(Debug, Default)]
pub struct ProblemBuilder {
    interner: FactInterner,
    initial: FactSet,
    goal: FactSet,
    rules: Vec<Rule>,
    /// First validation failure, surfaced by `build`.
    deferred: Option<Error>,
}

impl ProblemBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial state from fact tokens.
    #[must_use]
    pub fn initial<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.initial = self.intern_all(facts);
        self
    }

    /// Sets the goal facts from tokens.
    #[must_use]
    pub fn goal<I, S>(mut self, facts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.goal = self.intern_all(facts);
        self
    }

    /// Appends a rule with the default priority.
    #[must_use]
    pub fn rule<I1, I2, I3, S1, S2, S3>(
        self,
        name: impl Into<String>,
        preconditions: I1,
        adds: I2,
        deletes: I3,
    ) -> Self
    where
        I1: IntoIterator<Item = S1>,
        I2: IntoIterator<Item = S2>,
        I3: IntoIterator<Item = S3>,
        S1: AsRef<str>,
        S2: AsRef<str>,
        S3: AsRef<str>,
    {
        self.rule_with_priority(name, preconditions, adds, deletes, crate::rule::DEFAULT_PRIORITY)
    }

    /// Appends a rule with an explicit priority weight.
    #[must_use]
    pub fn rule_with_priority<I1, I2, I3, S1, S2, S3>(
        mut self,
        name: impl Into<String>,
        preconditions: I1,
        adds: I2,
        deletes: I3,
        priority: u32,
    ) -> Self
    where
        I1: IntoIterator<Item = S1>,
        I2: IntoIterator<Item = S2>,
        I3: IntoIterator<Item = S3>,
        S1: AsRef<str>,
        S2: AsRef<str>,
        S3: AsRef<str>,
    {
        let preconditions = self.intern_all(preconditions);
        let adds = self.intern_all(adds);
        let deletes = self.intern_all(deletes);
        self.rules
            .push(Rule::new(name, preconditions, adds, deletes).with_priority(priority));
        self
    }

    /// Validates and assembles the problem.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure: an empty fact token, an
    /// empty rule list, an unnamed rule, or an invalid priority.
    pub fn build(self) -> crate::Result<Problem> {
        if let Some(err) = self.deferred {
            return Err(err);
        }
        Problem::new(self.interner, self.initial, self.goal, self.rules)
    }

    fn intern_all<I, S>(&mut self, tokens: I) -> FactSet
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FactSet::new();
        for token in tokens {
            let token = token.as_ref().trim();
            if token.is_empty() {
                if self.deferred.is_none() {
                    self.deferred = Some(Error::empty_fact());
                }
                continue;
            }
            set = set.insert(self.interner.intern(token));
        }
        set
    }
}
