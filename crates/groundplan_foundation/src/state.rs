//! Persistent fact sets.
//!
//! A [`FactSet`] is the state representation: an unordered collection of
//! interned facts with set-equality semantics. It is a thin wrapper around
//! the `im` crate's ordered persistent set, so cloning is O(1) and every
//! modification returns a new set sharing structure with the original.
//! That purity is what makes rule application, deduplication, and
//! backtracking sound: no node's state is ever mutated in place.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::intern::{FactId, FactInterner};

/// A persistent set of facts.
///
/// Two fact sets are equal iff they contain exactly the same facts.
/// Iteration order is ascending by [`FactId`], i.e. first-interned first,
/// which keeps output deterministic.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FactSet(im::OrdSet<FactId>);

impl FactSet {
    /// Creates an empty fact set.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdSet::new())
    }

    /// Returns the number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no facts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the fact is present.
    #[must_use]
    pub fn contains(&self, fact: FactId) -> bool {
        self.0.contains(&fact)
    }

    /// Returns a new set with the fact added.
    ///
    /// Adding a fact that is already present yields an equal set.
    #[must_use]
    pub fn insert(&self, fact: FactId) -> Self {
        let mut new = self.0.clone();
        new.insert(fact);
        Self(new)
    }

    /// Returns a new set with the fact removed.
    ///
    /// Removing an absent fact yields an equal set.
    #[must_use]
    pub fn remove(&self, fact: FactId) -> Self {
        let mut new = self.0.clone();
        new.remove(&fact);
        Self(new)
    }

    /// Returns a new set holding every fact of `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut new = self.0.clone();
        for fact in other.iter() {
            new.insert(fact);
        }
        Self(new)
    }

    /// Returns a new set holding the facts of `self` not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut new = self.0.clone();
        for fact in other.iter() {
            new.remove(&fact);
        }
        Self(new)
    }

    /// Returns true if every fact of `self` is present in `other`.
    ///
    /// Linear scans are fine at the fact counts this engine works with.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.iter().all(|fact| other.contains(fact))
    }

    /// Counts the facts present in both sets.
    #[must_use]
    pub fn count_common(&self, other: &Self) -> usize {
        self.iter().filter(|fact| other.contains(*fact)).count()
    }

    /// Returns an iterator over the facts in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = FactId> + '_ {
        self.0.iter().copied()
    }

    /// Resolves the facts to their tokens, in iteration order.
    ///
    /// Facts missing from the interner are skipped; that only happens if
    /// the set and interner come from different problems.
    #[must_use]
    pub fn names<'a>(&self, interner: &'a FactInterner) -> Vec<&'a str> {
        self.iter().filter_map(|fact| interner.resolve(fact)).collect()
    }
}

impl fmt::Debug for FactSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Hash for FactSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for fact in self.iter() {
            fact.hash(state);
        }
    }
}

impl FromIterator<FactId> for FactSet {
    fn from_iter<I: IntoIterator<Item = FactId>>(iter: I) -> Self {
        Self(im::OrdSet::from_iter(iter))
    }
}
