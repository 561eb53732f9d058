//! Fact interning.
//!
//! Facts are opaque ground tokens with byte-wise equality. Interning maps
//! each distinct token to a small integer id so that set membership and
//! state comparison work on ids instead of repeated string compares.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interned fact identifier.
///
/// Ids are assigned densely in first-interned order, which also gives
/// fact sets a deterministic iteration order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactId(pub(crate) u32);

impl FactId {
    /// Returns the raw index of this fact.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for FactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FactId({})", self.0)
    }
}

/// Interner for fact tokens.
///
/// Maps strings to unique [`FactId`]s and back. It is not thread-safe;
/// a [`crate::Problem`] owns its interner for the duration of a search.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FactInterner {
    /// Fact token storage, indexed by `FactId`.
    facts: Vec<Arc<str>>,
    /// Map from token to id.
    fact_map: HashMap<Arc<str>, FactId>,
}

impl FactInterner {
    /// Creates a new empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a fact token, returning its [`FactId`].
    ///
    /// The token is used as-is: comparison is exact, case-sensitive, and
    /// byte-wise. Callers are expected to trim whitespace beforehand.
    ///
    /// # Panics
    ///
    /// Panics if the number of interned facts exceeds `u32::MAX`.
    pub fn intern(&mut self, token: &str) -> FactId {
        if let Some(&id) = self.fact_map.get(token) {
            return id;
        }

        let idx = u32::try_from(self.facts.len()).expect("too many interned facts");
        let arc: Arc<str> = token.into();
        self.facts.push(arc.clone());

        let id = FactId(idx);
        self.fact_map.insert(arc, id);
        id
    }

    /// Looks up an already-interned token without interning it.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<FactId> {
        self.fact_map.get(token).copied()
    }

    /// Gets the token for a fact id.
    #[must_use]
    pub fn resolve(&self, id: FactId) -> Option<&str> {
        self.facts.get(id.0 as usize).map(AsRef::as_ref)
    }

    /// Returns the number of interned facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    /// Returns true if no facts have been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}
