//! Conditional dispatch over an ordered list of predicates.
//!
//! A `ConditionalPattern` is a sequence of `(selector, result)` branches.
//! Branches are tried top to bottom; the first predicate that accepts the
//! search key wins. A catch-all selector must be the last branch, and is
//! only checked for placement when the scan actually reaches it.

use std::fmt;

use tracing::trace;

use crate::errors::{catchall_misplaced, no_match, MatchResult};
use crate::sentinel::CatchAll;

/// Predicate over a search key.
pub type Predicate<'a, K> = Box<dyn Fn(&K) -> bool + 'a>;

/// Left-hand side of a conditional branch.
pub enum Selector<'a, K> {
    Predicate(Predicate<'a, K>),
    CatchAll,
}

impl<'a, K> Selector<'a, K> {
    pub fn predicate(f: impl Fn(&K) -> bool + 'a) -> Self {
        Selector::Predicate(Box::new(f))
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Selector::CatchAll)
    }
}

impl<K> From<CatchAll> for Selector<'_, K> {
    fn from(_: CatchAll) -> Self {
        Selector::CatchAll
    }
}

impl<K> fmt::Debug for Selector<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Predicate(_) => f.write_str("Predicate(<fn>)"),
            Selector::CatchAll => f.write_str("CatchAll"),
        }
    }
}

/// Ordered list of `(selector, result)` branches.
pub struct ConditionalPattern<'a, K, R> {
    branches: Vec<(Selector<'a, K>, R)>,
}

impl<'a, K, R> ConditionalPattern<'a, K, R> {
    pub fn new() -> Self {
        ConditionalPattern {
            branches: Vec::new(),
        }
    }

    /// Append a branch guarded by `predicate`.
    #[must_use]
    pub fn when(self, predicate: impl Fn(&K) -> bool + 'a, result: R) -> Self {
        self.branch(Selector::predicate(predicate), result)
    }

    /// Append a catch-all branch.
    #[must_use]
    pub fn catch_all(self, result: R) -> Self {
        self.branch(Selector::CatchAll, result)
    }

    /// Append a branch with an explicit selector.
    ///
    /// No placement check happens here; a catch-all followed by further
    /// branches is only rejected when a dispatch reaches it.
    #[must_use]
    pub fn branch(mut self, selector: impl Into<Selector<'a, K>>, result: R) -> Self {
        self.push(selector, result);
        self
    }

    pub fn push(&mut self, selector: impl Into<Selector<'a, K>>, result: R) {
        self.branches.push((selector.into(), result));
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }

    pub fn results(&self) -> impl Iterator<Item = &R> {
        self.branches.iter().map(|(_, result)| result)
    }

    /// Check the catch-all placement without dispatching.
    pub fn validate(&self) -> MatchResult<()> {
        let last_index = self.branches.len().saturating_sub(1);
        match self.branches.iter().position(|(s, _)| s.is_catch_all()) {
            Some(index) if index != last_index => Err(catchall_misplaced(index, last_index)),
            _ => Ok(()),
        }
    }
}

impl<K, R> Default for ConditionalPattern<'_, K, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, R: fmt::Debug> fmt::Debug for ConditionalPattern<'_, K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.branches.iter()).finish()
    }
}

impl<'a, K, R> FromIterator<(Selector<'a, K>, R)> for ConditionalPattern<'a, K, R> {
    fn from_iter<I: IntoIterator<Item = (Selector<'a, K>, R)>>(iter: I) -> Self {
        ConditionalPattern {
            branches: iter.into_iter().collect(),
        }
    }
}

/// Select the result of the first branch whose predicate accepts `key`.
///
/// Predicates run in declaration order and the scan stops at the first
/// `true`. Panics raised by a predicate propagate to the caller.
///
/// The predicates place no bound on `K`. `Debug` is required only to render
/// the key in the `NoMatch` error when no branch accepts it.
pub fn match_conditional<'p, K, R>(
    key: &K,
    pattern: &'p ConditionalPattern<'_, K, R>,
) -> MatchResult<&'p R>
where
    K: fmt::Debug,
{
    let last_index = pattern.branches.len().saturating_sub(1);

    for (index, (selector, result)) in pattern.branches.iter().enumerate() {
        match selector {
            Selector::CatchAll => {
                if index != last_index {
                    return Err(catchall_misplaced(index, last_index));
                }
                trace!(index, "conditional catch-all taken");
                return Ok(result);
            }
            Selector::Predicate(accepts) => {
                if accepts(key) {
                    trace!(index, "conditional branch accepted");
                    return Ok(result);
                }
            }
        }
    }

    Err(no_match(format!("{key:?}")))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
