//! Shape-dispatching entry points.
//!
//! `Pattern` is the tagged union of the two pattern shapes. `match_pattern`
//! routes on the tag alone, without looking at the branches, and
//! `lazy_match` binds a pattern for later use. Both accept anything that
//! implements `Matcher`, so a bare `ConditionalPattern` over a key with no
//! string form dispatches the same way.

use std::fmt;

use crate::conditional::{match_conditional, ConditionalPattern};
use crate::errors::MatchResult;
use crate::key::SearchKey;
use crate::literal::{match_literal, LiteralPattern};

/// A literal table or a conditional branch list.
pub enum Pattern<'a, K, R> {
    Literal(LiteralPattern<R>),
    Conditional(ConditionalPattern<'a, K, R>),
}

impl<K, R> Pattern<'_, K, R> {
    pub fn is_literal(&self) -> bool {
        matches!(self, Pattern::Literal(_))
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, Pattern::Conditional(_))
    }

    pub fn len(&self) -> usize {
        match self {
            Pattern::Literal(table) => table.len(),
            Pattern::Conditional(branches) => branches.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check the catch-all placement without dispatching.
    pub fn validate(&self) -> MatchResult<()> {
        match self {
            Pattern::Literal(table) => table.validate(),
            Pattern::Conditional(branches) => branches.validate(),
        }
    }
}

impl<K, R> From<LiteralPattern<R>> for Pattern<'_, K, R> {
    fn from(table: LiteralPattern<R>) -> Self {
        Pattern::Literal(table)
    }
}

impl<'a, K, R> From<ConditionalPattern<'a, K, R>> for Pattern<'a, K, R> {
    fn from(branches: ConditionalPattern<'a, K, R>) -> Self {
        Pattern::Conditional(branches)
    }
}

impl<K, R: fmt::Debug> fmt::Debug for Pattern<'_, K, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(table) => f.debug_tuple("Literal").field(table).finish(),
            Pattern::Conditional(branches) => {
                f.debug_tuple("Conditional").field(branches).finish()
            }
        }
    }
}

/// A pattern that can select a result for a search key of type `K`.
///
/// Literal tables need `K: SearchKey` to stringify the key; branch lists
/// accept any key their predicates take. `Pattern` dispatches to whichever
/// shape it holds.
pub trait Matcher<K: ?Sized, R> {
    fn select<'p>(&'p self, key: &K) -> MatchResult<&'p R>;
}

impl<K, R> Matcher<K, R> for LiteralPattern<R>
where
    K: SearchKey + ?Sized,
{
    fn select<'p>(&'p self, key: &K) -> MatchResult<&'p R> {
        match_literal(key, self)
    }
}

impl<K: fmt::Debug, R> Matcher<K, R> for ConditionalPattern<'_, K, R> {
    fn select<'p>(&'p self, key: &K) -> MatchResult<&'p R> {
        match_conditional(key, self)
    }
}

impl<K, R> Matcher<K, R> for Pattern<'_, K, R>
where
    K: SearchKey + fmt::Debug,
{
    fn select<'p>(&'p self, key: &K) -> MatchResult<&'p R> {
        match self {
            Pattern::Literal(table) => match_literal(key, table),
            Pattern::Conditional(branches) => match_conditional(key, branches),
        }
    }
}

/// Select the result for `key`, delegating on the pattern's shape.
///
/// Literal tables compare the stringified key; branch lists run their
/// predicates in order. A `ConditionalPattern` may be passed directly when
/// the key type has no string form:
///
/// ```
/// use switchcase::{match_pattern, ConditionalPattern, CATCHALL};
///
/// #[derive(Debug)]
/// struct Point(i32, i32);
///
/// let quadrant = ConditionalPattern::new()
///     .when(|p: &Point| p.0 >= 0 && p.1 >= 0, "first")
///     .branch(CATCHALL, "elsewhere");
/// assert_eq!(match_pattern(&Point(1, 2), &quadrant), Ok(&"first"));
/// ```
pub fn match_pattern<'p, K, R, P>(key: &K, pattern: &'p P) -> MatchResult<&'p R>
where
    K: ?Sized,
    P: Matcher<K, R>,
{
    pattern.select(key)
}

/// Bind `pattern` and return a reusable selector.
///
/// `lazy_match(&p)(k)` behaves exactly like `match_pattern(&k, &p)`. The
/// pattern is borrowed, not copied, so it fits `Iterator::map`:
///
/// ```
/// use switchcase::{lazy_match, LiteralPattern, Pattern, CATCHALL};
///
/// let sizes: Pattern<'_, &str, u32> = LiteralPattern::new()
///     .case("h1", 20)
///     .case("h2", 18)
///     .case(CATCHALL, 13)
///     .into();
/// let picked: Result<Vec<_>, _> = ["h1", "h2", "x"].into_iter().map(lazy_match(&sizes)).collect();
/// assert_eq!(picked.unwrap(), vec![&20, &18, &13]);
/// ```
pub fn lazy_match<'p, K, R, P>(pattern: &'p P) -> impl Fn(K) -> MatchResult<&'p R> + 'p
where
    K: 'p,
    R: 'p,
    P: Matcher<K, R>,
{
    move |key: K| pattern.select(&key)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
