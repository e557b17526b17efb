//! Literal dispatch over a keyed table.
//!
//! A `LiteralPattern` maps string/number keys to results, optionally with a
//! catch-all entry. Entries keep their insertion order, and that order is
//! what the catch-all placement rule is checked against.
//!
//! # Scan Semantics
//!
//! Dispatch behaves like a find-first scan over the entries: the first entry
//! whose key equals the stringified search key wins, and a catch-all reached
//! before any such entry is taken (or rejected, if it is not the last
//! entry). Because keys are unique, the scan is answered from a hash index
//! instead of walking the table.

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::errors::{catchall_misplaced, no_match, MatchResult};
use crate::key::{Key, SearchKey};
use crate::sentinel::CatchAll;

/// Legacy string spelling of the catch-all key.
pub const UNDERSCORE: &str = "_";

/// Key of a literal pattern entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKey {
    Value(Key),
    CatchAll,
}

impl LiteralKey {
    pub fn is_catch_all(&self) -> bool {
        matches!(self, LiteralKey::CatchAll)
    }

    pub fn as_key(&self) -> Option<&Key> {
        match self {
            LiteralKey::Value(key) => Some(key),
            LiteralKey::CatchAll => None,
        }
    }
}

impl From<CatchAll> for LiteralKey {
    fn from(_: CatchAll) -> Self {
        LiteralKey::CatchAll
    }
}

impl From<Key> for LiteralKey {
    fn from(key: Key) -> Self {
        LiteralKey::Value(key)
    }
}

macro_rules! literal_key_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for LiteralKey {
                fn from(key: $ty) -> Self {
                    LiteralKey::Value(Key::from(key))
                }
            }
        )*
    };
}

literal_key_from!(&str, String, &String, char, f32, f64, i8, i16, i32, i64, u8, u16, u32);

/// Keyed table of results.
///
/// Keys are unique after stringification: inserting `1` into a table that
/// already holds `"1"` replaces that entry's result in place.
#[derive(Clone, Debug, PartialEq)]
pub struct LiteralPattern<R> {
    entries: Vec<(LiteralKey, R)>,
    /// Canonical key to entry position, for every non-sentinel entry.
    index: FxHashMap<String, usize>,
    /// Position of the sentinel entry.
    catch_all: Option<usize>,
    underscore_catch_all: bool,
}

impl<R> LiteralPattern<R> {
    /// Create an empty table. The legacy `"_"` catch-all is honored.
    pub fn new() -> Self {
        LiteralPattern {
            entries: Vec::new(),
            index: FxHashMap::default(),
            catch_all: None,
            underscore_catch_all: true,
        }
    }

    /// Create an empty table where `"_"` is an ordinary key.
    pub fn strict() -> Self {
        Self::new().underscore_catch_all(false)
    }

    /// Whether the string key `"_"` also acts as a catch-all.
    #[must_use]
    pub fn underscore_catch_all(mut self, enabled: bool) -> Self {
        self.underscore_catch_all = enabled;
        self
    }

    pub fn honors_underscore(&self) -> bool {
        self.underscore_catch_all
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn case(mut self, key: impl Into<LiteralKey>, result: R) -> Self {
        self.insert(key, result);
        self
    }

    /// Add a catch-all entry. Shorthand for `case(CATCHALL, result)`.
    #[must_use]
    pub fn otherwise(self, result: R) -> Self {
        self.case(CatchAll, result)
    }

    /// Insert an entry, returning the result it replaced.
    ///
    /// A replaced entry keeps its original position and key.
    pub fn insert(&mut self, key: impl Into<LiteralKey>, result: R) -> Option<R> {
        let key = key.into();
        let existing = match &key {
            LiteralKey::Value(k) => self.index.get(k.canonical().as_ref()).copied(),
            LiteralKey::CatchAll => self.catch_all,
        };
        if let Some(position) = existing {
            if let Some(entry) = self.entries.get_mut(position) {
                return Some(std::mem::replace(&mut entry.1, result));
            }
        }

        let position = self.entries.len();
        match &key {
            LiteralKey::Value(k) => {
                self.index.insert(k.canonical().into_owned(), position);
            }
            LiteralKey::CatchAll => self.catch_all = Some(position),
        }
        self.entries.push((key, result));
        None
    }

    /// Look up the entry stored under `key`, without catch-all fallback.
    pub fn get<K: SearchKey + ?Sized>(&self, key: &K) -> Option<&R> {
        let position = self.index.get(key.canonical_key().as_ref())?;
        self.entries.get(*position).map(|(_, result)| result)
    }

    /// The sentinel entry's result, if any.
    pub fn catch_all(&self) -> Option<&R> {
        self.catch_all
            .and_then(|position| self.entries.get(position))
            .map(|(_, result)| result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&LiteralKey, &R)> {
        self.entries.iter().map(|(key, result)| (key, result))
    }

    pub fn keys(&self) -> impl Iterator<Item = &LiteralKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Check the catch-all placement without dispatching.
    ///
    /// Reports the error a scan would raise on reaching the first catch-all
    /// marker. Dispatch never calls this: a table with a misplaced catch-all
    /// still answers keys that appear before it.
    pub fn validate(&self) -> MatchResult<()> {
        match self.first_catch_all() {
            Some(position) if position != self.last_index() => {
                Err(catchall_misplaced(position, self.last_index()))
            }
            _ => Ok(()),
        }
    }

    fn last_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    /// Position of the earliest catch-all marker: the sentinel, or `"_"`
    /// when the legacy spelling is honored.
    fn first_catch_all(&self) -> Option<usize> {
        let underscore = if self.underscore_catch_all {
            self.index.get(UNDERSCORE).copied()
        } else {
            None
        };
        match (self.catch_all, underscore) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn take_catch_all(&self, position: usize) -> MatchResult<&R> {
        let last_index = self.last_index();
        if position != last_index {
            return Err(catchall_misplaced(position, last_index));
        }
        trace!(position, "literal catch-all taken");
        Ok(&self.entries[position].1)
    }
}

impl<R> Default for LiteralPattern<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<LiteralKey>, R> FromIterator<(K, R)> for LiteralPattern<R> {
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut pattern = LiteralPattern::new();
        pattern.extend(iter);
        pattern
    }
}

impl<K: Into<LiteralKey>, R> Extend<(K, R)> for LiteralPattern<R> {
    fn extend<I: IntoIterator<Item = (K, R)>>(&mut self, iter: I) {
        for (key, result) in iter {
            self.insert(key, result);
        }
    }
}

/// Select the result for `key` from a literal table.
///
/// The key is stringified and compared against the table's keys in
/// insertion order. A catch-all reached first is taken if it is the last
/// entry, and rejected with `CatchallMisplaced` otherwise.
pub fn match_literal<'p, K, R>(key: &K, pattern: &'p LiteralPattern<R>) -> MatchResult<&'p R>
where
    K: SearchKey + ?Sized,
{
    let canonical = key.canonical_key();
    let hit = pattern.index.get(canonical.as_ref()).copied();

    match (hit, pattern.first_catch_all()) {
        (Some(position), Some(fallback)) if fallback < position => {
            pattern.take_catch_all(fallback)
        }
        (Some(position), _) => {
            trace!(key = %canonical, position, "literal case matched");
            Ok(&pattern.entries[position].1)
        }
        (None, Some(fallback)) => pattern.take_catch_all(fallback),
        (None, None) => Err(no_match(format!("{:?}", canonical.as_ref()))),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
