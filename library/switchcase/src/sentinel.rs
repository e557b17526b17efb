//! The catch-all sentinel.
//!
//! A pattern's default branch is tagged with [`CATCHALL`] rather than a magic
//! string, so it can never collide with a data key such as `"_"`. `CatchAll`
//! is its own type: no string, number or predicate can ever be equal to it.

use std::fmt;

/// Marker for the default branch of a pattern.
///
/// Zero-sized and stateless. Two `CatchAll` values are always equal, and
/// nothing of any other type is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CatchAll;

impl CatchAll {
    /// Human-readable tag, used only in diagnostics.
    pub const TAG: &'static str = "last";

    pub const fn tag(self) -> &'static str {
        Self::TAG
    }
}

impl fmt::Display for CatchAll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", Self::TAG)
    }
}

/// The catch-all sentinel, usable in literal and conditional patterns alike.
pub const CATCHALL: CatchAll = CatchAll;
