//! Error types for dispatch.
//!
//! # Error Categories
//!
//! Dispatch fails in two distinct ways, and the type keeps them apart:
//! - `MatchError::NoMatch` is a lookup failure. It depends on the search
//!   key: the same pattern may succeed for another key.
//! - `MatchError::Usage` wraps a `UsageError`, which depends on the pattern
//!   alone and points at a bug in the caller.
//!
//! Factory functions (`no_match()`, `catchall_misplaced()`, ...) are the
//! crate-internal way to raise them; each one records a `debug` event.

use std::fmt;

use thiserror::Error;

/// Result of a dispatch.
pub type MatchResult<T> = Result<T, MatchError>;

/// Dispatch failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The scan was exhausted without a matching branch or a catch-all.
    #[error("no matching case for search key {key}")]
    NoMatch {
        /// Rendering of the search key.
        key: String,
    },

    /// The pattern itself is malformed.
    #[error(transparent)]
    Usage(#[from] UsageError),
}

/// A malformed pattern, detected when the scan reaches the offending branch.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UsageError {
    /// A catch-all appears before the last branch.
    #[error("the catch-all branch (`last`) must be the final branch in the pattern")]
    CatchallMisplaced { index: usize, last_index: usize },

    /// A conditional branch is not a `(selector, result)` pair.
    #[error("invalid branch {branch}: each branch must be a (selector, result) pair")]
    InvalidBranchShape { index: usize, branch: String },

    /// A conditional branch's selector is neither a predicate nor the catch-all.
    #[error("invalid branch: the selector must be a predicate function or the catch-all")]
    InvalidPredicate { index: usize, selector: String },

    /// The pattern is neither a branch list nor a literal table.
    #[error("expected a pattern (a list of branches or a literal table), got {found}")]
    NotAPattern { found: String },
}

/// Fieldless discriminant of a [`MatchError`], for switching on the failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatchErrorKind {
    NoMatch,
    CatchallMisplaced,
    InvalidBranchShape,
    InvalidPredicate,
    NotAPattern,
}

impl MatchErrorKind {
    pub fn is_lookup_failure(self) -> bool {
        matches!(self, Self::NoMatch)
    }

    pub fn is_usage_error(self) -> bool {
        !self.is_lookup_failure()
    }
}

impl fmt::Display for MatchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoMatch => "no match",
            Self::CatchallMisplaced => "catch-all misplaced",
            Self::InvalidBranchShape => "invalid branch shape",
            Self::InvalidPredicate => "invalid predicate",
            Self::NotAPattern => "not a pattern",
        };
        f.write_str(name)
    }
}

impl UsageError {
    pub fn kind(&self) -> MatchErrorKind {
        match self {
            Self::CatchallMisplaced { .. } => MatchErrorKind::CatchallMisplaced,
            Self::InvalidBranchShape { .. } => MatchErrorKind::InvalidBranchShape,
            Self::InvalidPredicate { .. } => MatchErrorKind::InvalidPredicate,
            Self::NotAPattern { .. } => MatchErrorKind::NotAPattern,
        }
    }

    /// Index of the offending branch, if the error is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::CatchallMisplaced { index, .. }
            | Self::InvalidBranchShape { index, .. }
            | Self::InvalidPredicate { index, .. } => Some(*index),
            Self::NotAPattern { .. } => None,
        }
    }
}

impl MatchError {
    pub fn kind(&self) -> MatchErrorKind {
        match self {
            Self::NoMatch { .. } => MatchErrorKind::NoMatch,
            Self::Usage(usage) => usage.kind(),
        }
    }

    /// True for `NoMatch`: the key, not the pattern, is at fault.
    pub fn is_lookup_failure(&self) -> bool {
        self.kind().is_lookup_failure()
    }

    pub fn is_usage_error(&self) -> bool {
        self.kind().is_usage_error()
    }

    /// The rendered search key of a `NoMatch`.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::NoMatch { key } => Some(key),
            Self::Usage(_) => None,
        }
    }

    pub fn as_usage(&self) -> Option<&UsageError> {
        match self {
            Self::NoMatch { .. } => None,
            Self::Usage(usage) => Some(usage),
        }
    }
}

// Factory functions

#[cold]
pub(crate) fn no_match(key: impl Into<String>) -> MatchError {
    let err = MatchError::NoMatch { key: key.into() };
    tracing::debug!(%err, "dispatch exhausted");
    err
}

#[cold]
pub(crate) fn catchall_misplaced(index: usize, last_index: usize) -> MatchError {
    raise(UsageError::CatchallMisplaced { index, last_index })
}

#[cold]
pub(crate) fn invalid_branch_shape(index: usize, branch: &impl fmt::Display) -> MatchError {
    raise(UsageError::InvalidBranchShape {
        index,
        branch: branch.to_string(),
    })
}

#[cold]
pub(crate) fn invalid_predicate(index: usize, selector: &impl fmt::Display) -> MatchError {
    raise(UsageError::InvalidPredicate {
        index,
        selector: selector.to_string(),
    })
}

#[cold]
pub(crate) fn not_a_pattern(found: &impl fmt::Display) -> MatchError {
    raise(UsageError::NotAPattern {
        found: found.to_string(),
    })
}

fn raise(usage: UsageError) -> MatchError {
    tracing::debug!(err = %usage, index = ?usage.index(), "malformed pattern");
    MatchError::Usage(usage)
}
