//! Switchcase - value dispatch over declarative patterns.
//!
//! This crate selects one of several pre-declared results by comparing a
//! search key against a pattern. It generalizes `switch` in two directions:
//! - Literal dispatch: a keyed table from string/number keys to results
//!   (`LiteralPattern`, `match_literal`)
//! - Conditional dispatch: an ordered list of `(predicate, result)` branches,
//!   first accepting predicate wins (`ConditionalPattern`, `match_conditional`)
//!
//! `match_pattern` routes a `Pattern` to either form, and `lazy_match` binds
//! a pattern into a reusable selector.
//!
//! # Catch-all
//!
//! The default branch is tagged with [`CATCHALL`], which cannot collide with
//! any data key. Literal tables also accept the legacy string key `"_"`
//! unless built with [`LiteralPattern::strict`]. A catch-all must be the
//! last branch; this is checked when a dispatch reaches it, or eagerly
//! through `validate()`.
//!
//! # Dynamic Values
//!
//! [`Value`] and [`match_value`] cover patterns assembled at runtime, where
//! branches, selectors and predicate results are not known to be well formed.
//!
//! ```
//! use switchcase::{match_pattern, ConditionalPattern, Pattern, CATCHALL};
//!
//! let grade: Pattern<'_, u32, &str> = ConditionalPattern::new()
//!     .when(|score: &u32| *score >= 90, "A")
//!     .when(|score: &u32| *score >= 80, "B")
//!     .branch(CATCHALL, "C")
//!     .into();
//! assert_eq!(match_pattern(&85, &grade), Ok(&"B"));
//! ```

mod conditional;
mod dynamic;
mod errors;
mod key;
mod literal;
mod pattern;
mod sentinel;
mod value;

pub use conditional::{match_conditional, ConditionalPattern, Predicate, Selector};
pub use dynamic::{lazy_match_value, match_value, match_value_conditional, validate_value};
pub use errors::{MatchError, MatchErrorKind, MatchResult, UsageError};
pub use key::{Key, SearchKey};
pub use literal::{match_literal, LiteralKey, LiteralPattern, UNDERSCORE};
pub use pattern::{lazy_match, match_pattern, Matcher, Pattern};
pub use sentinel::{CatchAll, CATCHALL};
pub use value::{FunctionValue, Value, ValueFn};

#[cfg(feature = "init-tracing")]
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Only installs a subscriber when `RUST_LOG`
/// is set, e.g. `RUST_LOG=switchcase=trace`.
#[cfg(feature = "init-tracing")]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
