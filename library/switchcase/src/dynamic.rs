//! Dispatch over dynamically typed patterns.
//!
//! A `Value::List` of branches is a conditional pattern and a `Value::Map`
//! is a literal table. Since nothing about a `Value` is known up front, the
//! conditional scan checks every branch it reaches: each must be a
//! two-element list whose selector is a function or the catch-all.

use tracing::trace;

use crate::errors::{
    catchall_misplaced, invalid_branch_shape, invalid_predicate, no_match, not_a_pattern,
    MatchResult,
};
use crate::literal::match_literal;
use crate::value::Value;

/// Select the result for `key`, delegating on the pattern's shape.
///
/// A list is scanned as conditional branches, a map is looked up as a
/// literal table. Any other value is rejected with `NotAPattern`.
pub fn match_value<'p>(key: &Value, pattern: &'p Value) -> MatchResult<&'p Value> {
    match pattern {
        Value::List(branches) => scan_branches(key, branches),
        Value::Map(table) => match_literal(key, table.as_ref()),
        other => Err(not_a_pattern(other)),
    }
}

/// Conditional dispatch only: the pattern must be a branch list.
pub fn match_value_conditional<'p>(key: &Value, pattern: &'p Value) -> MatchResult<&'p Value> {
    match pattern {
        Value::List(branches) => scan_branches(key, branches),
        other => Err(not_a_pattern(other)),
    }
}

/// Bind a dynamic pattern and return a reusable selector.
pub fn lazy_match_value<'p>(pattern: &'p Value) -> impl Fn(&Value) -> MatchResult<&'p Value> + 'p {
    move |key: &Value| match_value(key, pattern)
}

/// Check a dynamic pattern eagerly.
///
/// Reports the first error a scan could raise, whatever the key: a
/// malformed branch or misplaced catch-all anywhere in a branch list, or a
/// misplaced catch-all in a table.
pub fn validate_value(pattern: &Value) -> MatchResult<()> {
    match pattern {
        Value::List(branches) => {
            let last_index = branches.len().saturating_sub(1);
            for (index, branch) in branches.iter().enumerate() {
                let (selector, _) = split_branch(index, branch)?;
                match selector {
                    Value::CatchAll if index != last_index => {
                        return Err(catchall_misplaced(index, last_index));
                    }
                    Value::CatchAll | Value::Func(_) => {}
                    other => return Err(invalid_predicate(index, other)),
                }
            }
            Ok(())
        }
        Value::Map(table) => table.validate(),
        other => Err(not_a_pattern(other)),
    }
}

fn split_branch(index: usize, branch: &Value) -> MatchResult<(&Value, &Value)> {
    match branch.as_list() {
        Some([selector, result]) => Ok((selector, result)),
        _ => Err(invalid_branch_shape(index, branch)),
    }
}

/// Scan branches top to bottom. Only a strict `Bool(true)` from a
/// predicate selects its branch; other truthy values do not.
fn scan_branches<'p>(key: &Value, branches: &'p [Value]) -> MatchResult<&'p Value> {
    let last_index = branches.len().saturating_sub(1);

    for (index, branch) in branches.iter().enumerate() {
        let (selector, result) = split_branch(index, branch)?;
        match selector {
            Value::CatchAll => {
                if index != last_index {
                    return Err(catchall_misplaced(index, last_index));
                }
                trace!(index, "dynamic catch-all taken");
                return Ok(result);
            }
            Value::Func(func) => {
                if matches!(func.call(key), Value::Bool(true)) {
                    trace!(index, predicate = func.name(), "dynamic branch accepted");
                    return Ok(result);
                }
            }
            other => return Err(invalid_predicate(index, other)),
        }
    }

    Err(no_match(key.to_string()))
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
