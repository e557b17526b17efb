//! Dynamically typed values.
//!
//! `Value` lets callers assemble patterns at runtime, where the typed
//! builders cannot be used: branch lists are plain lists, selectors are
//! plain values, and predicates return a `Value` rather than a `bool`.
//! That is also where the shape and predicate checks of conditional
//! dispatch have something to reject.
//!
//! # Thread Safety
//!
//! Heap variants share their payload through `Arc`, and functions must be
//! `Send + Sync`, so a `Value` can be shared across threads.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::key::{canonical_number, SearchKey};
use crate::literal::{LiteralKey, LiteralPattern};
use crate::sentinel::CatchAll;

/// Signature of a function stored in a `Value`.
pub type ValueFn = dyn Fn(&Value) -> Value + Send + Sync;

/// A named unary function value.
///
/// Equality is identity: two function values are equal only if they share
/// the same allocation.
#[derive(Clone)]
pub struct FunctionValue {
    name: Arc<str>,
    func: Arc<ValueFn>,
}

impl FunctionValue {
    pub fn new(name: &str, func: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        FunctionValue {
            name: Arc::from(name),
            func: Arc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&self, arg: &Value) -> Value {
        (self.func)(arg)
    }
}

impl PartialEq for FunctionValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FunctionValue({})", self.name)
    }
}

/// Runtime value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    /// Ordered sequence. A list of pairs is a conditional pattern.
    List(Arc<Vec<Value>>),
    /// Keyed table. Doubles as a record and as a literal pattern.
    Map(Arc<LiteralPattern<Value>>),
    Func(FunctionValue),
    /// The catch-all sentinel.
    CatchAll,
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Arc::new(items))
    }

    /// A two-element list: one conditional branch.
    pub fn pair(selector: impl Into<Value>, result: impl Into<Value>) -> Self {
        Value::list(vec![selector.into(), result.into()])
    }

    pub fn map(table: LiteralPattern<Value>) -> Self {
        Value::Map(Arc::new(table))
    }

    /// A map with string keys, in the given order.
    pub fn record<'k>(fields: impl IntoIterator<Item = (&'k str, Value)>) -> Self {
        Value::map(fields.into_iter().collect())
    }

    pub fn func(name: &str, func: impl Fn(&Value) -> Value + Send + Sync + 'static) -> Self {
        Value::Func(FunctionValue::new(name, func))
    }

    /// A function returning `Bool`, for use as a branch selector.
    pub fn predicate(name: &str, pred: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Value::func(name, move |v| Value::Bool(pred(v)))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Func(_) => "function",
            Value::CatchAll => "catch-all",
        }
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Value::CatchAll)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of `Int` and `Float`.
    #[allow(
        clippy::cast_precision_loss,
        reason = "numbers compare as doubles, as in the key rendering"
    )]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&LiteralPattern<Value>> {
        match self {
            Value::Map(table) => Some(table.as_ref()),
            _ => None,
        }
    }

    /// Field of a record. `None` for missing fields and non-maps.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.as_map().and_then(|table| table.get(name))
    }
}

impl PartialEq for Value {
    #[allow(
        clippy::float_cmp,
        reason = "value equality is exact numeric equality"
    )]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) | (Value::CatchAll, Value::CatchAll) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_number() == other.as_number()
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => a == b,
            _ => false,
        }
    }
}

impl SearchKey for Value {
    fn canonical_key(&self) -> Cow<'_, str> {
        match self {
            Value::Str(s) => Cow::Borrowed(s.as_ref()),
            Value::Int(n) => Cow::Owned(n.to_string()),
            Value::Float(n) => Cow::Owned(canonical_number(*n)),
            Value::Bool(b) => b.canonical_key(),
            Value::Null => Cow::Borrowed("null"),
            other => Cow::Owned(other.to_string()),
        }
    }
}

/// JSON-like rendering, used in diagnostics.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => f.write_str(&canonical_number(*n)),
            Value::Str(s) => write!(f, "{:?}", &**s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(table) => {
                f.write_str("{")?;
                for (i, (key, value)) in table.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    match key {
                        LiteralKey::Value(key) => write!(f, "{:?}:{value}", key.canonical())?,
                        LiteralKey::CatchAll => write!(f, "{}:{value}", CatchAll)?,
                    }
                }
                f.write_str("}")
            }
            Value::Func(func) => write!(f, "<fn {}>", func.name()),
            Value::CatchAll => write!(f, "{}", CatchAll),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl From<CatchAll> for Value {
    fn from(_: CatchAll) -> Self {
        Value::CatchAll
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::list(items)
    }
}

impl From<LiteralPattern<Value>> for Value {
    fn from(table: LiteralPattern<Value>) -> Self {
        Value::map(table)
    }
}

impl From<FunctionValue> for Value {
    fn from(func: FunctionValue) -> Self {
        Value::Func(func)
    }
}

#[cfg(test)]
mod tests;
