//! Literal search keys and their canonical string form.
//!
//! Literal dispatch compares keys as strings: the search key is rendered to
//! its canonical string and looked up among the pattern's keys, so `1` and
//! `"1"` select the same case. Numbers are rendered the way ECMAScript's
//! `Number::toString` does (`1.0` is `"1"`, `-0.0` is `"0"`, large and tiny
//! magnitudes use exponent notation). Integer keys are rendered exactly,
//! without passing through `f64`.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A value that can be looked up in a literal pattern.
///
/// Implementors only need to say how they stringify.
pub trait SearchKey {
    /// The canonical string used for comparison against literal keys.
    fn canonical_key(&self) -> Cow<'_, str>;
}

impl SearchKey for str {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SearchKey for String {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl SearchKey for char {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl SearchKey for bool {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl SearchKey for f64 {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Owned(canonical_number(*self))
    }
}

impl SearchKey for f32 {
    fn canonical_key(&self) -> Cow<'_, str> {
        Cow::Owned(canonical_number(f64::from(*self)))
    }
}

// Integers render as exact decimals. Values past 2^53 therefore stay
// distinct instead of rounding to the nearest double.
macro_rules! integer_search_key {
    ($($ty:ty),*) => {
        $(
            impl SearchKey for $ty {
                fn canonical_key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

integer_search_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: SearchKey + ?Sized> SearchKey for &T {
    fn canonical_key(&self) -> Cow<'_, str> {
        (**self).canonical_key()
    }
}

/// A literal key: a string or a number.
///
/// Equality and hashing go through [`Key::canonical`], so `Key::Int(1)`,
/// `Key::Float(1.0)` and `Key::Str("1")` are the same key.
#[derive(Clone, Debug)]
pub enum Key {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Key {
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Key::Str(s) => Cow::Borrowed(s.as_str()),
            Key::Int(n) => Cow::Owned(n.to_string()),
            Key::Float(n) => Cow::Owned(canonical_number(*n)),
        }
    }
}

impl SearchKey for Key {
    fn canonical_key(&self) -> Cow<'_, str> {
        self.canonical()
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for Key {}

impl Hash for Key {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_owned())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::Str(s.clone())
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Str(c.to_string())
    }
}

impl From<f64> for Key {
    fn from(n: f64) -> Self {
        Key::Float(n)
    }
}

impl From<f32> for Key {
    fn from(n: f32) -> Self {
        Key::Float(f64::from(n))
    }
}

macro_rules! integer_key {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Key {
                fn from(n: $ty) -> Self {
                    Key::Int(i64::from(n))
                }
            }
        )*
    };
}

integer_key!(i8, i16, i32, i64, u8, u16, u32);

/// Render a number the way ECMAScript's `Number::toString` does.
///
/// Rust's `Display` for `f64` already prints the shortest round-trip digits
/// without an exponent; only the special values and the exponent ranges
/// (`>= 1e21` and `< 1e-6`) need adjusting.
pub(crate) fn canonical_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        let rendered = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return rendered.to_owned();
    }
    // Covers -0.0 as well.
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let rendered = format!("{value:e}");
        return match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        };
    }
    value.to_string()
}
