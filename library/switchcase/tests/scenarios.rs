//! End-to-end dispatch scenarios through the public API.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use switchcase::{
    lazy_match, match_conditional, match_pattern, match_value, ConditionalPattern,
    LiteralPattern, MatchErrorKind, Pattern, Value, CATCHALL,
};

fn font_sizes() -> Pattern<'static, &'static str, u32> {
    LiteralPattern::new()
        .case("h1", 20)
        .case("h2", 18)
        .case("title", 16)
        .case("description", 14)
        .case(CATCHALL, 13)
        .into()
}

// -- Literal --

#[test]
fn literal_exact_and_default() {
    let pattern = font_sizes();
    assert_eq!(match_pattern(&"h1", &pattern).unwrap(), &20);
    assert_eq!(match_pattern(&"title", &pattern).unwrap(), &16);
    assert_eq!(match_pattern(&"unknown", &pattern).unwrap(), &13);
}

#[test]
fn literal_numeric_keys_with_coercion() {
    let pattern = Value::map(
        LiteralPattern::new()
            .case(1, Value::from("a"))
            .case(2, Value::from("b"))
            .case(CATCHALL, Value::from("any")),
    );
    assert_eq!(match_value(&Value::Int(1), &pattern).unwrap(), &Value::from("a"));
    assert_eq!(match_value(&Value::Int(2), &pattern).unwrap(), &Value::from("b"));
    assert_eq!(match_value(&Value::from("title"), &pattern).unwrap(), &Value::from("any"));
}

#[test]
fn literal_legacy_underscore_table() {
    let pattern: Pattern<'_, &str, u32> = LiteralPattern::new()
        .case("h1", 20)
        .case("h2", 18)
        .case("_", 13)
        .into();
    assert_eq!(match_pattern(&"h2", &pattern).unwrap(), &18);
    assert_eq!(match_pattern(&"nonexistent", &pattern).unwrap(), &13);
}

// -- Conditional --

fn greetings() -> Value {
    let is_five = Value::predicate("is_five", |v| v.as_number() == Some(5.0));
    let above_five = Value::predicate("above_five", |v| v.as_number().is_some_and(|n| n > 5.0));
    let smith = Value::predicate("smith", |v| v.field("name") == Some(&Value::from("Smith")));
    let marie = Value::predicate("marie", |v| v.field("name") == Some(&Value::from("Marie")));
    Value::list(vec![
        Value::pair(is_five, "ok"),
        Value::pair(above_five, "great"),
        Value::pair(smith, "Hello"),
        Value::pair(marie, "Bonjour"),
        Value::pair(CATCHALL, "default"),
    ])
}

#[test]
fn conditional_mixed_predicates() {
    let pattern = greetings();
    let smith = Value::record([("name", Value::from("Smith"))]);
    let john = Value::record([("name", Value::from("John"))]);
    assert_eq!(match_value(&Value::Int(5), &pattern).unwrap(), &Value::from("ok"));
    assert_eq!(match_value(&Value::Int(10), &pattern).unwrap(), &Value::from("great"));
    assert_eq!(match_value(&smith, &pattern).unwrap(), &Value::from("Hello"));
    assert_eq!(match_value(&john, &pattern).unwrap(), &Value::from("default"));
}

#[test]
fn conditional_catch_all_misplaced() {
    let pattern = Value::list(vec![
        Value::pair(Value::predicate("is_five", |v| v.as_int() == Some(5)), "5"),
        Value::pair(CATCHALL, "unknown"),
        Value::pair(Value::predicate("gt5", |v| v.as_int().is_some_and(|n| n > 5)), "greater"),
    ]);
    let err = match_value(&Value::Int(10), &pattern).unwrap_err();
    assert_eq!(err.kind(), MatchErrorKind::CatchallMisplaced);
    assert!(err.is_usage_error());
}

#[test]
fn conditional_invalid_predicate() {
    let pattern = Value::list(vec![
        Value::pair(Value::predicate("is_five", |v| v.as_int() == Some(5)), "5"),
        Value::pair(2, "greater"),
        Value::pair(CATCHALL, "unknown"),
    ]);
    let err = match_value(&Value::Int(50), &pattern).unwrap_err();
    assert_eq!(err.kind(), MatchErrorKind::InvalidPredicate);
}

#[test]
fn conditional_no_match_without_catch_all() {
    let pattern = ConditionalPattern::new()
        .when(|x: &i64| *x == 5, "5")
        .when(|x: &i64| *x > 5, "greater");
    let err = match_conditional(&1, &pattern).unwrap_err();
    assert_eq!(err.kind(), MatchErrorKind::NoMatch);
    assert!(err.is_lookup_failure());
    assert_eq!(err.to_string(), "no matching case for search key 1");
}

#[derive(Debug)]
struct Person {
    name: String,
}

impl Person {
    fn named(name: &str) -> Self {
        Person {
            name: name.to_string(),
        }
    }
}

#[test]
fn conditional_mixed_predicates_typed() {
    let pattern = ConditionalPattern::new()
        .when(|p: &Person| p.name == "Smith", "Hello")
        .when(|p: &Person| p.name == "Marie", "Bonjour")
        .catch_all("default");
    assert_eq!(match_pattern(&Person::named("Smith"), &pattern).unwrap(), &"Hello");
    assert_eq!(match_pattern(&Person::named("John"), &pattern).unwrap(), &"default");

    let greet = lazy_match(&pattern);
    assert_eq!(greet(Person::named("Marie")), match_pattern(&Person::named("Marie"), &pattern));
    assert_eq!(greet(Person::named("Marie")).unwrap(), &"Bonjour");
}

// -- Currying --

#[test]
fn curried_mapping() {
    let pattern = font_sizes();
    let sizes: Vec<u32> = ["h1", "h2", "unknown"]
        .into_iter()
        .map(lazy_match(&pattern))
        .map(|picked| picked.copied())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(sizes, vec![20, 18, 13]);
}
