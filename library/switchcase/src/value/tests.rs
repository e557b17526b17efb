use super::*;
use crate::sentinel::CATCHALL;
use pretty_assertions::assert_eq;

// Rendering

#[test]
fn scalars_render_json_like() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Float(2.0).to_string(), "2");
    assert_eq!(Value::Float(0.25).to_string(), "0.25");
    assert_eq!(Value::from("a\"b").to_string(), r#""a\"b""#);
}

#[test]
fn lists_render_without_spaces() {
    assert_eq!(Value::list(vec![Value::Int(2)]).to_string(), "[2]");
    assert_eq!(Value::pair(1, "x").to_string(), r#"[1,"x"]"#);
    assert_eq!(Value::list(vec![]).to_string(), "[]");
}

#[test]
fn maps_render_in_insertion_order() {
    let record = Value::record([("name", Value::from("Smith")), ("age", Value::from(40))]);
    assert_eq!(record.to_string(), r#"{"name":"Smith","age":40}"#);

    let table = Value::map(
        LiteralPattern::new()
            .case(1, Value::from("a"))
            .case(CATCHALL, Value::Null),
    );
    assert_eq!(table.to_string(), r#"{"1":"a",<last>:null}"#);
}

#[test]
fn functions_and_sentinel_render_by_tag() {
    let f = Value::predicate("is_five", |v| v.as_int() == Some(5));
    assert_eq!(f.to_string(), "<fn is_five>");
    assert_eq!(Value::CatchAll.to_string(), "<last>");
    assert_eq!(Value::from(CATCHALL), Value::CatchAll);
}

// Equality

#[test]
fn numbers_compare_across_representations() {
    assert_eq!(Value::Int(5), Value::Float(5.0));
    assert_ne!(Value::Int(5), Value::Float(5.5));
    assert_ne!(Value::Int(1), Value::from("1"));
}

#[test]
fn catch_all_never_equals_underscore() {
    assert_ne!(Value::CatchAll, Value::from("_"));
    assert_ne!(Value::from("_"), Value::CatchAll);
}

#[test]
fn functions_compare_by_identity() {
    let f = Value::predicate("t", |_| true);
    let g = Value::predicate("t", |_| true);
    assert_eq!(f, f.clone());
    assert_ne!(f, g);
}

#[test]
fn lists_compare_elementwise() {
    assert_eq!(Value::pair(1, 2), Value::pair(1, 2.0));
    assert_ne!(Value::pair(1, 2), Value::list(vec![Value::Int(1)]));
}

// Accessors

#[test]
fn record_fields() {
    let person = Value::record([("name", Value::from("Marie"))]);
    assert_eq!(person.field("name"), Some(&Value::from("Marie")));
    assert_eq!(person.field("age"), None);
    assert_eq!(Value::Int(5).field("name"), None);
}

#[test]
fn typed_views() {
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::Int(1).as_bool(), None);
    assert_eq!(Value::Int(7).as_number(), Some(7.0));
    assert_eq!(Value::from("s").as_str(), Some("s"));
    assert_eq!(Value::pair(1, 2).as_list().map(<[Value]>::len), Some(2));
    assert!(Value::CatchAll.is_catch_all());
    assert_eq!(Value::default(), Value::Null);
}

#[test]
fn type_names() {
    assert_eq!(Value::Null.type_name(), "null");
    assert_eq!(Value::pair(1, 2).type_name(), "list");
    assert_eq!(Value::record([]).type_name(), "map");
    assert_eq!(Value::func("id", Value::clone).type_name(), "function");
}

#[test]
fn function_values_call_through() {
    let double = FunctionValue::new("double", |v| Value::Int(v.as_int().unwrap_or(0) * 2));
    assert_eq!(double.name(), "double");
    assert_eq!(double.call(&Value::Int(21)), Value::Int(42));
}

// Search key

#[test]
fn values_stringify_for_literal_lookup() {
    assert_eq!(Value::from("h1").canonical_key(), "h1");
    assert_eq!(Value::Int(1).canonical_key(), "1");
    assert_eq!(Value::Float(1.0).canonical_key(), "1");
    assert_eq!(Value::Bool(false).canonical_key(), "false");
    assert_eq!(Value::Null.canonical_key(), "null");
}
