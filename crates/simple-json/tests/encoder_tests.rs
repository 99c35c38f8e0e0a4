use simple_json::{parse, serialize, write, write_optional, Map, Value};

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn encode_scalars_inside_array() {
    let value = Value::Array(vec![
        Value::Null,
        Value::Boolean(true),
        Value::Boolean(false),
        Value::Integer(-7),
        Value::Float(3.14),
        Value::from("hi"),
    ]);
    assert_eq!(serialize(&value), r#"[null,true,false,-7,3.14,"hi"]"#);
}

#[test]
fn encode_bare_scalar() {
    // Scalars can be serialized on their own even though they cannot be a
    // parse root.
    assert_eq!(serialize(&Value::Integer(42)), "42");
    assert_eq!(serialize(&Value::Null), "null");
}

#[test]
fn encode_integral_float_keeps_fraction() {
    assert_eq!(serialize(&Value::Float(42.0)), "42.0");
}

#[test]
fn encode_float_without_trailing_zeros() {
    let root = parse("[1.50, 0.10]").unwrap();
    assert_eq!(serialize(&root), "[1.5,0.1]");
}

#[test]
fn encode_small_float_without_exponent() {
    assert_eq!(serialize(&Value::Float(0.000001)), "0.000001");
}

#[test]
fn encode_non_finite_float_as_null() {
    assert_eq!(serialize(&Value::Float(f64::NAN)), "null");
    assert_eq!(serialize(&Value::Float(f64::NEG_INFINITY)), "null");
}

#[test]
fn encode_i64_extremes() {
    let value = Value::Array(vec![Value::Integer(i64::MIN), Value::Integer(i64::MAX)]);
    assert_eq!(
        serialize(&value),
        "[-9223372036854775808,9223372036854775807]"
    );
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn encode_string_is_not_re_escaped() {
    let value = Value::Array(vec![Value::from(r#"a\"b"#)]);
    assert_eq!(serialize(&value), r#"["a\"b"]"#);
}

#[test]
fn encode_raw_newline_verbatim() {
    let value = Value::Array(vec![Value::from("a\nb")]);
    assert_eq!(serialize(&value), "[\"a\nb\"]");
}

#[test]
fn encode_empty_string() {
    assert_eq!(serialize(&Value::from("")), r#""""#);
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn encode_empty_containers() {
    assert_eq!(serialize(&Value::Object(Map::new())), "{}");
    assert_eq!(serialize(&Value::Array(vec![])), "[]");
}

#[test]
fn encode_object_in_insertion_order() {
    let value: Value = [
        ("zeta", Value::Integer(1)),
        ("alpha", Value::Integer(2)),
        ("mid", Value::Integer(3)),
    ]
    .into_iter()
    .collect();
    assert_eq!(serialize(&value), r#"{"zeta":1,"alpha":2,"mid":3}"#);
}

#[test]
fn encode_is_compact() {
    let root = parse("{ \"a\" : [ 1 , { \"b\" : null } ] ,\n \"c\" : \"x y\" }").unwrap();
    assert_eq!(serialize(&root), r#"{"a":[1,{"b":null}],"c":"x y"}"#);
}

#[test]
fn encode_deep_nesting() {
    let root = parse("[[[[[]]]]]").unwrap();
    assert_eq!(serialize(&root), "[[[[[]]]]]");
}

#[test]
fn encode_key_verbatim() {
    let root = parse(r#"{"we\"ird key":1}"#).unwrap();
    assert_eq!(serialize(&root), r#"{"we\"ird key":1}"#);
}

// ============================================================================
// Buffer API
// ============================================================================

#[test]
fn write_appends_to_existing_buffer() {
    let mut out = String::from("prefix:");
    write(&Value::Array(vec![Value::Integer(1)]), &mut out);
    assert_eq!(out, "prefix:[1]");
}

#[test]
fn write_optional_absent_is_null() {
    let root = parse(r#"{"a":1}"#).unwrap();
    let mut out = String::new();
    write_optional(root.get("missing"), &mut out);
    out.push(' ');
    write_optional(root.get("a"), &mut out);
    assert_eq!(out, "null 1");
}

#[test]
fn display_matches_serialize() {
    let root = parse(r#"{"a":[true,2.5]}"#).unwrap();
    assert_eq!(root.to_string(), serialize(&root));
}
