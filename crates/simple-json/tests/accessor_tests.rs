use simple_json::{get_element, get_member, parse, AccessError, JsonError, Value, ValueKind};

fn sample() -> Value {
    parse(r#"{"a":[1,2,{"b":true}],"n":null,"s":"text","f":2.5,"i":-3}"#).unwrap()
}

// ============================================================================
// Member and element lookup
// ============================================================================

#[test]
fn nested_lookup_through_free_functions() {
    let root = sample();
    let a = get_member(&root, "a").unwrap().unwrap();
    let third = get_element(a, 2).unwrap();
    let b = get_member(third, "b").unwrap().unwrap();
    assert_eq!(b, &Value::Boolean(true));
}

#[test]
fn missing_key_is_none_not_error() {
    let root = sample();
    assert_eq!(get_member(&root, "absent"), Ok(None));
    assert_eq!(root.get("absent"), None);
}

#[test]
fn stored_null_is_some_null() {
    let root = sample();
    assert_eq!(get_member(&root, "n"), Ok(Some(&Value::Null)));
}

#[test]
fn get_member_on_array_is_type_mismatch() {
    let root = parse("[1]").unwrap();
    assert_eq!(
        get_member(&root, "a"),
        Err(AccessError::TypeMismatch {
            expected: ValueKind::Object,
            found: ValueKind::Array,
        })
    );
}

#[test]
fn get_element_out_of_range() {
    let root = sample();
    let a = root.member("a").unwrap();
    assert_eq!(
        get_element(a, 3),
        Err(AccessError::IndexOutOfRange { index: 3, len: 3 })
    );
}

#[test]
fn get_element_on_object_is_type_mismatch() {
    let root = sample();
    assert_eq!(
        get_element(&root, 0),
        Err(AccessError::TypeMismatch {
            expected: ValueKind::Array,
            found: ValueKind::Object,
        })
    );
}

#[test]
fn checked_member_reports_missing_key() {
    let root = sample();
    assert_eq!(
        root.member("nope"),
        Err(AccessError::KeyNotFound {
            key: "nope".to_string()
        })
    );
}

// ============================================================================
// Scalar unwraps
// ============================================================================

#[test]
fn unwraps_on_matching_tags() {
    let root = sample();
    assert_eq!(root.member("s").unwrap().as_str(), Ok("text"));
    assert_eq!(root.member("f").unwrap().as_float(), Ok(2.5));
    assert_eq!(root.member("i").unwrap().as_integer(), Ok(-3));
    assert_eq!(root.pointer("a.2.b").unwrap().as_bool(), Ok(true));
}

#[test]
fn unwraps_on_wrong_tags() {
    let root = sample();
    let s = root.member("s").unwrap();
    assert_eq!(
        s.as_integer(),
        Err(AccessError::TypeMismatch {
            expected: ValueKind::Integer,
            found: ValueKind::String,
        })
    );
    assert!(root.member("i").unwrap().as_float().is_err());
    assert!(root.member("n").unwrap().as_bool().is_err());
    assert!(root.as_array().is_err());
}

#[test]
fn accessor_errors_leave_tree_usable() {
    let root = sample();
    let _ = root.member("missing");
    let _ = root.element(0);
    assert_eq!(root.len(), 5);
    assert!(root.pointer("a.0").is_ok());
}

#[test]
fn predicates() {
    let root = sample();
    assert!(root.is_object());
    assert!(root.member("a").unwrap().is_array());
    assert!(root.member("n").unwrap().is_null());
    assert!(root.member("s").unwrap().is_string());
    assert!(root.member("f").unwrap().is_float());
    assert!(root.member("i").unwrap().is_integer());
    assert!(root.pointer("a.2.b").unwrap().is_boolean());
}

// ============================================================================
// Paths and mutation
// ============================================================================

#[test]
fn pointer_walks_mixed_segments() {
    let root = sample();
    assert_eq!(root.pointer("a.1"), Ok(&Value::Integer(2)));
    assert_eq!(
        root.pointer("a.2.c"),
        Err(AccessError::KeyNotFound {
            key: "c".to_string()
        })
    );
    assert_eq!(
        root.pointer("a.7"),
        Err(AccessError::IndexOutOfRange { index: 7, len: 3 })
    );
}

#[test]
fn pointer_index_must_be_plain_digits() {
    let root = sample();
    assert_eq!(
        root.pointer("a.+1"),
        Err(AccessError::InvalidIndex {
            segment: "+1".to_string()
        })
    );
    assert_eq!(
        root.pointer("a.b"),
        Err(AccessError::InvalidIndex {
            segment: "b".to_string()
        })
    );
    assert_eq!(
        root.pointer("a.").unwrap_err().to_string(),
        "invalid array index: \"\""
    );
}

#[test]
fn mutable_access_edits_in_place() {
    let mut root = sample();
    root.as_object_mut()
        .unwrap()
        .insert("added".to_string(), Value::from(1i64));
    root.as_object_mut()
        .unwrap()
        .get_mut("a")
        .unwrap()
        .as_array_mut()
        .unwrap()
        .push(Value::Null);
    assert_eq!(root.pointer("added"), Ok(&Value::Integer(1)));
    assert_eq!(root.pointer("a.3"), Ok(&Value::Null));
}

#[test]
fn errors_convert_into_umbrella_type() {
    fn lookup(text: &str) -> simple_json::Result<i64> {
        let root = parse(text)?;
        Ok(root.pointer("x")?.as_integer()?)
    }
    assert_eq!(lookup(r#"{"x":5}"#), Ok(5));
    assert!(matches!(lookup("{"), Err(JsonError::Parse(_))));
    assert!(matches!(lookup("{}"), Err(JsonError::Access(_))));
}

#[test]
fn error_messages_are_readable() {
    let err = sample().as_integer().unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected integer, found object");
    let err = parse(r#"{"a":}"#).unwrap_err();
    assert_eq!(err.to_string(), "unexpected token '}' at byte 5");
}
