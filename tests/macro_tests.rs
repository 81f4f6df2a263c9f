use serde_pson::{pson, to_pson, PsonMap, Value};

#[test]
fn test_pson_macro_null() {
    let value = pson!(null);
    assert_eq!(value, Value::Null);
}

#[test]
fn test_pson_macro_booleans() {
    assert_eq!(pson!(true), Value::Bool(true));
    assert_eq!(pson!(false), Value::Bool(false));
}

#[test]
fn test_pson_macro_numbers() {
    assert_eq!(pson!(42), Value::Integer(42));
    assert_eq!(pson!(3.5), Value::Float(3.5));
    assert_eq!(pson!(-123), Value::Integer(-123));
}

#[test]
fn test_pson_macro_strings() {
    assert_eq!(pson!("hello world"), Value::String("hello world".to_string()));
    assert_eq!(pson!(""), Value::String("".to_string()));
}

#[test]
fn test_pson_macro_arrays() {
    assert_eq!(pson!([]), Value::Array(vec![]));

    assert_eq!(
        pson!([1, 2, 3]),
        Value::Array(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
        ])
    );

    assert_eq!(
        pson!([1, "hello", true, null]),
        Value::Array(vec![
            Value::Integer(1),
            Value::String("hello".to_string()),
            Value::Bool(true),
            Value::Null,
        ])
    );
}

#[test]
fn test_pson_macro_objects() {
    assert_eq!(pson!({}), Value::Object(PsonMap::new()));

    let simple_object = pson!({
        "name": "Alice",
        "age": 30
    });

    let obj = simple_object.as_object().unwrap();
    assert_eq!(obj.len(), 2);
    assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
    assert_eq!(obj.get("age"), Some(&Value::Integer(30)));
}

#[test]
fn test_pson_macro_nested() {
    let nested = pson!({
        "user": {
            "id": 123,
            "name": "Bob",
            "active": true
        },
        "tags": ["admin", "developer"],
        "count": 42
    });

    let obj = nested.as_object().unwrap();
    assert_eq!(obj.len(), 3);

    if let Some(Value::Object(user)) = obj.get("user") {
        assert_eq!(user.get("id"), Some(&Value::Integer(123)));
        assert_eq!(user.get("name"), Some(&Value::String("Bob".to_string())));
        assert_eq!(user.get("active"), Some(&Value::Bool(true)));
    } else {
        panic!("Expected user to be an object");
    }

    if let Some(Value::Array(tags)) = obj.get("tags") {
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1], Value::String("developer".to_string()));
    } else {
        panic!("Expected tags to be an array");
    }

    assert_eq!(obj.get("count"), Some(&Value::Integer(42)));
}

#[test]
fn test_pson_macro_keeps_member_order() {
    let value = pson!({"z": 1, "a": 2, "m": 3});
    assert_eq!(to_pson(&value, None).unwrap(), r#"{"z":1,"a":2,"m":3}"#);
}

#[test]
fn test_pson_macro_raw_splice() {
    let digest = vec![0xDE, 0xAD, 0xBE, 0xEF];
    let value = pson!({
        "algorithm": "crc32",
        "digest": (Value::raw(digest.clone()))
    });

    assert_eq!(
        value.as_object().unwrap().get("digest"),
        Some(&Value::Raw(digest))
    );
    assert_eq!(
        to_pson(&value, None).unwrap(),
        r#"{"algorithm":"crc32","digest":{"type":"raw","data":[222,173,190,239]}}"#
    );
}

#[test]
fn test_value_methods() {
    let null_val = pson!(null);
    assert!(null_val.is_null());
    assert!(!null_val.is_bool());
    assert!(!null_val.is_number());
    assert!(!null_val.is_string());
    assert!(!null_val.is_raw());
    assert!(!null_val.is_array());
    assert!(!null_val.is_object());

    let bool_val = pson!(true);
    assert_eq!(bool_val.as_bool(), Some(true));

    let str_val = pson!("hello");
    assert_eq!(str_val.as_str(), Some("hello"));
    assert_eq!(str_val.as_bytes(), Some(&b"hello"[..]));

    let array_val = pson!([1, 2, 3]);
    assert_eq!(array_val.as_array().unwrap().len(), 3);

    let obj_val = pson!({"key": "value"});
    assert_eq!(obj_val.as_object().unwrap().len(), 1);
}
