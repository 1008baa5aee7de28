use tuplejson::{
    Error, Field, Record, Type, Value, encode_collection_field, encode_record, encode_root_field,
    verify,
};

fn input() -> Record {
    let tup = Record::new(vec![Field::new("x", Type::Int32, Value::Int32(1))]);
    Record::new(vec![
        Field::new("tup", Type::Tuple, Value::Tuple(tup)),
        Field::new(
            "xs",
            Type::list(Type::Int32),
            Value::List(vec![Value::Int32(1), Value::Int32(2), Value::Int32(3)]),
        ),
        Field::new(
            "tags",
            Type::set(Type::Rstring),
            Value::Set(vec![Value::String("a".into()), Value::String("b".into())]),
        ),
        Field::new(
            "bounded",
            Type::BoundedList(Box::new(Type::Uint16), 4),
            Value::List(vec![Value::Uint16(7)]),
        ),
        Field::new("n", Type::Int32, Value::Int32(9)),
    ])
}

#[test]
fn collection_field_emits_a_bare_array() {
    assert_eq!(encode_collection_field(&input(), "xs").unwrap(), "[1,2,3]");
    assert_eq!(
        encode_collection_field(&input(), "tags").unwrap(),
        r#"["a","b"]"#
    );
    assert_eq!(encode_collection_field(&input(), "bounded").unwrap(), "[7]");
}

#[test]
fn collection_field_rejects_non_collections() {
    let err = encode_collection_field(&input(), "tup").unwrap_err();
    assert!(matches!(err, Error::InvalidRootType { .. }), "got {err}");
    let err = encode_collection_field(&input(), "n").unwrap_err();
    assert!(matches!(err, Error::InvalidRootType { .. }), "got {err}");
}

#[test]
fn unknown_fields_are_reported_by_name() {
    let err = encode_collection_field(&input(), "nope").unwrap_err();
    assert!(matches!(err, Error::UnknownField { .. }), "got {err}");
    assert!(err.to_string().contains("nope"));
}

#[test]
fn root_field_routes_tuples_to_object_text() {
    assert_eq!(encode_root_field(&input(), "tup").unwrap(), r#"{"x":1}"#);
}

#[test]
fn root_field_routes_collections_to_array_text() {
    assert_eq!(encode_root_field(&input(), "xs").unwrap(), "[1,2,3]");
    assert_eq!(encode_root_field(&input(), "tags").unwrap(), r#"["a","b"]"#);
}

#[test]
fn root_field_rejects_scalars_at_setup_time() {
    let record = input();
    let err = verify::check_root_field(&record, "n").unwrap_err();
    assert!(matches!(err, Error::InvalidRootType { .. }), "got {err}");
    assert!(err.to_string().contains("int32"));

    let err = encode_root_field(&record, "n").unwrap_err();
    assert!(matches!(err, Error::InvalidRootType { .. }), "got {err}");
}

#[test]
fn check_root_field_accepts_all_root_kinds() {
    let record = input();
    for name in ["tup", "xs", "tags", "bounded"] {
        assert!(verify::check_root_field(&record, name).is_ok(), "{name}");
    }
}

#[test]
fn whole_record_remains_the_default_root() {
    let text = encode_record(&input()).unwrap();
    assert!(text.starts_with(r#"{"tup":"#));
}

#[cfg(feature = "std")]
#[test]
fn collection_writer_variant_emits_the_same_bytes() {
    let mut buf = Vec::new();
    tuplejson::encode_collection_field_to_writer(&mut buf, &input(), "xs").unwrap();
    assert_eq!(buf, b"[1,2,3]");
}
