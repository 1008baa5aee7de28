//! Non-finite floats have no JSON number form; they encode as the strings
//! "NaN", "Infinity" and "-Infinity".

use tuplejson::{Field, Record, Type, Value, encode_record};

#[test]
fn f64_non_finite_values_encode_as_strings() {
    let record = Record::new(vec![
        Field::new("a", Type::Float64, Value::Float64(f64::NAN)),
        Field::new("b", Type::Float64, Value::Float64(f64::INFINITY)),
        Field::new("c", Type::Float64, Value::Float64(f64::NEG_INFINITY)),
    ]);
    assert_eq!(
        encode_record(&record).unwrap(),
        r#"{"a":"NaN","b":"Infinity","c":"-Infinity"}"#
    );
}

#[test]
fn f32_non_finite_values_encode_as_strings() {
    let record = Record::new(vec![
        Field::new("a", Type::Float32, Value::Float32(f32::NAN)),
        Field::new("b", Type::Float32, Value::Float32(f32::INFINITY)),
        Field::new("c", Type::Float32, Value::Float32(f32::NEG_INFINITY)),
    ]);
    assert_eq!(
        encode_record(&record).unwrap(),
        r#"{"a":"NaN","b":"Infinity","c":"-Infinity"}"#
    );
}

#[test]
fn non_finite_float_keys_use_the_same_labels() {
    let record = Record::new(vec![Field::new(
        "m",
        Type::map(Type::Float64, Type::Int32),
        Value::Map(vec![(Value::Float64(f64::NAN), Value::Int32(1))]),
    )]);
    assert_eq!(encode_record(&record).unwrap(), r#"{"m":{"NaN":1}}"#);
}

#[test]
fn the_output_stays_parseable() {
    let record = Record::new(vec![Field::new(
        "a",
        Type::Float64,
        Value::Float64(f64::INFINITY),
    )]);
    let text = encode_record(&record).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["a"], serde_json::json!("Infinity"));
}
