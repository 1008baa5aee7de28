#![no_main]
use libfuzzer_sys::fuzz_target;
use tuplejson::{Field, Record, Type, Value};

fuzz_target!(|data: &str| {
    let record = Record::new(vec![
        Field::new("s", Type::Rstring, Value::String(data.to_string())),
        Field::new(
            "m",
            Type::map(Type::Rstring, Type::Int32),
            Value::Map(vec![(Value::String(data.to_string()), Value::Int32(1))]),
        ),
    ]);
    let text = tuplejson::encode_record(&record).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["s"].as_str(), Some(data));
    assert_eq!(parsed["m"][data].as_i64(), Some(1));
});
