#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tuplejson::{Field, Record, Timestamp, Type, Value};

#[derive(Debug, Arbitrary)]
enum Scalar {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8Bits(i8),
    Uint16Bits(i16),
    Uint32Bits(i32),
    Uint64Bits(i64),
    Float32(f32),
    Float64(f64),
    Str(String),
    EnumLabel(String),
    Timestamp(i64, u32),
}

#[derive(Debug, Arbitrary)]
enum Node {
    Scalar(Scalar),
    List { elem: Box<Node>, len: u8 },
    Set { elem: Box<Node>, len: u8 },
    Map { keys: Vec<String>, value: Box<Node> },
    Tuple(Vec<(String, Node)>),
}

fn lower_scalar(s: Scalar) -> (Type, Value) {
    match s {
        Scalar::Bool(v) => (Type::Boolean, Value::Bool(v)),
        Scalar::Int8(v) => (Type::Int8, Value::Int8(v)),
        Scalar::Int16(v) => (Type::Int16, Value::Int16(v)),
        Scalar::Int32(v) => (Type::Int32, Value::Int32(v)),
        Scalar::Int64(v) => (Type::Int64, Value::Int64(v)),
        Scalar::Uint8Bits(v) => (Type::Uint8, Value::uint8_from_bits(v)),
        Scalar::Uint16Bits(v) => (Type::Uint16, Value::uint16_from_bits(v)),
        Scalar::Uint32Bits(v) => (Type::Uint32, Value::uint32_from_bits(v)),
        Scalar::Uint64Bits(v) => (Type::Uint64, Value::uint64_from_bits(v)),
        Scalar::Float32(v) => (Type::Float32, Value::Float32(v)),
        Scalar::Float64(v) => (Type::Float64, Value::Float64(v)),
        Scalar::Str(v) => (Type::Rstring, Value::String(v)),
        Scalar::EnumLabel(v) => (Type::Enum, Value::String(v)),
        Scalar::Timestamp(secs, nanos) => {
            (Type::Timestamp, Value::Timestamp(Timestamp::new(secs, nanos)))
        }
    }
}

fn lower(node: Node) -> (Type, Value) {
    match node {
        Node::Scalar(s) => lower_scalar(s),
        Node::List { elem, len } => {
            let (ty, value) = lower(*elem);
            let items = vec![value; (len % 4) as usize];
            (Type::list(ty), Value::List(items))
        }
        Node::Set { elem, len } => {
            let (ty, value) = lower(*elem);
            let items = vec![value; (len % 4) as usize];
            (Type::set(ty), Value::Set(items))
        }
        Node::Map { keys, value } => {
            let (vt, vv) = lower(*value);
            let entries = keys
                .into_iter()
                .take(4)
                .map(|k| (Value::String(k), vv.clone()))
                .collect();
            (Type::map(Type::Rstring, vt), Value::Map(entries))
        }
        Node::Tuple(members) => {
            let fields = members
                .into_iter()
                .take(6)
                .map(|(name, child)| {
                    let (ty, value) = lower(child);
                    Field::new(name, ty, value)
                })
                .collect();
            (Type::Tuple, Value::Tuple(Record::new(fields)))
        }
    }
}

fuzz_target!(|node: Node| {
    let (ty, value) = lower(node);
    let record = Record::new(vec![Field::new("root", ty, value)]);
    let text = tuplejson::encode_record(&record).expect("coherent record must encode");
    serde_json::from_str::<serde_json::Value>(&text).expect("encoder emitted invalid JSON");
});
