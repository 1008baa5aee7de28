//! Runtime values, read only under an already-known [`Type`].

use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::schema::Type;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Fractional seconds since the epoch.
///
/// Only the seconds form survives encoding; sub-second precision beyond what
/// an `f64` of seconds can hold is lost by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    secs: i64,
    nanos: u32,
}

impl Timestamp {
    /// Nanoseconds of a whole second or more carry into `secs`.
    pub fn new(secs: i64, nanos: u32) -> Self {
        Self {
            secs: secs.saturating_add((nanos / NANOS_PER_SEC) as i64),
            nanos: nanos % NANOS_PER_SEC,
        }
    }

    pub fn secs(&self) -> i64 {
        self.secs
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    /// The encoding form: seconds with the nanosecond remainder folded in.
    pub fn as_secs_f64(&self) -> f64 {
        self.secs as f64 + f64::from(self.nanos) * 1e-9
    }
}

#[cfg(feature = "chrono")]
impl From<chrono::DateTime<chrono::Utc>> for Timestamp {
    fn from(dt: chrono::DateTime<chrono::Utc>) -> Self {
        Timestamp::new(dt.timestamp(), dt.timestamp_subsec_nanos())
    }
}

#[cfg(feature = "chrono")]
impl Timestamp {
    /// `None` when the instant is outside chrono's representable range.
    pub fn to_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp(self.secs, self.nanos)
    }
}

/// A runtime value. The static [`Type`] tag, not the variant, decides how a
/// value is rendered; reading a value under a tag of a different kind is a
/// [`Error::Mismatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Uint8(u8),
    Uint16(u16),
    Uint32(u32),
    Uint64(u64),
    Float32(f32),
    Float64(f64),
    /// One exact representation serving all three declared decimal widths.
    Decimal(Decimal),
    /// Serves both string kinds and enum labels.
    String(String),
    Timestamp(Timestamp),
    Tuple(Record),
    List(Vec<Value>),
    /// Unordered at the type level; encodes in vector order.
    Set(Vec<Value>),
    /// Entries encode in their natural (vector) order.
    Map(Vec<(Value, Value)>),
    Blob(Vec<u8>),
    Xml(String),
}

impl Value {
    /// Reinterprets signed 8-bit storage as the unsigned magnitude.
    pub fn uint8_from_bits(bits: i8) -> Value {
        Value::Uint8(bits as u8)
    }

    /// Reinterprets signed 16-bit storage as the unsigned magnitude.
    pub fn uint16_from_bits(bits: i16) -> Value {
        Value::Uint16(bits as u16)
    }

    /// Reinterprets signed 32-bit storage as the unsigned magnitude.
    pub fn uint32_from_bits(bits: i32) -> Value {
        Value::Uint32(bits as u32)
    }

    /// Reinterprets signed 64-bit storage as the unsigned magnitude.
    pub fn uint64_from_bits(bits: i64) -> Value {
        Value::Uint64(bits as u64)
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "boolean",
            Value::Int8(_) => "int8",
            Value::Int16(_) => "int16",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Uint8(_) => "uint8",
            Value::Uint16(_) => "uint16",
            Value::Uint32(_) => "uint32",
            Value::Uint64(_) => "uint64",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Timestamp(_) => "timestamp",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Set(_) => "set",
            Value::Map(_) => "map",
            Value::Blob(_) => "blob",
            Value::Xml(_) => "xml",
        }
    }

    pub(crate) fn as_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(v) => Ok(*v),
            other => Err(Error::mismatch("boolean", other)),
        }
    }

    pub(crate) fn as_i8(&self) -> Result<i8> {
        match self {
            Value::Int8(v) => Ok(*v),
            other => Err(Error::mismatch("int8", other)),
        }
    }

    pub(crate) fn as_i16(&self) -> Result<i16> {
        match self {
            Value::Int16(v) => Ok(*v),
            other => Err(Error::mismatch("int16", other)),
        }
    }

    pub(crate) fn as_i32(&self) -> Result<i32> {
        match self {
            Value::Int32(v) => Ok(*v),
            other => Err(Error::mismatch("int32", other)),
        }
    }

    pub(crate) fn as_i64(&self) -> Result<i64> {
        match self {
            Value::Int64(v) => Ok(*v),
            other => Err(Error::mismatch("int64", other)),
        }
    }

    pub(crate) fn as_u8(&self) -> Result<u8> {
        match self {
            Value::Uint8(v) => Ok(*v),
            other => Err(Error::mismatch("uint8", other)),
        }
    }

    pub(crate) fn as_u16(&self) -> Result<u16> {
        match self {
            Value::Uint16(v) => Ok(*v),
            other => Err(Error::mismatch("uint16", other)),
        }
    }

    pub(crate) fn as_u32(&self) -> Result<u32> {
        match self {
            Value::Uint32(v) => Ok(*v),
            other => Err(Error::mismatch("uint32", other)),
        }
    }

    pub(crate) fn as_u64(&self) -> Result<u64> {
        match self {
            Value::Uint64(v) => Ok(*v),
            other => Err(Error::mismatch("uint64", other)),
        }
    }

    pub(crate) fn as_f32(&self) -> Result<f32> {
        match self {
            Value::Float32(v) => Ok(*v),
            other => Err(Error::mismatch("float32", other)),
        }
    }

    pub(crate) fn as_f64(&self) -> Result<f64> {
        match self {
            Value::Float64(v) => Ok(*v),
            other => Err(Error::mismatch("float64", other)),
        }
    }

    pub(crate) fn as_decimal(&self) -> Result<&Decimal> {
        match self {
            Value::Decimal(v) => Ok(v),
            other => Err(Error::mismatch("decimal", other)),
        }
    }

    pub(crate) fn as_str(&self) -> Result<&str> {
        match self {
            Value::String(v) => Ok(v),
            other => Err(Error::mismatch("string", other)),
        }
    }

    pub(crate) fn as_timestamp(&self) -> Result<Timestamp> {
        match self {
            Value::Timestamp(v) => Ok(*v),
            other => Err(Error::mismatch("timestamp", other)),
        }
    }

    pub(crate) fn as_tuple(&self) -> Result<&Record> {
        match self {
            Value::Tuple(v) => Ok(v),
            other => Err(Error::mismatch("tuple", other)),
        }
    }

    pub(crate) fn as_list(&self) -> Result<&[Value]> {
        match self {
            Value::List(v) => Ok(v),
            other => Err(Error::mismatch("list", other)),
        }
    }

    pub(crate) fn as_set(&self) -> Result<&[Value]> {
        match self {
            Value::Set(v) => Ok(v),
            other => Err(Error::mismatch("set", other)),
        }
    }

    pub(crate) fn as_map(&self) -> Result<&[(Value, Value)]> {
        match self {
            Value::Map(v) => Ok(v),
            other => Err(Error::mismatch("map", other)),
        }
    }
}

/// One named, typed member of a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: Type,
    pub value: Value,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type, value: Value) -> Self {
        Self {
            name: name.into(),
            ty,
            value,
        }
    }
}

/// An ordered sequence of named, typed fields. Name uniqueness is the
/// caller's contract and is not re-validated here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub fields: Vec<Field>,
}

impl Record {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// First field with the given name, if any.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<Field> for Record {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
