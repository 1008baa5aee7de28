#![doc = include_str!("../README.md")]

pub mod encode;
pub mod error;
pub mod schema;
pub mod value;
pub mod verify;

mod number;

pub use crate::error::{Error, Result};
pub use crate::schema::Type;
pub use crate::value::{Field, Record, Timestamp, Value};
pub use rust_decimal::Decimal;

#[cfg(feature = "std")]
use std::io::Write;

/// Encodes the whole record as JSON object text.
pub fn encode_record(record: &Record) -> Result<String> {
    crate::encode::record_to_string(record)
}

/// Encodes a list- or set-typed field as bare JSON array text. The field's
/// element type drives each element; the field's own name is not written.
pub fn encode_collection_field(record: &Record, name: &str) -> Result<String> {
    crate::encode::collection_field_to_string(record, name)
}

/// Encodes the field selected as serialization root: object text for a tuple
/// field, array text for a list or set field. Any other field type fails
/// with [`Error::InvalidRootType`].
pub fn encode_root_field(record: &Record, name: &str) -> Result<String> {
    crate::encode::root_field_to_string(record, name)
}

#[cfg(feature = "std")]
pub fn encode_record_to_writer<W: Write>(mut writer: W, record: &Record) -> Result<()> {
    let s = encode_record(record)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

#[cfg(feature = "std")]
pub fn encode_collection_field_to_writer<W: Write>(
    mut writer: W,
    record: &Record,
    name: &str,
) -> Result<()> {
    let s = encode_collection_field(record, name)?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}
