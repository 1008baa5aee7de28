//! Recursive type-directed encoding.
//!
//! One function, one exhaustive match over the type tags. Container kinds fan
//! out to helpers that recurse with the statically known element, key and
//! value types; a failure anywhere propagates before the enclosing container
//! is closed, leaving the buffer in its aborted state for the caller to
//! discard.

use core::fmt;
use core::fmt::Write as _;

use crate::encode::primitives;
use crate::encode::writer::JsonWriter;
use crate::error::{Error, Result};
use crate::number;
use crate::schema::Type;
use crate::value::{Record, Value};
use crate::verify;

/// Writes exactly one JSON value for `value` under `ty`.
pub fn encode_value(ty: &Type, value: &Value, w: &mut JsonWriter) -> Result<()> {
    match ty {
        Type::Boolean => w.bool_value(value.as_bool()?),
        Type::Int8 => w.number_value(value.as_i8()?),
        Type::Int16 => w.number_value(value.as_i16()?),
        Type::Int32 => w.number_value(value.as_i32()?),
        Type::Int64 => w.number_value(value.as_i64()?),
        Type::Uint8 => w.number_value(value.as_u8()?),
        Type::Uint16 => w.number_value(value.as_u16()?),
        Type::Uint32 => w.number_value(value.as_u32()?),
        Type::Uint64 => w.number_value(value.as_u64()?),
        Type::Float32 => {
            let v = value.as_f32()?;
            if v.is_finite() {
                w.f32_value(v);
            } else {
                w.string_value(primitives::nonfinite_label(f64::from(v)));
            }
        }
        Type::Float64 => {
            let v = value.as_f64()?;
            if v.is_finite() {
                w.f64_value(v);
            } else {
                w.string_value(primitives::nonfinite_label(v));
            }
        }
        Type::Decimal32 | Type::Decimal64 | Type::Decimal128 => {
            w.number_value(value.as_decimal()?);
        }
        Type::Rstring | Type::Ustring | Type::Enum => w.string_value(value.as_str()?),
        Type::Timestamp => w.f64_value(value.as_timestamp()?.as_secs_f64()),
        Type::Tuple => encode_record_into(value.as_tuple()?, w)?,
        Type::List(elem) | Type::BoundedList(elem, _) => {
            encode_items(elem, value.as_list()?, w)?;
        }
        Type::Set(elem) | Type::BoundedSet(elem, _) => {
            encode_items(elem, value.as_set()?, w)?;
        }
        Type::Map(key, val) | Type::BoundedMap(key, val, _) => {
            encode_map(key, val, value.as_map()?, w)?;
        }
        Type::Complex32 | Type::Complex64 | Type::Blob | Type::Xml => {
            return Err(Error::unsupported(ty));
        }
    }
    Ok(())
}

/// One JSON object member per field, in declaration order.
pub fn encode_record_into(record: &Record, w: &mut JsonWriter) -> Result<()> {
    w.begin_object();
    for field in &record.fields {
        w.field_name(&field.name);
        encode_value(&field.ty, &field.value, w)?;
    }
    w.end_object();
    Ok(())
}

/// A JSON array, each element encoded under the collection's element type.
pub(crate) fn encode_items(elem: &Type, items: &[Value], w: &mut JsonWriter) -> Result<()> {
    w.begin_array();
    for item in items {
        encode_value(elem, item, w)?;
    }
    w.end_array();
    Ok(())
}

/// A JSON object keyed by the string form of each entry key. Key legality is
/// a property of the key type and is checked before anything is written, so
/// an illegal map never emits partial content.
fn encode_map(
    key_ty: &Type,
    value_ty: &Type,
    entries: &[(Value, Value)],
    w: &mut JsonWriter,
) -> Result<()> {
    verify::check_map_key(key_ty)?;
    w.begin_object();
    for (key, value) in entries {
        let name = key_text(key_ty, key)?;
        w.field_name(&name);
        encode_value(value_ty, value, w)?;
    }
    w.end_object();
    Ok(())
}

fn push_display(out: &mut String, value: impl fmt::Display) {
    let _ = write!(out, "{}", value);
}

/// String form of a map key under its (already vetted) static type.
fn key_text(ty: &Type, key: &Value) -> Result<String> {
    let mut out = String::new();
    match ty {
        Type::Boolean => out.push_str(primitives::bool_literal(key.as_bool()?)),
        Type::Int8 => push_display(&mut out, key.as_i8()?),
        Type::Int16 => push_display(&mut out, key.as_i16()?),
        Type::Int32 => push_display(&mut out, key.as_i32()?),
        Type::Int64 => push_display(&mut out, key.as_i64()?),
        Type::Uint8 => push_display(&mut out, key.as_u8()?),
        Type::Uint16 => push_display(&mut out, key.as_u16()?),
        Type::Uint32 => push_display(&mut out, key.as_u32()?),
        Type::Uint64 => push_display(&mut out, key.as_u64()?),
        Type::Float32 => {
            let v = key.as_f32()?;
            if v.is_finite() {
                number::write_f32(&mut out, v);
            } else {
                out.push_str(primitives::nonfinite_label(f64::from(v)));
            }
        }
        Type::Float64 => {
            let v = key.as_f64()?;
            if v.is_finite() {
                number::write_f64(&mut out, v);
            } else {
                out.push_str(primitives::nonfinite_label(v));
            }
        }
        Type::Decimal32 | Type::Decimal64 | Type::Decimal128 => {
            push_display(&mut out, key.as_decimal()?);
        }
        Type::Rstring | Type::Ustring | Type::Enum => out.push_str(key.as_str()?),
        other => return Err(Error::unsupported_key(other)),
    }
    Ok(out)
}
