//! Encoding pipeline: buffer management and the string-producing entry
//! points behind the crate-level API.

pub mod encoders;
pub mod primitives;
pub mod writer;

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::encode::writer::JsonWriter;
use crate::error::{Error, Result};
use crate::schema::Type;
use crate::value::{Field, Record};
use crate::verify;

/// Advisory initial capacity for whole-record output buffers. Updated to the
/// previous successful output length; carries no invariant beyond that.
static OUTPUT_SIZE_HINT: AtomicUsize = AtomicUsize::new(512);

/// JSON object text for the whole record.
pub fn record_to_string(record: &Record) -> Result<String> {
    let mut w = JsonWriter::with_capacity(OUTPUT_SIZE_HINT.load(Ordering::Relaxed));
    encoders::encode_record_into(record, &mut w)?;
    let out = w.into_string();
    OUTPUT_SIZE_HINT.store(out.len(), Ordering::Relaxed);
    Ok(out)
}

/// Bare JSON array text for a list- or set-typed field; the field's own name
/// is not written.
pub fn collection_field_to_string(record: &Record, name: &str) -> Result<String> {
    let field = record
        .field(name)
        .ok_or_else(|| Error::unknown_field(name))?;
    collection_items_to_string(field)
}

/// Root-field dispatch: a tuple field becomes object text, a list or set
/// field becomes array text, anything else is rejected.
pub fn root_field_to_string(record: &Record, name: &str) -> Result<String> {
    let field = verify::check_root_field(record, name)?;
    match &field.ty {
        Type::Tuple => record_to_string(field.value.as_tuple()?),
        _ => collection_items_to_string(field),
    }
}

fn collection_items_to_string(field: &Field) -> Result<String> {
    let mut w = JsonWriter::new();
    match &field.ty {
        Type::List(elem) | Type::BoundedList(elem, _) => {
            encoders::encode_items(elem, field.value.as_list()?, &mut w)?;
        }
        Type::Set(elem) | Type::BoundedSet(elem, _) => {
            encoders::encode_items(elem, field.value.as_set()?, &mut w)?;
        }
        other => return Err(Error::invalid_root(&field.name, other)),
    }
    Ok(w.into_string())
}
