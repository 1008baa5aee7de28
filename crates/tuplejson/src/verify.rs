//! Pre-encode legality checks over static type tags.
//!
//! Legality is a property of the type, never of a particular value, so both
//! checks run before any output is produced for the construct they guard.

use crate::error::{Error, Result};
use crate::schema::Type;
use crate::value::{Field, Record};

/// Rejects map key types whose string form is not a faithful representation
/// of the value (containers elide their contents, timestamps and complex
/// numbers have no canonical text, blob and xml have none at all).
pub fn check_map_key(key: &Type) -> Result<()> {
    match key {
        Type::Xml
        | Type::Blob
        | Type::Timestamp
        | Type::List(_)
        | Type::BoundedList(..)
        | Type::Map(..)
        | Type::BoundedMap(..)
        | Type::Set(_)
        | Type::BoundedSet(..)
        | Type::Complex32
        | Type::Complex64
        | Type::Tuple => Err(Error::unsupported_key(key)),
        _ => Ok(()),
    }
}

/// True for the kinds that may serve as the serialization root when a single
/// field is selected instead of the whole record.
pub fn is_root_kind(ty: &Type) -> bool {
    matches!(
        ty,
        Type::Tuple
            | Type::List(_)
            | Type::BoundedList(..)
            | Type::Set(_)
            | Type::BoundedSet(..)
    )
}

/// Resolves a root field selector. Intended to run once at setup time, before
/// any record flows through.
pub fn check_root_field<'a>(record: &'a Record, name: &str) -> Result<&'a Field> {
    let field = record
        .field(name)
        .ok_or_else(|| Error::unknown_field(name))?;
    if is_root_kind(&field.ty) {
        Ok(field)
    } else {
        Err(Error::invalid_root(name, &field.ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disallowed_key_kinds() {
        let bad = [
            Type::Xml,
            Type::Blob,
            Type::Timestamp,
            Type::Tuple,
            Type::Complex32,
            Type::Complex64,
            Type::list(Type::Int32),
            Type::BoundedList(Box::new(Type::Int32), 4),
            Type::set(Type::Rstring),
            Type::BoundedSet(Box::new(Type::Rstring), 4),
            Type::map(Type::Rstring, Type::Int32),
            Type::BoundedMap(Box::new(Type::Rstring), Box::new(Type::Int32), 4),
        ];
        for ty in bad {
            assert!(check_map_key(&ty).is_err(), "{ty} must be rejected");
        }
    }

    #[test]
    fn allowed_key_kinds() {
        let good = [
            Type::Boolean,
            Type::Int8,
            Type::Int64,
            Type::Uint32,
            Type::Uint64,
            Type::Float32,
            Type::Float64,
            Type::Decimal128,
            Type::Rstring,
            Type::Ustring,
            Type::Enum,
        ];
        for ty in good {
            assert!(check_map_key(&ty).is_ok(), "{ty} must be accepted");
        }
    }
}
