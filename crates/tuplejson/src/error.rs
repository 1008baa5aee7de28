use thiserror::Error;

#[cfg(feature = "std")]
use std::io;

use crate::schema::Type;
use crate::value::Value;

#[derive(Debug, Error)]
pub enum Error {
    /// The value tree reached a type that has no JSON representation.
    #[error("JSON encoding not supported for {type_name}")]
    UnsupportedType { type_name: String },

    /// A map's key type has no faithful string form.
    #[error("JSON encoding not supported for map key type {type_name}")]
    UnsupportedKeyType { type_name: String },

    /// The selected root field is not a tuple, list or set.
    #[error("field `{field}` has type {type_name}; the serialization root must be a tuple, list or set")]
    InvalidRootType { field: String, type_name: String },

    /// The selected field does not exist in the record.
    #[error("no field named `{name}` in the record")]
    UnknownField { name: String },

    /// A value was read under a type of a different kind.
    #[error("value of kind {found} cannot be read as {expected}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn unsupported(ty: &Type) -> Self {
        Error::UnsupportedType {
            type_name: ty.to_string(),
        }
    }

    pub(crate) fn unsupported_key(ty: &Type) -> Self {
        Error::UnsupportedKeyType {
            type_name: ty.to_string(),
        }
    }

    pub(crate) fn mismatch(expected: &'static str, found: &Value) -> Self {
        Error::Mismatch {
            expected,
            found: found.kind_name(),
        }
    }

    pub(crate) fn unknown_field(name: &str) -> Self {
        Error::UnknownField { name: name.into() }
    }

    pub(crate) fn invalid_root(field: &str, ty: &Type) -> Self {
        Error::InvalidRootType {
            field: field.into(),
            type_name: ty.to_string(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
