//! Static type tags that drive encoding.

use core::fmt;

/// The closed set of field type kinds.
///
/// Collection kinds carry their element (and key) types statically; the
/// encoder reads values under these tags and never infers a type from a
/// runtime value. Bounded collection kinds encode identically to their
/// unbounded counterparts, the bound is schema metadata only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    Decimal32,
    Decimal64,
    Decimal128,
    Rstring,
    Ustring,
    /// Enumerated-label kind; encoded as its label string.
    Enum,
    Timestamp,
    /// Nested record; the schema travels with the value.
    Tuple,
    List(Box<Type>),
    BoundedList(Box<Type>, usize),
    Set(Box<Type>),
    BoundedSet(Box<Type>, usize),
    Map(Box<Type>, Box<Type>),
    BoundedMap(Box<Type>, Box<Type>, usize),
    Complex32,
    Complex64,
    Blob,
    Xml,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Boolean => f.write_str("boolean"),
            Type::Int8 => f.write_str("int8"),
            Type::Int16 => f.write_str("int16"),
            Type::Int32 => f.write_str("int32"),
            Type::Int64 => f.write_str("int64"),
            Type::Uint8 => f.write_str("uint8"),
            Type::Uint16 => f.write_str("uint16"),
            Type::Uint32 => f.write_str("uint32"),
            Type::Uint64 => f.write_str("uint64"),
            Type::Float32 => f.write_str("float32"),
            Type::Float64 => f.write_str("float64"),
            Type::Decimal32 => f.write_str("decimal32"),
            Type::Decimal64 => f.write_str("decimal64"),
            Type::Decimal128 => f.write_str("decimal128"),
            Type::Rstring => f.write_str("rstring"),
            Type::Ustring => f.write_str("ustring"),
            Type::Enum => f.write_str("enum"),
            Type::Timestamp => f.write_str("timestamp"),
            Type::Tuple => f.write_str("tuple"),
            Type::List(elem) => write!(f, "list<{}>", elem),
            Type::BoundedList(elem, bound) => write!(f, "list<{}>[{}]", elem, bound),
            Type::Set(elem) => write!(f, "set<{}>", elem),
            Type::BoundedSet(elem, bound) => write!(f, "set<{}>[{}]", elem, bound),
            Type::Map(key, value) => write!(f, "map<{},{}>", key, value),
            Type::BoundedMap(key, value, bound) => write!(f, "map<{},{}>[{}]", key, value, bound),
            Type::Complex32 => f.write_str("complex32"),
            Type::Complex64 => f.write_str("complex64"),
            Type::Blob => f.write_str("blob"),
            Type::Xml => f.write_str("xml"),
        }
    }
}

impl Type {
    /// Shorthand for a `list<elem>` tag.
    pub fn list(elem: Type) -> Type {
        Type::List(Box::new(elem))
    }

    /// Shorthand for a `set<elem>` tag.
    pub fn set(elem: Type) -> Type {
        Type::Set(Box::new(elem))
    }

    /// Shorthand for a `map<key,value>` tag.
    pub fn map(key: Type, value: Type) -> Type {
        Type::Map(Box::new(key), Box::new(value))
    }
}
