use crate::stmt;

/// Feature store field kinds.
///
/// `FieldType` is the **external** representation a feature table uses for
/// a column, as opposed to [`stmt::Type`], which is the native type of the
/// mapped property.
///
/// ```text
/// stmt::Type::I16, I8, U8, Bool  →  FieldType::SmallInteger
/// stmt::Type::I32, U16           →  FieldType::Integer
/// stmt::Type::I64, U32, U64      →  FieldType::BigInteger
/// stmt::Type::F32                →  FieldType::Single
/// stmt::Type::F64                →  FieldType::Double
/// stmt::Type::String             →  FieldType::String
/// stmt::Type::Uuid               →  FieldType::Guid
/// stmt::Type::Bytes              →  FieldType::Blob
/// ```
///
/// The store has no boolean kind, so `bool` is kept as 0/1. `u64` has no
/// kind that holds its full range; values above `i64::MAX` cannot be
/// stored in a `BigInteger` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    /// 2-byte signed integer
    SmallInteger,

    /// 4-byte signed integer
    Integer,

    /// 8-byte signed integer
    BigInteger,

    /// Single precision floating point number
    Single,

    /// Double precision floating point number
    Double,

    /// Text, optionally bounded by the field length
    String,

    /// Braced GUID text
    Guid,

    /// Binary large object
    Blob,
}

impl FieldType {
    /// Maps a native property type to the store field kind that holds it.
    pub fn from_app(ty: &stmt::Type) -> FieldType {
        match ty {
            stmt::Type::Bool | stmt::Type::I8 | stmt::Type::U8 | stmt::Type::I16 => {
                FieldType::SmallInteger
            }
            stmt::Type::U16 | stmt::Type::I32 => FieldType::Integer,
            stmt::Type::U32 | stmt::Type::I64 => FieldType::BigInteger,
            // Widest store kind; lossy above `i64::MAX`.
            stmt::Type::U64 => FieldType::BigInteger,
            stmt::Type::F32 => FieldType::Single,
            stmt::Type::F64 => FieldType::Double,
            stmt::Type::String => FieldType::String,
            stmt::Type::Uuid => FieldType::Guid,
            stmt::Type::Bytes => FieldType::Blob,
        }
    }

    /// Returns `true` if fields of this kind take a length.
    pub fn has_length(&self) -> bool {
        matches!(self, FieldType::String)
    }
}
