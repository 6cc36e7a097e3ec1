use super::Value;
use crate::Result;
use uuid::Uuid;

/// The native type of a mapped property, with any `Option` wrapper removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point number
    F32,

    /// 64-bit floating point number
    F64,

    /// Raw byte sequence, stored as a blob
    Bytes,

    /// Globally unique identifier, stored as braced text
    Uuid,
}

impl Type {
    /// Rust name of the type, used in error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::String => "String",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Bytes => "Vec<u8>",
            Self::Uuid => "Uuid",
        }
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes)
    }

    pub fn is_uuid(&self) -> bool {
        matches!(self, Self::Uuid)
    }

    /// Coerces `value` into a value of this type.
    ///
    /// Numbers convert between each other when in range (floats round half
    /// to even), strings parse into numbers, booleans and UUIDs, and
    /// scalars format into strings.
    pub fn cast(&self, value: Value) -> Result<Value> {
        // Null values are passed through
        if value.is_null() {
            return Ok(value);
        }

        Ok(match self {
            Self::Bool => Value::Bool(value.try_into()?),
            Self::String => Value::String(value.try_into()?),
            Self::I8 => Value::I8(value.try_into()?),
            Self::I16 => Value::I16(value.try_into()?),
            Self::I32 => Value::I32(value.try_into()?),
            Self::I64 => Value::I64(value.try_into()?),
            Self::U8 => Value::U8(value.try_into()?),
            Self::U16 => Value::U16(value.try_into()?),
            Self::U32 => Value::U32(value.try_into()?),
            Self::U64 => Value::U64(value.try_into()?),
            Self::F32 => Value::F32(value.try_into()?),
            Self::F64 => Value::F64(value.try_into()?),
            Self::Bytes => Value::Bytes(value.try_into()?),
            Self::Uuid => Value::Uuid(value.try_into()?),
        })
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        let converted = match &value {
            Value::Bool(v) => Some(*v),
            Value::I8(v) => Some(*v != 0),
            Value::I16(v) => Some(*v != 0),
            Value::I32(v) => Some(*v != 0),
            Value::I64(v) => Some(*v != 0),
            Value::U8(v) => Some(*v != 0),
            Value::U16(v) => Some(*v != 0),
            Value::U32(v) => Some(*v != 0),
            Value::U64(v) => Some(*v != 0),
            Value::F32(v) => Some(*v != 0.0),
            Value::F64(v) => Some(*v != 0.0),
            Value::String(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            _ => None,
        };

        converted.ok_or_else(|| crate::Error::type_conversion(value, "bool"))
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            Value::Uuid(v) => Ok(v.to_string()),
            Value::Bool(_)
            | Value::I8(_)
            | Value::I16(_)
            | Value::I32(_)
            | Value::I64(_)
            | Value::U8(_)
            | Value::U16(_)
            | Value::U32(_)
            | Value::U64(_)
            | Value::F32(_)
            | Value::F64(_) => Ok(value.to_string()),
            _ => Err(crate::Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::Blob(blob) => Ok(blob.into_bytes()),
            _ => Err(crate::Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl TryFrom<Value> for Uuid {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(s) => match Uuid::parse_str(s.trim()) {
                Ok(v) => Ok(v),
                Err(_) => Err(crate::Error::type_conversion(Value::String(s), "Uuid")),
            },
            _ => Err(crate::Error::type_conversion(value, "Uuid")),
        }
    }
}
