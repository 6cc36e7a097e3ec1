use super::{MemoryBlobStream, Type};
use uuid::Uuid;

/// A dynamically typed value, on either side of the object/store boundary.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Store-native streaming blob handle
    Blob(MemoryBlobStream),

    /// Boolean value
    Bool(bool),

    /// Raw byte sequence
    Bytes(Vec<u8>),

    /// 32-bit floating point number
    F32(f32),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 128-bit globally unique identifier
    Uuid(Uuid),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the native type of this value.
    ///
    /// `Null` and `Blob` have no native type. A blob is only ever a store
    /// representation of [`Type::Bytes`].
    pub fn infer_ty(&self) -> Option<Type> {
        Some(match self {
            Self::Bool(_) => Type::Bool,
            Self::Bytes(_) => Type::Bytes,
            Self::F32(_) => Type::F32,
            Self::F64(_) => Type::F64,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::String(_) => Type::String,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
            Self::Uuid(_) => Type::Uuid,
            Self::Null | Self::Blob(_) => return None,
        })
    }

    pub fn is_a(&self, ty: &Type) -> bool {
        match self {
            Self::Null => true,
            _ => self.infer_ty().as_ref() == Some(ty),
        }
    }

    /// Name of the variant, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Blob(_) => "Blob",
            Self::Bool(_) => "Bool",
            Self::Bytes(_) => "Bytes",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::Null => "Null",
            Self::String(_) => "String",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::Uuid(_) => "Uuid",
        }
    }
}

/// Text form of the value, as shown in conversion errors.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Self::Blob(v) => write!(f, "<blob {} bytes>", v.len()),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Bytes(v) => {
                for byte in v {
                    write!(f, "{byte:02X}")?;
                }
                Ok(())
            }
            Self::F32(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::I8(v) => write!(f, "{v}"),
            Self::I16(v) => write!(f, "{v}"),
            Self::I32(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::Null => f.write_str("null"),
            Self::String(v) => f.write_str(v),
            Self::U8(v) => write!(f, "{v}"),
            Self::U16(v) => write!(f, "{v}"),
            Self::U32(v) => write!(f, "{v}"),
            Self::U64(v) => write!(f, "{v}"),
            Self::Uuid(v) => write!(f, "{v}"),
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(src: Vec<u8>) -> Self {
        Self::Bytes(src)
    }
}

impl From<&[u8]> for Value {
    fn from(src: &[u8]) -> Self {
        Self::Bytes(src.to_vec())
    }
}

impl From<Uuid> for Value {
    fn from(src: Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<MemoryBlobStream> for Value {
    fn from(src: MemoryBlobStream) -> Self {
        Self::Blob(src)
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}
