//! PartialEq implementations for Value with Rust primitive types
//!
//! Lets values be compared directly against native values, which keeps
//! test assertions short.

use super::Value;
use uuid::Uuid;

macro_rules! impl_value_eq {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    matches!(self, Value::$variant(val) if val == other)
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other.eq(self)
                }
            }
        )*
    };
}

impl_value_eq! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Uuid => Uuid,
    String => String,
    Vec<u8> => Bytes,
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::String(val) if val == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Value::String(val) if val == *other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other.eq(self)
    }
}
